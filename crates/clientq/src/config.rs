use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL in seconds. `None` (the default) writes entries without expiry.
    pub cache_ttl_seconds: Option<u64>,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "clientq.db")
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
    /// Seed the store with demo clients on startup (default: true)
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds, unset or 0 for no expiry
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "clientq.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `SEED_DEMO_DATA` - "false" or "0" disables demo seeding
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_ttl_seconds: var("CACHE_TTL_SECONDS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&secs| secs > 0),
            cache_max_entries: var("CACHE_MAX_ENTRIES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(10_000),
            sqlite_path: var("SQLITE_PATH").unwrap_or_else(|| "clientq.db".to_string()),
            redis_url: var("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            seed_demo_data: var("SEED_DEMO_DATA")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        }
    }

    /// Get cache TTL as a Duration, if any.
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_seconds.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.cache_ttl_seconds, None);
        assert_eq!(config.cache_ttl(), None);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.sqlite_path, "clientq.db");
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_cache_ttl_conversion() {
        let config = config_with(&[("CACHE_TTL_SECONDS", "600")]);
        assert_eq!(config.cache_ttl(), Some(Duration::from_secs(600)));
    }

    #[test]
    fn test_zero_ttl_means_no_expiry() {
        let config = config_with(&[("CACHE_TTL_SECONDS", "0")]);
        assert_eq!(config.cache_ttl(), None);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = config_with(&[
            ("CACHE_TTL_SECONDS", "soon"),
            ("CACHE_MAX_ENTRIES", "-5"),
        ]);

        assert_eq!(config.cache_ttl(), None);
        assert_eq!(config.cache_max_entries, 10_000);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("CACHE_MAX_ENTRIES", "50"),
            ("SQLITE_PATH", "/tmp/clients.db"),
            ("REDIS_URL", "redis://cache:6379"),
        ]);

        assert_eq!(config.cache_max_entries, 50);
        assert_eq!(config.sqlite_path, "/tmp/clients.db");
        assert_eq!(config.redis_url, "redis://cache:6379");
    }

    #[test]
    fn test_seed_demo_data_can_be_disabled() {
        for value in ["false", "FALSE", "0", "no"] {
            assert!(!config_with(&[("SEED_DEMO_DATA", value)]).seed_demo_data);
        }
        assert!(config_with(&[("SEED_DEMO_DATA", "true")]).seed_demo_data);
    }
}
