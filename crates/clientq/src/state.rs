//! Shared application state.
//!
//! Handlers only see the `ClientLookup` trait object. Which store and cache
//! sit behind it is decided at compile time via feature flags.

use std::sync::Arc;

use clientq_core::cache::CLIENT_CACHE_NAME;
use clientq_core::lookup::ClientLookup;

use crate::config::Config;
use crate::context::ContextHandle;
use crate::mock_data::seed_demo_clients;
use crate::storage::ReadThroughLookup;

/// Shared application state, cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub client_lookup: Arc<dyn ClientLookup>,
}

impl AppState {
    pub fn from_lookup(client_lookup: Arc<dyn ClientLookup>) -> Self {
        Self { client_lookup }
    }

    /// Opens the configured store and cache and wires the read-through lookup.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repository = open_repository(config).await?;

        if config.seed_demo_data {
            let inserted = seed_demo_clients(repository.as_ref()).await?;
            tracing::info!(inserted, "Seeded demo clients");
        }

        let cache = open_cache(config).await?;
        let context = ContextHandle::spawn("clientq-lookup")?;

        tracing::info!(
            context = %context.id(),
            cache_ttl_seconds = ?config.cache_ttl_seconds,
            "Client lookup ready"
        );

        let lookup =
            ReadThroughLookup::new(repository, cache, context).with_ttl(config.cache_ttl());

        Ok(Self::from_lookup(Arc::new(lookup)))
    }
}

#[cfg(feature = "inmemory")]
async fn open_repository(
    _config: &Config,
) -> Result<Arc<crate::storage::InMemoryRepository>, anyhow::Error> {
    tracing::info!("Using in-memory client store");
    Ok(Arc::new(crate::storage::InMemoryRepository::new()))
}

#[cfg(feature = "sqlite")]
async fn open_repository(
    config: &Config,
) -> Result<Arc<crate::storage::SqliteRepository>, anyhow::Error> {
    tracing::info!(path = %config.sqlite_path, "Using SQLite client store");
    let repository = crate::storage::SqliteRepository::new(&config.sqlite_path).await?;
    Ok(Arc::new(repository))
}

#[cfg(feature = "memory")]
async fn open_cache(config: &Config) -> Result<Arc<crate::cache::MemoryCache>, anyhow::Error> {
    tracing::info!(
        cache = CLIENT_CACHE_NAME,
        max_entries = config.cache_max_entries,
        "Using in-memory cache"
    );
    Ok(Arc::new(crate::cache::MemoryCache::new(
        config.cache_max_entries,
    )))
}

#[cfg(feature = "redis")]
async fn open_cache(config: &Config) -> Result<Arc<crate::cache::RedisCache>, anyhow::Error> {
    tracing::info!(cache = CLIENT_CACHE_NAME, url = %config.redis_url, "Using Redis cache");
    let cache = crate::cache::RedisCache::new(&config.redis_url).await?;
    Ok(Arc::new(cache))
}

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// State backed by an in-memory store seeded with the demo clients
        /// and an empty in-memory cache.
        pub async fn for_tests() -> Self {
            let repository = Arc::new(InMemoryRepository::new());
            seed_demo_clients(repository.as_ref()).await.unwrap();
            let cache = Arc::new(MemoryCache::new(100));
            let context = ContextHandle::spawn("clientq-test").unwrap();

            Self::from_lookup(Arc::new(ReadThroughLookup::new(
                repository, cache, context,
            )))
        }
    }
}

#[cfg(all(test, feature = "inmemory", feature = "memory"))]
mod tests {
    use super::*;
    use clientq_core::client::Document;
    use clientq_core::lookup::LookupSource;

    #[tokio::test]
    async fn test_new_seeds_demo_data() {
        let state = AppState::new(&Config::default()).await.unwrap();

        let outcome = state
            .client_lookup
            .lookup_with_source(&Document::parse("12345").unwrap())
            .await
            .unwrap();

        assert_eq!(outcome.source, LookupSource::Store);
        assert_eq!(outcome.client.map(|c| c.name), Some("John Doe".to_string()));
    }

    #[tokio::test]
    async fn test_new_without_seeding_starts_empty() {
        let config = Config {
            seed_demo_data: false,
            ..Config::default()
        };
        let state = AppState::new(&config).await.unwrap();

        let client = state
            .client_lookup
            .lookup(&Document::parse("12345").unwrap())
            .await
            .unwrap();

        assert_eq!(client, None);
    }
}
