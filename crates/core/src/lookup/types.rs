use std::fmt;

use crate::client::Client;

/// Which tier answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupSource {
    /// Served from the cache without touching the durable store.
    Cache,
    /// Cache miss; served from the durable store.
    Store,
    /// Neither tier has the document.
    NotFound,
}

impl LookupSource {
    /// Returns a stable label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupSource::Cache => "cache",
            LookupSource::Store => "store",
            LookupSource::NotFound => "not_found",
        }
    }
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful lookup together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub client: Option<Client>,
    pub source: LookupSource,
}

impl LookupOutcome {
    pub fn from_cache(client: Client) -> Self {
        Self {
            client: Some(client),
            source: LookupSource::Cache,
        }
    }

    pub fn from_store(client: Client) -> Self {
        Self {
            client: Some(client),
            source: LookupSource::Store,
        }
    }

    pub fn not_found() -> Self {
        Self {
            client: None,
            source: LookupSource::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Document;

    #[test]
    fn test_constructors_set_source() {
        let document = Document::parse("12345").unwrap();
        let client = Client::new(&document, "CC", "John Doe");

        assert_eq!(
            LookupOutcome::from_cache(client.clone()).source,
            LookupSource::Cache
        );
        assert_eq!(LookupOutcome::from_store(client).source, LookupSource::Store);

        let missing = LookupOutcome::not_found();
        assert_eq!(missing.source, LookupSource::NotFound);
        assert!(missing.client.is_none());
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(LookupSource::Cache.to_string(), "cache");
        assert_eq!(LookupSource::Store.to_string(), "store");
        assert_eq!(LookupSource::NotFound.to_string(), "not_found");
    }
}
