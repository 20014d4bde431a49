use crate::client::Document;

/// Name of the logical cache holding client records.
pub const CLIENT_CACHE_NAME: &str = "CLIENT-LIST";

/// Prefix shared by every client cache key.
pub const CLIENT_KEY_PREFIX: &str = "client:";

/// Returns the cache key for a client document.
pub fn client_key(document: &Document) -> String {
    format!("{CLIENT_KEY_PREFIX}{document}")
}
