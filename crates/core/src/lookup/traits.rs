use async_trait::async_trait;

use crate::client::{Client, Document};

use super::{LookupOutcome, Result};

/// Resolves clients by document across the cache and durable tiers.
#[async_trait]
pub trait ClientLookup: Send + Sync {
    /// Looks up a client and reports which tier answered.
    async fn lookup_with_source(&self, document: &Document) -> Result<LookupOutcome>;

    /// Looks up a client by document.
    ///
    /// `Ok(None)` means neither tier has the document; that is not an error.
    async fn lookup(&self, document: &Document) -> Result<Option<Client>> {
        Ok(self.lookup_with_source(document).await?.client)
    }
}
