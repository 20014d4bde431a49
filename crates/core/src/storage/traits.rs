use async_trait::async_trait;

use crate::client::{Client, Document};

use super::Result;

/// Durable store for client records.
///
/// This is the authoritative source of truth. Reads are point lookups by the
/// unique document; no multi-record transactions are required.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Gets a client by its document.
    async fn get_client_by_document(&self, document: &Document) -> Result<Option<Client>>;

    /// Creates a new client. Fails with `AlreadyExists` if the document is taken.
    async fn create_client(&self, client: &Client) -> Result<()>;
}
