//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use clientq_core::client::{Client, Document};
use clientq_core::storage::{ClientRepository, RepositoryError, Result};

/// In-memory client store keyed by document.
///
/// Document and email are both unique, mirroring the SQLite schema.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    clients: Arc<RwLock<HashMap<String, Client>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored clients.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.clients.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.clients.read().await.is_empty()
    }
}

#[async_trait]
impl ClientRepository for InMemoryRepository {
    async fn get_client_by_document(&self, document: &Document) -> Result<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.get(document.as_str()).cloned())
    }

    async fn create_client(&self, client: &Client) -> Result<()> {
        let document = Document::parse(&client.document)
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

        let mut clients = self.clients.write().await;
        if clients.contains_key(document.as_str()) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Client",
                id: document.to_string(),
            });
        }
        if !client.email.is_empty() && clients.values().any(|c| c.email == client.email) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Client",
                id: client.email.clone(),
            });
        }

        let mut stored = client.clone();
        stored.document = document.to_string();
        clients.insert(stored.document.clone(), stored);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(document: &str, email: &str) -> Client {
        Client::new(&Document::parse(document).unwrap(), "CC", "Test Client").with_email(email)
    }

    #[tokio::test]
    async fn test_create_and_get_client() {
        let repo = InMemoryRepository::new();
        let c = client("12345", "john@example.com");

        repo.create_client(&c).await.unwrap();

        let found = repo
            .get_client_by_document(&Document::parse("12345").unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(c));
    }

    #[tokio::test]
    async fn test_get_missing_client_returns_none() {
        let repo = InMemoryRepository::new();

        let found = repo
            .get_client_by_document(&Document::parse("99999").unwrap())
            .await
            .unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_duplicate_document_rejected() {
        let repo = InMemoryRepository::new();
        repo.create_client(&client("12345", "a@example.com"))
            .await
            .unwrap();

        let result = repo.create_client(&client("12345", "b@example.com")).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Client",
                ..
            })
        ));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryRepository::new();
        repo.create_client(&client("1", "same@example.com"))
            .await
            .unwrap();

        let result = repo.create_client(&client("2", "same@example.com")).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_blank_document_rejected() {
        let repo = InMemoryRepository::new();
        let mut c = client("1", "x@example.com");
        c.document = "   ".to_string();

        let result = repo.create_client(&c).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();

        repo.create_client(&client("12345", "john@example.com"))
            .await
            .unwrap();

        assert_eq!(other.len().await, 1);
    }
}
