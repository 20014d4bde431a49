//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use clientq_core::client::{Client, Document};
use clientq_core::storage::{ClientRepository, RepositoryError, Result};

use super::conversions::{email_to_sql, row_to_client};
use super::error::map_tokio_rusqlite_error;
use super::schema;

fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed client store.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) the database file at `path` and ensures the schema exists.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository backed by an in-memory database.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ClientRepository for SqliteRepository {
    async fn get_client_by_document(&self, document: &Document) -> Result<Option<Client>> {
        let doc = document.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CLIENT_BY_DOCUMENT)
                    .map_err(wrap_err)?;
                match stmt.query_row([&doc], row_to_client) {
                    Ok(client) => Ok(Some(client)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Client", document.as_str()))
    }

    async fn create_client(&self, client: &Client) -> Result<()> {
        let document = Document::parse(&client.document)
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
        let mut row = client.clone();
        row.document = document.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CLIENT,
                    rusqlite::params![
                        row.document,
                        row.document_type,
                        row.name,
                        row.phone,
                        email_to_sql(&row.email),
                        row.address,
                        row.credit_card,
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Client", document.as_str()))
    }
}
