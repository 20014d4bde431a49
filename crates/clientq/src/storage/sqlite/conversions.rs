//! SQLite row conversion functions.

use clientq_core::client::Client;
use rusqlite::Row;

/// Convert a SQLite row to a Client.
///
/// Expected columns: document, document_type, name, phone, email, address, credit_card
pub fn row_to_client(row: &Row) -> rusqlite::Result<Client> {
    let email: Option<String> = row.get(4)?;

    Ok(Client {
        document: row.get(0)?,
        document_type: row.get(1)?,
        name: row.get(2)?,
        phone: row.get(3)?,
        email: email.unwrap_or_default(),
        address: row.get(5)?,
        credit_card: row.get(6)?,
    })
}

/// Email is stored as NULL when empty so the UNIQUE constraint ignores it.
pub fn email_to_sql(email: &str) -> Option<&str> {
    (!email.is_empty()).then_some(email)
}
