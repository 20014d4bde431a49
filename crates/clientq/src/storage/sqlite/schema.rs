//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    document TEXT NOT NULL UNIQUE,
    document_type TEXT NOT NULL,
    name TEXT NOT NULL,
    phone TEXT NOT NULL DEFAULT '',
    email TEXT UNIQUE,
    address TEXT NOT NULL DEFAULT '',
    credit_card TEXT NOT NULL DEFAULT ''
);
"#;

pub const INSERT_CLIENT: &str = r#"
INSERT INTO clients (document, document_type, name, phone, email, address, credit_card)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_CLIENT_BY_DOCUMENT: &str = r#"
SELECT document, document_type, name, phone, email, address, credit_card
FROM clients
WHERE document = ?1
"#;
