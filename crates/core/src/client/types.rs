use std::fmt;

use serde::{Deserialize, Serialize};

use super::DocumentError;

/// Unique identity document of a client.
///
/// Used as the key in both the cache and the durable store. A `Document` is
/// never blank: the only way to build one is [`Document::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(String);

impl Document {
    /// Parses a raw document, trimming surrounding whitespace.
    ///
    /// Returns `DocumentError::Blank` if nothing is left after trimming.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DocumentError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DocumentError::Blank);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the document as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A client record.
///
/// The durable store owns the record; the cache only ever holds a disposable
/// copy. All fields are replaced wholesale, there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub document: String,
    pub document_type: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub credit_card: String,
}

impl Client {
    /// Creates a client with the given document, document type and name.
    ///
    /// Contact fields start empty; use the `with_*` setters to fill them.
    pub fn new(
        document: &Document,
        document_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            document: document.as_str().to_string(),
            document_type: document_type.into(),
            name: name.into(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            credit_card: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_credit_card(mut self, credit_card: impl Into<String>) -> Self {
        self.credit_card = credit_card.into();
        self
    }
}
