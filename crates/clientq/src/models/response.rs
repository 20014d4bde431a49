//! JSON response envelope shared by the API endpoints.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

pub const CLIENT_FOUND_MESSAGE: &str = "Client retrieved successfully";
pub const CLIENT_NOT_FOUND_MESSAGE: &str = "Client not found or does not exist";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    pub response_code: u16,
    pub response_message: String,
}

/// Envelope wrapping every API payload.
///
/// ```json
/// {"header": {"responseCode": 200, "responseMessage": "..."}, "body": {...}}
/// ```
///
/// `body` serializes as `null` when there is nothing to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody<T> {
    pub header: ResponseHeader,
    pub body: Option<T>,
}

impl<T> ResponseBody<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, body: Option<T>) -> Self {
        Self {
            header: ResponseHeader {
                response_code: status.as_u16(),
                response_message: message.into(),
            },
            body,
        }
    }

    /// 200 envelope carrying `body`.
    pub fn ok(body: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, message, Some(body))
    }

    /// Envelope with a `null` body.
    pub fn empty(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message, None)
    }
}
