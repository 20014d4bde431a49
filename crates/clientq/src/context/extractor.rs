//! Axum extractor for RequestContext.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use super::correlation::correlation_id_from_headers;
use super::types::{CorrelationId, RequestContext};

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The middleware normally resolved it already; fall back to the headers.
        let correlation_id = parts
            .extensions
            .get::<CorrelationId>()
            .cloned()
            .unwrap_or_else(|| correlation_id_from_headers(&parts.headers));

        Ok(RequestContext { correlation_id })
    }
}
