//! Correlation id propagation middleware.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use super::CorrelationId;

/// Header carrying the correlation id on requests and responses.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Reads the correlation id from the headers, generating one when absent.
pub(super) fn correlation_id_from_headers(headers: &HeaderMap) -> CorrelationId {
    headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(CorrelationId::from_header_value)
        .unwrap_or_default()
}

/// Middleware that resolves the request's correlation id.
///
/// The id is stored in request extensions, recorded on a `request` span that
/// wraps the rest of the stack, and echoed back in the response header.
pub async fn propagate_correlation_id(mut request: Request, next: Next) -> Response {
    let correlation_id = correlation_id_from_headers(request.headers());
    request.extensions_mut().insert(correlation_id.clone());

    let span = tracing::info_span!(
        "request",
        correlation_id = %correlation_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(correlation_id.as_str()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Extension, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/echo",
                get(|Extension(id): Extension<CorrelationId>| async move { id.to_string() }),
            )
            .layer(middleware::from_fn(propagate_correlation_id))
    }

    #[test]
    fn test_from_headers_uses_supplied_value() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, "abc-123".parse().unwrap());

        assert_eq!(correlation_id_from_headers(&headers).as_str(), "abc-123");
    }

    #[test]
    fn test_from_headers_generates_when_blank() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, "  ".parse().unwrap());

        let id = correlation_id_from_headers(&headers);
        uuid::Uuid::parse_str(id.as_str()).expect("Should be valid UUID");
    }

    #[tokio::test]
    async fn test_supplied_id_is_echoed() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/echo")
                    .header("X-Correlation-ID", "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CORRELATION_ID_HEADER], "req-42");
    }

    #[tokio::test]
    async fn test_missing_id_is_generated_and_echoed() {
        let response = app()
            .oneshot(axum::http::Request::builder().uri("/echo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let header = response.headers()[CORRELATION_ID_HEADER]
            .to_str()
            .unwrap()
            .to_string();
        uuid::Uuid::parse_str(&header).expect("Should be valid UUID");
    }
}
