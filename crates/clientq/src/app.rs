use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    context::{propagate_correlation_id, CORRELATION_ID_HEADER},
    handlers::{
        clients::{get_client, LOOKUP_SOURCE_HEADER},
        health::livez,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let correlation_header = HeaderName::from_static(CORRELATION_ID_HEADER);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, correlation_header.clone()])
        .expose_headers([
            correlation_header,
            HeaderName::from_static(LOOKUP_SOURCE_HEADER),
        ]);

    let api_routes = Router::new()
        .route("/clients/{document}", get(get_client))
        .layer(cors);

    // Correlation is the outermost layer so every log line of a request,
    // including TraceLayer's, carries the id.
    Router::new()
        .route("/livez", get(livez))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .layer(middleware::from_fn(propagate_correlation_id))
        .with_state(state)
}
