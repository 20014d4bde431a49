use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use clientq_core::client::Document;

use crate::{
    context::RequestContext,
    handlers::AppError,
    models::{ResponseBody, CLIENT_FOUND_MESSAGE, CLIENT_NOT_FOUND_MESSAGE},
    state::AppState,
};

/// Response header naming the tier that answered the lookup.
pub const LOOKUP_SOURCE_HEADER: &str = "x-lookup-source";

/// Get a client by document (GET /api/v1/clients/{document}).
pub async fn get_client(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(raw_document): Path<String>,
) -> Result<Response, AppError> {
    let document = Document::parse(&raw_document)?;

    let outcome = state.client_lookup.lookup_with_source(&document).await?;
    let source = HeaderValue::from_static(outcome.source.as_str());

    let mut response = match outcome.client {
        Some(client) => {
            tracing::info!(
                correlation_id = %ctx.correlation_id,
                %document,
                source = %outcome.source,
                "Client retrieved"
            );
            (
                StatusCode::OK,
                Json(ResponseBody::ok(client, CLIENT_FOUND_MESSAGE)),
            )
                .into_response()
        }
        None => {
            tracing::info!(correlation_id = %ctx.correlation_id, %document, "Client not found");
            let envelope: ResponseBody<()> =
                ResponseBody::empty(StatusCode::NOT_FOUND, CLIENT_NOT_FOUND_MESSAGE);
            (StatusCode::NOT_FOUND, Json(envelope)).into_response()
        }
    };

    response.headers_mut().insert(LOOKUP_SOURCE_HEADER, source);
    Ok(response)
}
