use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clientq_core::client::DocumentError;
use clientq_core::lookup::{lookup_error_to_status_code, LookupError};
use clientq_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::models::ResponseBody;

/// Handler error rendered as a JSON envelope with a `null` body.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(err) = self.0.downcast_ref::<LookupError>() {
            lookup_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(err)
        } else if self.0.downcast_ref::<DocumentError>().is_some() {
            400
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = status.as_u16(), "Request failed");
        }

        let envelope: ResponseBody<()> = ResponseBody::empty(status, self.0.to_string());
        (status, Json(envelope)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_document_is_bad_request() {
        let err = AppError::from(DocumentError::Blank);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_outage_is_service_unavailable() {
        let err = AppError::from(LookupError::Repository(RepositoryError::ConnectionFailed(
            "refused".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_unknown_error_is_internal() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
