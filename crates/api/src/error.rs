//! HTTP mapping of request outcomes

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use profilegate_domain::ProfileError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Domain(#[from] ProfileError),
}

impl ApiError {
    /// HTTP status for this outcome.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Domain(err) => match err {
                ProfileError::AuthorizationDenied { .. } => StatusCode::FORBIDDEN,
                ProfileError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ProfileError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
                ProfileError::Persistence(_)
                | ProfileError::Config(_)
                | ProfileError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Stable label suitable for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::BadRequest(_) => "bad_request",
            Self::Domain(err) => err.label(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            // The caller learns nothing about the target beyond the refusal.
            Self::Domain(ProfileError::AuthorizationDenied { .. }) => status.into_response(),
            Self::Domain(ProfileError::ValidationFailed(errors)) => {
                (status, Json(errors)).into_response()
            }
            Self::Domain(
                ref err @ (ProfileError::Persistence(_)
                | ProfileError::Config(_)
                | ProfileError::Internal(_)),
            ) => {
                tracing::error!(error = %err, "request failed");
                (status, Json(json!({ "error": "internal server error" }))).into_response()
            }
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}
