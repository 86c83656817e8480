//! Client-facing error shape
//!
//! Every classified failure becomes `{"error": "<message>"}` with a fixed
//! message per kind. Internal diagnostic detail never reaches the response
//! body; it is logged at the point the error is classified.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Stable error messages, matched byte-for-byte by clients
pub mod messages {
    pub const CREDENTIAL_NOT_CONFIGURED: &str = "Google API key not configured";
    pub const CONTENT_TYPE_NOT_JSON: &str = "Content-Type must be application/json";
    pub const ESSAY_REQUIRED: &str = "Essay text is required";
    pub const EVALUATION_FAILED: &str = "Failed to evaluate essay. Please try again.";
}

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    /// Service misconfigured: required credential is absent
    pub fn credential_not_configured() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::CREDENTIAL_NOT_CONFIGURED,
        )
    }

    /// Request body was not declared as JSON
    pub fn unsupported_media_type() -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            messages::CONTENT_TYPE_NOT_JSON,
        )
    }

    /// Essay text absent or blank
    pub fn essay_required() -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages::ESSAY_REQUIRED)
    }

    /// Client input rejected with a specific message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// The evaluation workflow failed or returned unusable data
    pub fn evaluation_failed() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::EVALUATION_FAILED,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Configuration { .. } => Self::credential_not_configured(),
            DomainError::UnsupportedMediaType { .. } => Self::unsupported_media_type(),
            DomainError::MissingInput { .. } => Self::essay_required(),
            DomainError::Validation { message } => Self::bad_request(message),
            // Anything that escaped the workflow boundary surfaces as the
            // generic evaluation failure; the detail stays server-side.
            DomainError::Evaluation { .. }
            | DomainError::Provider { .. }
            | DomainError::Internal { .. } => Self::evaluation_failed(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.error)
    }
}

impl std::error::Error for ApiError {}
