//! # REST API Errors
//!
//! Error types for the REST API module and their HTTP mapping.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::observability::Event;
use crate::schema::SchemaError;
use crate::storage::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Referenced id or filter matched nothing
    #[error("{0}")]
    NotFound(String),

    /// Name already taken
    #[error("{0}")]
    Conflict(String),

    /// Payload or path value failed validation
    #[error("{0}")]
    Validation(#[from] SchemaError),

    /// Body, path or query string could not be extracted
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage failure while serving the request
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Term lookup by id failed
    pub fn term_not_found() -> Self {
        RestError::NotFound("Term not found".to_string())
    }

    /// Create or rename onto a name that is taken
    pub fn term_exists() -> Self {
        RestError::Conflict("Term already exists".to_string())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Conflict(_) => StatusCode::BAD_REQUEST,
            RestError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::Rejected { status, .. } => *status,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => RestError::term_exists(),
            other => {
                error!(event = Event::StorageFailed.as_str(), error = %other);
                RestError::Internal(other.to_string())
            }
        }
    }
}

// Extractor rejections keep axum's status (400, 415 or 422) and message.
impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for RestError {
    fn from(rejection: PathRejection) -> Self {
        RestError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for RestError {
    fn from(rejection: QueryRejection) -> Self {
        RestError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            warn!(
                event = Event::RequestRejected.as_str(),
                status = status.as_u16(),
                reason = %self
            );
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
