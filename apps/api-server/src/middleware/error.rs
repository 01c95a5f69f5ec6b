//! Error handling - maps failures onto `{error, details?}` responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode, web};
use socialplan_core::{DomainError, RepoError};
use socialplan_shared::ErrorResponse;

/// Application-level error type rendered as an [`ErrorResponse`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input, detected before touching the store.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Store failure. `details` carries the underlying cause.
    #[error("{message}: {details}")]
    Internal { message: String, details: String },
}

impl AppError {
    /// Wrap a store error with what the handler was trying to do.
    ///
    /// A missing row stays a 404; everything else becomes a 500.
    pub fn store(message: &str, err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Post not found".to_string()),
            other => AppError::Internal {
                message: message.to_string(),
                details: other.to_string(),
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(reason) => ErrorResponse::new(reason),
            AppError::NotFound(reason) => ErrorResponse::new(reason),
            AppError::Internal { message, details } => {
                tracing::error!(error = %details, "{}", message);
                ErrorResponse::new(message).with_details(details)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => {
                AppError::NotFound(format!("{entity_type} not found"))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

/// JSON extractor settings: undecodable bodies become a plain 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest("Invalid request body".to_string()).into()
    })
}

/// Query extractor settings: undecodable query strings become a plain 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| {
        tracing::debug!(error = %err, "Rejected query string");
        AppError::BadRequest("Invalid query parameters".to_string()).into()
    })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
