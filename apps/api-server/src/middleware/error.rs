//! Error handling - maps failures to plain-text HTTP responses.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::{DomainError, ErrorKind};
use std::fmt;

/// Body sent for any failure the client cannot act on.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Application-level error type returned by handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::Internal(msg) => f.write_str(msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) => {
                tracing::warn!("[NOT FOUND] {}", detail);
                detail.clone()
            }
            AppError::BadRequest(detail) => {
                tracing::warn!("[BAD REQUEST] {}", detail);
                detail.clone()
            }
            AppError::Conflict(detail) => {
                tracing::warn!("[CONFLICT] {}", detail);
                detail.clone()
            }
            AppError::Internal(detail) => {
                // Full detail stays in the logs
                tracing::error!("[SERVER ERROR] {}", detail);
                UNEXPECTED_ERROR_MESSAGE.to_string()
            }
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(body)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::NotFound => AppError::NotFound(message),
            ErrorKind::Conflict => AppError::Conflict(message),
            ErrorKind::Invalid => AppError::BadRequest(message),
            ErrorKind::Unexpected => AppError::Internal(message),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
