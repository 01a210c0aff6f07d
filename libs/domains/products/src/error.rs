use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Path id {path} does not match payload id {body}")]
    IdMismatch { path: i64, body: i64 },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Category {0} does not exist")]
    UnknownCategory(i64),

    #[error("Unsupported API version: {0}")]
    UnsupportedApiVersion(String),

    #[error("Product {0} was modified concurrently")]
    ConcurrencyConflict(i64),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::IdMismatch { path, body } => AppError::domain(
                StatusCode::BAD_REQUEST,
                ErrorCode::IdMismatch,
                format!("Path id {} does not match payload id {}", path, body),
            ),
            ProductError::Validation(msg) => {
                AppError::domain(StatusCode::BAD_REQUEST, ErrorCode::ValidationError, msg)
            }
            ProductError::UnknownCategory(id) => AppError::domain(
                StatusCode::BAD_REQUEST,
                ErrorCode::UnknownReference,
                format!("Category {} does not exist", id),
            ),
            ProductError::UnsupportedApiVersion(requested) => AppError::domain(
                StatusCode::BAD_REQUEST,
                ErrorCode::UnsupportedApiVersion,
                format!("Unsupported API version '{}'", requested),
            ),
            // A stale update on a record that still exists is not recovered.
            ProductError::ConcurrencyConflict(id) => AppError::domain(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::ConcurrencyConflict,
                format!("Product {} was modified by another request", id),
            ),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
