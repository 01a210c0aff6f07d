//! Integer id path parameter extractor.

use crate::errors::{AppError, ErrorCode};
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
};

/// Extractor for integer id path parameters.
///
/// Rejects non-numeric ids with `400 INVALID_ID` instead of axum's plain-text
/// path rejection.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product ID: {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse::<i64>().map(IdPath).map_err(|_| {
            AppError::domain(
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidId,
                format!("Invalid id: {}", raw),
            )
        })
    }
}
