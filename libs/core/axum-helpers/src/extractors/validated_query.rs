//! Query string extractor with validation.

use crate::errors::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::Query;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor that runs `Validate` after deserializing.
///
/// Backed by `axum_extra::extract::Query`, so repeated keys
/// (`?ids=1&ids=2`) deserialize into sequences.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        data.validate()?;
        Ok(ValidatedQuery(data))
    }
}
