//! Extractors that turn malformed input into structured 400 responses.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::Json;
use http::request::Parts;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::Problem;
use crate::domain::error::FieldError;

/// Request-shape rules checked before a service is called.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// JSON body that deserialized and passed [`Validate`].
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                Problem::validation(vec![FieldError::new("body", rejection.body_text())])
            })?;
        value.validate().map_err(Problem::validation)?;
        Ok(Self(value))
    }
}

/// Query string that deserialized and passed [`Validate`].
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                Problem::validation(vec![FieldError::new("query", rejection.body_text())])
            })?;
        value.validate().map_err(Problem::validation)?;
        Ok(Self(value))
    }
}

/// Single `{id}` path segment that must be a UUID.
pub struct IdPath(pub Uuid);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|_: PathRejection| {
                Problem::validation(vec![FieldError::new(
                    "id",
                    "Validation failed (uuid is expected)",
                )])
            })?;
        Ok(Self(id))
    }
}
