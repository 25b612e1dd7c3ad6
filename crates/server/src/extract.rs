//! Request extractors that turn axum's rejections into the service's 422 body.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    Json,
};
use models::validation::{FieldError, FieldErrorKind, ValidationError};
use serde_json::Value;

use crate::errors::JsonApiError;

/// Any syntactically valid JSON body; structural checks happen in `models`.
pub struct JsonBody(pub Value);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(v)) => Ok(Self(v)),
            Err(rejection) => Err(ValidationError::single(FieldError::new(
                "body",
                FieldErrorKind::Invalid,
                rejection.body_text(),
            ))
            .into()),
        }
    }
}

/// The `{id}` path segment of `/company/{id}`.
///
/// Integers outside the `i32` key range cannot name a stored row and are
/// answered with 404 rather than a validation error.
#[derive(Debug, Clone, Copy)]
pub struct CompanyId(pub i32);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CompanyId {
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => i32::try_from(id).map(Self).map_err(|_| {
                JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("company {id} not found")))
            }),
            Err(_) => Err(ValidationError::single(FieldError::new(
                "id",
                FieldErrorKind::TypeError,
                "must be an integer",
            ))
            .into()),
        }
    }
}
