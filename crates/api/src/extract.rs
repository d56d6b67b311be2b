//! Request extractors shared by the handlers.
//!
//! - [`RecordId`] -- lenient `{id}` path segment.
//! - [`ValidatedJson`] -- JSON body that has passed `validator` rules.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use inkwell_core::error::CoreError;
use inkwell_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// The `{id}` path segment of a resource URL.
///
/// Holds `None` when the segment is not a decimal integer. Such an id never
/// matches a stored record, so reads answer 404 and deletes are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub Option<DbId>);

impl RecordId {
    /// The parsed id, or `NotFound` for `entity` if the segment was not numeric.
    pub fn require(self, entity: &'static str) -> Result<DbId, AppError> {
        self.0.ok_or(AppError::NotFound(entity))
    }
}

/// Parse a path segment as a decimal record id.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.parse().ok()
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(RecordId(parse_id(&raw)))
    }
}

/// A JSON request body that deserialized cleanly and passed validation.
///
/// Every failure, whether malformed JSON, a wrong content type, a
/// mistyped field or a rule violation, is rejected as
/// [`CoreError::Validation`] before the handler runs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
        value.validate().map_err(CoreError::from)?;
        Ok(ValidatedJson(value))
    }
}
