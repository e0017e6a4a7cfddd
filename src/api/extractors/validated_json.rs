//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Malformed bodies are rejected with the parser's message; validation
/// failures are rejected with the first field error.
///
/// ```rust,ignore
/// async fn create_booking(ValidatedJson(payload): ValidatedJson<BookingRequest>) {
///     // payload passed `BookingRequest::validate`
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate().map_err(|e| first_field_error(&e))?;

        Ok(ValidatedJson(value))
    }
}

/// Convert validation errors into the error of one offending field.
fn first_field_error(errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| errs.first().map(|e| (field.to_string(), e)))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    match fields.into_iter().next() {
        Some((field, error)) => AppError::InvalidField {
            message: error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field)),
            field,
        },
        None => AppError::validation("Invalid request"),
    }
}
