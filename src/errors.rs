//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid username or password")]
    InvalidCredentials,

    // Resource errors
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    InvalidField { field: String, message: String },

    // External service errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Session token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::MissingField(_)
            | AppError::Validation(_)
            | AppError::InvalidField { .. } => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Jwt(_) => "AUTH_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials | AppError::Jwt(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::MissingField(_)
            | AppError::Validation(_)
            | AppError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Name of the offending input field, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::MissingField(field) => Some(*field),
            AppError::InvalidField { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Get user-facing message.
    ///
    /// Store failures carry the underlying message; internal and token
    /// errors are logged and replaced with a generic text.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(e) => {
                tracing::error!(error = ?e, "Database error");
                e.to_string()
            }
            AppError::Jwt(e) => {
                tracing::debug!(error = ?e, "Session token rejected");
                "Invalid or expired session".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: self.code(),
            message: self.user_message(),
            field: self.field(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    /// Fail with `NotFound` naming `entity`
    fn ok_or_not_found(self, entity: &'static str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &'static str) -> AppResult<T> {
        self.ok_or(AppError::NotFound(entity))
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field() {
        let err = AppError::MissingField("date");
        assert_eq!(err.user_message(), "Missing field: date");
        assert_eq!(err.field(), Some("date"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_field_keeps_message_and_field() {
        let err = AppError::InvalidField {
            field: "email".into(),
            message: "Invalid email format".into(),
        };
        assert_eq!(err.user_message(), "Invalid email format");
        assert_eq!(err.field(), Some("email"));
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound("Service").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::conflict("User").status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_failure_keeps_underlying_message() {
        let err = AppError::from(sea_orm::DbErr::Custom("disk I/O error".into()));
        assert!(err.user_message().contains("disk I/O error"));
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = AppError::internal("secret detail");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<i32> = None;
        let err = missing.ok_or_not_found("Stylist").unwrap_err();
        assert!(matches!(err, AppError::NotFound("Stylist")));
        assert_eq!(err.user_message(), "Stylist not found");
        assert_eq!(Some(3).ok_or_not_found("Stylist").unwrap(), 3);
    }
}
