use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgment returned by the intake endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct Receipt {
    /// Store-assigned id of the new record
    #[schema(example = 1)]
    pub id: i32,
    /// Fixed acknowledgment, not a computed state
    #[schema(example = "confirmed")]
    pub status: &'static str,
}

impl Receipt {
    pub fn new(id: i32, status: &'static str) -> Self {
        Self { id, status }
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
