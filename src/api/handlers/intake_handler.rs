//! Intake handlers - unauthenticated booking requests and contact messages.

use std::borrow::Cow;

use axum::{extract::State, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{BOOKING_STATUS_CONFIRMED, MESSAGE_STATUS_SENT};
use crate::domain::{NewBooking, NewMessage};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, Receipt};

/// Booking request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[schema(example = "Ana")]
    pub name: Option<String>,
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    #[schema(example = "555")]
    pub phone: Option<String>,
    #[schema(example = 1)]
    pub service_id: Option<i32>,
    pub stylist_id: Option<i32>,
    #[schema(example = "2025-06-01")]
    pub date: Option<String>,
    #[schema(example = "10:00")]
    pub time: Option<String>,
    pub message: Option<String>,
}

/// Contact message body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MessageRequest {
    #[schema(example = "Ana")]
    pub name: Option<String>,
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    #[schema(example = "Opening hours")]
    pub subject: Option<String>,
    #[schema(example = "Are you open on Sundays?")]
    pub message: Option<String>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, field: &'static str) -> AppResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(AppError::MissingField(field))
}

/// Reject the first absent field of `fields` (declared order), then a
/// malformed email.
fn check_fields(fields: &[(&'static str, bool)], email: Option<&String>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some((field, _)) = fields.iter().find(|(_, present)| !present) {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from(format!("Missing field: {}", field)));
        errors.add(*field, error);
        return Err(errors);
    }

    if let Some(email) = email {
        if !email.trim().validate_email() {
            let mut error = ValidationError::new("email");
            error.message = Some(Cow::from("Invalid email format"));
            errors.add("email", error);
            return Err(errors);
        }
    }

    Ok(())
}

impl Validate for BookingRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_fields(
            &[
                ("name", present(&self.name)),
                ("email", present(&self.email)),
                ("phone", present(&self.phone)),
                ("serviceId", self.service_id.is_some()),
                ("date", present(&self.date)),
                ("time", present(&self.time)),
            ],
            self.email.as_ref(),
        )
    }
}

impl Validate for MessageRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_fields(
            &[
                ("name", present(&self.name)),
                ("email", present(&self.email)),
                ("subject", present(&self.subject)),
                ("message", present(&self.message)),
            ],
            self.email.as_ref(),
        )
    }
}

impl TryFrom<BookingRequest> for NewBooking {
    type Error = AppError;

    fn try_from(req: BookingRequest) -> AppResult<Self> {
        Ok(NewBooking {
            name: required(req.name, "name")?.trim().to_string(),
            email: required(req.email, "email")?.trim().to_string(),
            phone: required(req.phone, "phone")?.trim().to_string(),
            service_id: req.service_id.ok_or(AppError::MissingField("serviceId"))?,
            stylist_id: req.stylist_id,
            date: required(req.date, "date")?.trim().to_string(),
            time: required(req.time, "time")?.trim().to_string(),
            message: req.message.filter(|m| !m.trim().is_empty()),
        })
    }
}

impl TryFrom<MessageRequest> for NewMessage {
    type Error = AppError;

    fn try_from(req: MessageRequest) -> AppResult<Self> {
        Ok(NewMessage {
            name: required(req.name, "name")?.trim().to_string(),
            email: required(req.email, "email")?.trim().to_string(),
            subject: required(req.subject, "subject")?.trim().to_string(),
            message: required(req.message, "message")?,
        })
    }
}

/// Create intake routes
pub fn intake_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/messages", post(create_message))
}

/// Submit a booking request
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Intake",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking recorded", body = Receipt),
        (status = 400, description = "Missing or malformed field")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookingRequest>,
) -> AppResult<Created<Receipt>> {
    let booking = state
        .intake_service
        .create_booking(NewBooking::try_from(payload)?)
        .await?;

    Ok(Created(Receipt::new(booking.id, BOOKING_STATUS_CONFIRMED)))
}

/// Send a contact message
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "Intake",
    request_body = MessageRequest,
    responses(
        (status = 201, description = "Message recorded", body = Receipt),
        (status = 400, description = "Missing or malformed field")
    )
)]
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<MessageRequest>,
) -> AppResult<Created<Receipt>> {
    let message = state
        .intake_service
        .create_message(NewMessage::try_from(payload)?)
        .await?;

    Ok(Created(Receipt::new(message.id, MESSAGE_STATUS_SENT)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_booking() -> BookingRequest {
        BookingRequest {
            name: Some("Ana".into()),
            email: Some("a@x.com".into()),
            phone: Some("555".into()),
            service_id: Some(1),
            stylist_id: None,
            date: Some("2025-06-01".into()),
            time: Some("10:00".into()),
            message: None,
        }
    }

    fn missing_field(req: &impl Validate) -> Option<String> {
        req.validate().err().map(|errors| {
            errors
                .field_errors()
                .into_iter()
                .map(|(field, _)| field.to_string())
                .next()
                .unwrap_or_default()
        })
    }

    #[test]
    fn test_complete_booking_validates() {
        assert!(full_booking().validate().is_ok());
        let booking = NewBooking::try_from(full_booking()).unwrap();
        assert_eq!(booking.service_id, 1);
        assert_eq!(booking.message, None);
    }

    #[test]
    fn test_each_missing_booking_field_is_named() {
        let cases: [(&str, fn(&mut BookingRequest)); 6] = [
            ("name", |r| r.name = None),
            ("email", |r| r.email = None),
            ("phone", |r| r.phone = Some("  ".into())),
            ("serviceId", |r| r.service_id = None),
            ("date", |r| r.date = None),
            ("time", |r| r.time = Some(String::new())),
        ];

        for (field, strip) in cases {
            let mut req = full_booking();
            strip(&mut req);
            assert_eq!(missing_field(&req).as_deref(), Some(field));
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let mut req = full_booking();
        req.date = None;
        req.phone = None;
        assert_eq!(missing_field(&req).as_deref(), Some("phone"));
    }

    #[test]
    fn test_missing_field_reported_before_bad_email() {
        let mut req = full_booking();
        req.email = Some("not-an-email".into());
        req.time = None;
        assert_eq!(missing_field(&req).as_deref(), Some("time"));

        req.time = Some("10:00".into());
        assert_eq!(missing_field(&req).as_deref(), Some("email"));
    }

    #[test]
    fn test_message_required_fields() {
        let req = MessageRequest {
            name: Some("Ana".into()),
            email: Some("a@x.com".into()),
            subject: None,
            message: Some("Hello".into()),
        };
        assert_eq!(missing_field(&req).as_deref(), Some("subject"));
        assert!(matches!(
            NewMessage::try_from(req),
            Err(AppError::MissingField("subject"))
        ));
    }
}
