//! Intake service - unauthenticated booking requests and contact messages.
//!
//! Inputs arrive already validated. Referenced service and stylist ids
//! are stored as given, without checking that they resolve.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Booking, Message, NewBooking, NewMessage};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait IntakeService: Send + Sync {
    async fn create_booking(&self, booking: NewBooking) -> AppResult<Booking>;

    async fn create_message(&self, message: NewMessage) -> AppResult<Message>;
}

pub struct Intake<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Intake<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> IntakeService for Intake<U> {
    async fn create_booking(&self, booking: NewBooking) -> AppResult<Booking> {
        let booking = self.uow.bookings().create(booking).await?;
        tracing::info!(
            booking_id = booking.id,
            service_id = booking.service_id,
            "Booking request received"
        );
        Ok(booking)
    }

    async fn create_message(&self, message: NewMessage) -> AppResult<Message> {
        let message = self.uow.messages().create(message).await?;
        tracing::info!(message_id = message.id, "Contact message received");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{BookingRepository, MockBookingRepository, MockUnitOfWork};
    use chrono::Utc;

    fn new_booking(service_id: i32) -> NewBooking {
        NewBooking {
            name: "Ana".into(),
            email: "a@x.com".into(),
            phone: "555".into(),
            service_id,
            stylist_id: None,
            date: "2025-06-01".into(),
            time: "10:00".into(),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_unresolved_service_id_is_stored_as_given() {
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_create()
            .withf(|b| b.service_id == 999)
            .times(1)
            .returning(|b| {
                Ok(Booking {
                    id: 1,
                    name: b.name,
                    email: b.email,
                    phone: b.phone,
                    service_id: b.service_id,
                    stylist_id: b.stylist_id,
                    date: b.date,
                    time: b.time,
                    message: b.message,
                    created_at: Utc::now(),
                })
            });
        let bookings: Arc<dyn BookingRepository> = Arc::new(bookings);

        let mut uow = MockUnitOfWork::new();
        uow.expect_bookings().return_const(bookings);

        let intake = Intake::new(Arc::new(uow));
        let booking = intake.create_booking(new_booking(999)).await.unwrap();
        assert_eq!(booking.service_id, 999);
    }
}
