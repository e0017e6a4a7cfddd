//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Each call runs on the pooled connection and returns it to the pool
//! when the future completes, on success and on error alike.

mod booking_repository;
pub(crate) mod entities;
mod message_repository;
mod offer_repository;
mod service_repository;
mod session_repository;
mod stylist_repository;
mod testimonial_repository;
mod user_repository;

pub use booking_repository::{BookingRepository, BookingStore};
pub use message_repository::{MessageRepository, MessageStore};
pub use offer_repository::{OfferRepository, OfferStore};
pub use service_repository::{ServiceRepository, ServiceStore};
pub use session_repository::{SessionRepository, SessionStore};
pub use stylist_repository::{StylistRepository, StylistStore};
pub use testimonial_repository::{TestimonialRepository, TestimonialStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use booking_repository::MockBookingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use message_repository::MockMessageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use offer_repository::MockOfferRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use service_repository::MockServiceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use session_repository::MockSessionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use stylist_repository::MockStylistRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use testimonial_repository::MockTestimonialRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
