//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - SeaORM entities and repositories
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    BookingRepository, MessageRepository, OfferRepository, ServiceRepository, SessionRepository,
    StylistRepository, TestimonialRepository, UserRepository,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockBookingRepository, MockMessageRepository, MockOfferRepository, MockServiceRepository,
    MockSessionRepository, MockStylistRepository, MockTestimonialRepository, MockUserRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use unit_of_work::MockUnitOfWork;
