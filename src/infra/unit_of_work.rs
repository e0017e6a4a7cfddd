//! Unit of Work - single access point to every repository.
//!
//! All repositories share one pooled connection. Every write in this
//! application touches a single row, so no cross-repository transaction
//! is exposed here.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    BookingRepository, BookingStore, MessageRepository, MessageStore, OfferRepository,
    OfferStore, ServiceRepository, ServiceStore, SessionRepository, SessionStore,
    StylistRepository, StylistStore, TestimonialRepository, TestimonialStore, UserRepository,
    UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Unit of Work trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;
    fn sessions(&self) -> Arc<dyn SessionRepository>;
    fn services(&self) -> Arc<dyn ServiceRepository>;
    fn stylists(&self) -> Arc<dyn StylistRepository>;
    fn testimonials(&self) -> Arc<dyn TestimonialRepository>;
    fn offers(&self) -> Arc<dyn OfferRepository>;
    fn bookings(&self) -> Arc<dyn BookingRepository>;
    fn messages(&self) -> Arc<dyn MessageRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    users: Arc<UserStore>,
    sessions: Arc<SessionStore>,
    services: Arc<ServiceStore>,
    stylists: Arc<StylistStore>,
    testimonials: Arc<TestimonialStore>,
    offers: Arc<OfferStore>,
    bookings: Arc<BookingStore>,
    messages: Arc<MessageStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            sessions: Arc::new(SessionStore::new(db.clone())),
            services: Arc::new(ServiceStore::new(db.clone())),
            stylists: Arc::new(StylistStore::new(db.clone())),
            testimonials: Arc::new(TestimonialStore::new(db.clone())),
            offers: Arc::new(OfferStore::new(db.clone())),
            bookings: Arc::new(BookingStore::new(db.clone())),
            messages: Arc::new(MessageStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionRepository> {
        self.sessions.clone()
    }

    fn services(&self) -> Arc<dyn ServiceRepository> {
        self.services.clone()
    }

    fn stylists(&self) -> Arc<dyn StylistRepository> {
        self.stylists.clone()
    }

    fn testimonials(&self) -> Arc<dyn TestimonialRepository> {
        self.testimonials.clone()
    }

    fn offers(&self) -> Arc<dyn OfferRepository> {
        self.offers.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.bookings.clone()
    }

    fn messages(&self) -> Arc<dyn MessageRepository> {
        self.messages.clone()
    }
}
