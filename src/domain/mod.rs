//! Domain layer - Core business entities and logic
//!
//! This module contains the salon's records (catalog, intake, admin users)
//! and the typed inputs that create or change them, independent of
//! storage and HTTP concerns.

pub mod booking;
pub mod message;
pub mod offer;
pub mod password;
pub mod service;
pub mod session;
pub mod stylist;
pub mod testimonial;
pub mod user;

pub use booking::{Booking, BookingRecord, Linked, NewBooking};
pub use message::{Message, NewMessage};
pub use offer::{NewOffer, Offer, OfferResponse};
pub use password::Password;
pub use service::{
    parse_duration_minutes, parse_price_cents, Service, ServiceInput, ServiceResponse,
};
pub use session::{AdminSession, Identity, SessionRecord, SessionToken};
pub use stylist::{
    join_specialties, parse_specialties, split_specialties, Stylist, StylistInput,
    StylistResponse,
};
pub use testimonial::{NewTestimonial, Testimonial, TestimonialResponse};
pub use user::User;
