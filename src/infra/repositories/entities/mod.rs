//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod booking;
pub mod message;
pub mod offer;
pub mod service;
pub mod session;
pub mod stylist;
pub mod testimonial;
pub mod user;
