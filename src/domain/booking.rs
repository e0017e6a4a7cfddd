//! Booking requests and read-time resolution of their references.

use chrono::{DateTime, Utc};

/// Booking request as stored
///
/// `service_id` and `stylist_id` are plain ids: they are not checked on
/// insert and may stop resolving once the target is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: i32,
    pub stylist_id: Option<i32>,
    pub date: String,
    pub time: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated booking intake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: i32,
    pub stylist_id: Option<i32>,
    pub date: String,
    pub time: String,
    pub message: Option<String>,
}

/// Reference to another record, resolved at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Linked<T> {
    Resolved(T),
    /// Target no longer exists (or never did)
    Unresolved { id: i32 },
}

impl<T> Linked<T> {
    /// Resolve `id` against an optional lookup result.
    pub fn from_lookup(id: i32, found: Option<T>) -> Self {
        match found {
            Some(target) => Linked::Resolved(target),
            None => Linked::Unresolved { id },
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Linked::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Linked::Resolved(target) => Some(target),
            Linked::Unresolved { .. } => None,
        }
    }
}

/// Booking with its service and stylist looked up.
#[derive(Debug, Clone)]
pub struct BookingRecord {
    pub booking: Booking,
    pub service: Linked<super::Service>,
    /// `None` when no stylist was requested
    pub stylist: Option<Linked<super::Stylist>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lookup() {
        let hit: Linked<&str> = Linked::from_lookup(1, Some("Classic Haircut"));
        assert!(hit.is_resolved());
        assert_eq!(hit.resolved(), Some(&"Classic Haircut"));

        let miss: Linked<&str> = Linked::from_lookup(7, None);
        assert_eq!(miss, Linked::Unresolved { id: 7 });
        assert!(miss.resolved().is_none());
    }
}
