//! Salon service (treatment) entity, its public projection and admin input.

use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// A treatment offered by the salon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Minor currency units
    pub price: i64,
    /// Minutes
    pub duration: i32,
    pub image: String,
    pub is_featured: bool,
}

impl Service {
    /// Price rendered in major units, e.g. `45.00`.
    pub fn price_display(&self) -> String {
        format!("{}.{:02}", self.price / 100, self.price % 100)
    }
}

/// Public service projection
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Minor currency units
    pub price: i64,
    /// Minutes
    pub duration: i32,
    pub image: String,
    pub is_featured: bool,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            title: service.title,
            description: service.description,
            category: service.category,
            price: service.price,
            duration: service.duration,
            image: service.image,
            is_featured: service.is_featured,
        }
    }
}

/// Validated values for creating or replacing a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub duration_minutes: i32,
    pub image: String,
    pub featured: bool,
}

/// Convert a major-unit decimal string into minor units.
///
/// `"45"` is 4500, `"45.5"` is 4550 and `"45.999"` is 4599: digits past the
/// second decimal place are dropped, never rounded.
pub fn parse_price_cents(raw: &str) -> AppResult<i64> {
    let invalid = || AppError::validation("Price must be a non-negative number");
    let raw = raw.trim();

    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (raw, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };

    let cents = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(2)
        .fold(0i64, |acc, c| acc * 10 + i64::from(c as u8 - b'0'));

    whole
        .checked_mul(100)
        .and_then(|v| v.checked_add(cents))
        .ok_or_else(invalid)
}

/// Parse a duration in whole minutes.
pub fn parse_duration_minutes(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|minutes| *minutes >= 0)
        .ok_or_else(|| AppError::validation("Duration must be a non-negative whole number of minutes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_price() {
        assert_eq!(parse_price_cents("45").unwrap(), 4500);
        assert_eq!(parse_price_cents("0").unwrap(), 0);
    }

    #[test]
    fn test_fractional_price_is_exact() {
        assert_eq!(parse_price_cents("45.5").unwrap(), 4550);
        assert_eq!(parse_price_cents("19.99").unwrap(), 1999);
        assert_eq!(parse_price_cents("0.29").unwrap(), 29);
        assert_eq!(parse_price_cents(".5").unwrap(), 50);
        assert_eq!(parse_price_cents("12.").unwrap(), 1200);
    }

    #[test]
    fn test_extra_digits_truncated() {
        assert_eq!(parse_price_cents("45.999").unwrap(), 4599);
        assert_eq!(parse_price_cents(" 10.001 ").unwrap(), 1000);
    }

    #[test]
    fn test_invalid_prices_rejected() {
        for raw in ["", ".", "-5", "abc", "1,50", "1.2.3", "1e3"] {
            assert!(parse_price_cents(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_duration_parsing() {
        assert_eq!(parse_duration_minutes("45").unwrap(), 45);
        assert!(parse_duration_minutes("-1").is_err());
        assert!(parse_duration_minutes("4.5").is_err());
    }

    #[test]
    fn test_price_display() {
        let service = Service {
            id: 1,
            title: "Classic Haircut".into(),
            description: String::new(),
            category: "Hair".into(),
            price: 4505,
            duration: 45,
            image: String::new(),
            is_featured: false,
        };
        assert_eq!(service.price_display(), "45.05");
    }
}
