//! Admin form bodies and their conversion into typed inputs.
//!
//! Every field is optional at the wire level so that a missing or blank
//! value produces a named validation error instead of a rejected request.

use serde::Deserialize;

use crate::domain::{parse_duration_minutes, parse_price_cents, parse_specialties};
use crate::domain::{ServiceInput, StylistInput};
use crate::errors::{AppError, AppResult};

use super::views::{ServiceFormValues, StylistFormValues};

fn required(value: &Option<String>, field: &'static str) -> AppResult<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(AppError::MissingField(field))
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Major currency units, e.g. `45.00`
    pub price: Option<String>,
    /// Whole minutes
    pub duration: Option<String>,
    pub image: Option<String>,
    /// Checkbox: present means featured, whatever the value
    pub is_featured: Option<String>,
}

impl TryFrom<&ServiceForm> for ServiceInput {
    type Error = AppError;

    fn try_from(form: &ServiceForm) -> AppResult<Self> {
        let title = required(&form.title, "title")?;
        let description = required(&form.description, "description")?;
        let category = required(&form.category, "category")?;
        let price = required(&form.price, "price")?;
        let duration = required(&form.duration, "duration")?;
        let image = required(&form.image, "image")?;

        Ok(ServiceInput {
            title,
            description,
            category,
            price_cents: parse_price_cents(&price)?,
            duration_minutes: parse_duration_minutes(&duration)?,
            image,
            featured: form.is_featured.is_some(),
        })
    }
}

impl From<ServiceForm> for ServiceFormValues {
    fn from(form: ServiceForm) -> Self {
        Self {
            title: form.title.unwrap_or_default(),
            description: form.description.unwrap_or_default(),
            category: form.category.unwrap_or_default(),
            price: form.price.unwrap_or_default(),
            duration: form.duration.unwrap_or_default(),
            image: form.image.unwrap_or_default(),
            is_featured: form.is_featured.is_some(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylistForm {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    /// Comma separated; may be empty
    pub specialties: Option<String>,
}

impl TryFrom<&StylistForm> for StylistInput {
    type Error = AppError;

    fn try_from(form: &StylistForm) -> AppResult<Self> {
        Ok(StylistInput {
            name: required(&form.name, "name")?,
            role: required(&form.role, "role")?,
            bio: required(&form.bio, "bio")?,
            image: required(&form.image, "image")?,
            specialties: parse_specialties(form.specialties.as_deref().unwrap_or_default()),
        })
    }
}

impl From<StylistForm> for StylistFormValues {
    fn from(form: StylistForm) -> Self {
        Self {
            name: form.name.unwrap_or_default(),
            role: form.role.unwrap_or_default(),
            bio: form.bio.unwrap_or_default(),
            image: form.image.unwrap_or_default(),
            specialties: form.specialties.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_form() -> ServiceForm {
        ServiceForm {
            title: Some("Classic Haircut".into()),
            description: Some("Precision cut".into()),
            category: Some("Hair".into()),
            price: Some("45.50".into()),
            duration: Some("45".into()),
            image: Some("https://example.com/cut.jpg".into()),
            is_featured: None,
        }
    }

    #[test]
    fn test_service_form_converts() {
        let input = ServiceInput::try_from(&service_form()).unwrap();
        assert_eq!(input.price_cents, 4550);
        assert_eq!(input.duration_minutes, 45);
        assert!(!input.featured);
    }

    #[test]
    fn test_featured_is_key_presence() {
        let mut form = service_form();
        form.is_featured = Some(String::new());
        assert!(ServiceInput::try_from(&form).unwrap().featured);
    }

    #[test]
    fn test_blank_required_field_is_named() {
        let mut form = service_form();
        form.category = Some("   ".into());
        assert!(matches!(
            ServiceInput::try_from(&form),
            Err(AppError::MissingField("category"))
        ));
    }

    #[test]
    fn test_bad_price_rejected() {
        let mut form = service_form();
        form.price = Some("forty".into());
        assert!(matches!(
            ServiceInput::try_from(&form),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_stylist_specialties_optional() {
        let form = StylistForm {
            name: Some("Elena Ross".into()),
            role: Some("Senior Stylist".into()),
            bio: Some("Ten years behind the chair".into()),
            image: Some("elena.jpg".into()),
            specialties: None,
        };
        assert!(StylistInput::try_from(&form).unwrap().specialties.is_empty());

        let form = StylistForm {
            specialties: Some("Hair, Color".into()),
            ..form
        };
        assert_eq!(
            StylistInput::try_from(&form).unwrap().specialties,
            vec!["Hair", "Color"]
        );
    }
}
