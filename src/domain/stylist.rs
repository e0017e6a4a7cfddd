//! Stylist entity and specialty list handling.

use serde::Serialize;
use utoipa::ToSchema;

/// Salon team member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylist {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    /// Ordered, possibly empty
    pub specialties: Vec<String>,
}

impl Stylist {
    /// Specialties as the comma separated text used by the admin form.
    pub fn specialties_text(&self) -> String {
        self.specialties.join(", ")
    }
}

/// Public stylist projection
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StylistResponse {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    pub specialties: Vec<String>,
}

impl From<Stylist> for StylistResponse {
    fn from(stylist: Stylist) -> Self {
        Self {
            id: stylist.id,
            name: stylist.name,
            role: stylist.role,
            bio: stylist.bio,
            image: stylist.image,
            specialties: stylist.specialties,
        }
    }
}

/// Validated values for creating or replacing a stylist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylistInput {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    pub specialties: Vec<String>,
}

/// Split a stored specialties value into its ordered list.
///
/// Empty or absent values yield an empty list.
pub fn split_specialties(stored: Option<&str>) -> Vec<String> {
    match stored {
        Some(raw) if !raw.is_empty() => raw.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Join specialties into the stored comma separated form.
pub fn join_specialties(specialties: &[String]) -> String {
    specialties.join(",")
}

/// Parse user-entered specialties: comma separated, trimmed, blanks dropped.
pub fn parse_specialties(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stored_value_is_empty_list() {
        assert!(split_specialties(Some("")).is_empty());
        assert!(split_specialties(None).is_empty());
    }

    #[test]
    fn test_split_keeps_order() {
        assert_eq!(split_specialties(Some("Hair,Color")), vec!["Hair", "Color"]);
    }

    #[test]
    fn test_parse_trims_and_drops_blanks() {
        assert_eq!(
            parse_specialties(" Color , Highlights,, "),
            vec!["Color", "Highlights"]
        );
        assert!(parse_specialties("  ").is_empty());
    }

    #[test]
    fn test_join_then_split_preserves_list() {
        let list = parse_specialties("Hair, Color");
        assert_eq!(split_specialties(Some(&join_specialties(&list))), list);
    }
}
