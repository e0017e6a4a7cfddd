//! Client testimonial entity.

use serde::Serialize;
use utoipa::ToSchema;

/// Client testimonial shown on the public site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub content: String,
    /// 1 to 5
    pub rating: i32,
    pub avatar: String,
}

/// Public testimonial projection
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialResponse {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
    pub avatar: String,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            name: t.name,
            role: t.role,
            content: t.content,
            rating: t.rating,
            avatar: t.avatar,
        }
    }
}

/// Values for inserting a testimonial (seeding only)
#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
    pub avatar: String,
}
