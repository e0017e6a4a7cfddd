//! Promotional offer entity.

use serde::Serialize;
use utoipa::ToSchema;

/// Promotional offer. `discount` and `expiry` are free-form descriptors
/// ("15% OFF", "August 31, 2025"), not computed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub code: String,
    pub discount: String,
    pub expiry: String,
}

/// Public offer projection
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub code: String,
    pub discount: String,
    pub expiry: String,
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id,
            title: offer.title,
            description: offer.description,
            code: offer.code,
            discount: offer.discount,
            expiry: offer.expiry,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewOffer {
    pub title: String,
    pub description: String,
    pub code: String,
    pub discount: String,
    pub expiry: String,
}
