//! OpenAPI document for the public JSON API.

use utoipa::OpenApi;

use crate::api::handlers::{catalog_handler, intake_handler};
use crate::domain::{OfferResponse, ServiceResponse, StylistResponse, TestimonialResponse};
use crate::types::Receipt;

/// Public catalog and intake endpoints. The admin panel is HTML and not listed.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salon Backend",
        version = "0.1.0",
        description = "Public catalog and intake API for the salon website"
    ),
    paths(
        catalog_handler::list_services,
        catalog_handler::get_service,
        catalog_handler::list_stylists,
        catalog_handler::get_stylist,
        catalog_handler::list_testimonials,
        catalog_handler::list_offers,
        intake_handler::create_booking,
        intake_handler::create_message,
    ),
    components(
        schemas(
            ServiceResponse,
            StylistResponse,
            TestimonialResponse,
            OfferResponse,
            intake_handler::BookingRequest,
            intake_handler::MessageRequest,
            Receipt,
        )
    ),
    tags(
        (name = "Catalog", description = "Read-only salon catalog"),
        (name = "Intake", description = "Booking requests and contact messages")
    )
)]
pub struct ApiDoc;
