//! Public catalog handlers. No authentication, no pagination.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::IdPath;
use crate::api::AppState;
use crate::domain::{OfferResponse, ServiceResponse, StylistResponse, TestimonialResponse};
use crate::errors::AppResult;

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services))
        .route("/services/:id", get(get_service))
        .route("/stylists", get(list_stylists))
        .route("/stylists/:id", get(get_stylist))
        .route("/testimonials", get(list_testimonials))
        .route("/offers", get(list_offers))
}

/// List all services
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Catalog",
    responses((status = 200, description = "All services", body = Vec<ServiceResponse>))
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<ServiceResponse>>> {
    let services = state.catalog_service.list_services().await?;
    Ok(Json(services.into_iter().map(ServiceResponse::from).collect()))
}

/// Get one service
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "Catalog",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service found", body = ServiceResponse),
        (status = 404, description = "No service with that id")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ServiceResponse>> {
    let service = state.catalog_service.get_service(id).await?;
    Ok(Json(ServiceResponse::from(service)))
}

/// List all stylists
#[utoipa::path(
    get,
    path = "/api/stylists",
    tag = "Catalog",
    responses((status = 200, description = "All stylists", body = Vec<StylistResponse>))
)]
pub async fn list_stylists(State(state): State<AppState>) -> AppResult<Json<Vec<StylistResponse>>> {
    let stylists = state.catalog_service.list_stylists().await?;
    Ok(Json(stylists.into_iter().map(StylistResponse::from).collect()))
}

/// Get one stylist
#[utoipa::path(
    get,
    path = "/api/stylists/{id}",
    tag = "Catalog",
    params(("id" = i32, Path, description = "Stylist id")),
    responses(
        (status = 200, description = "Stylist found", body = StylistResponse),
        (status = 404, description = "No stylist with that id")
    )
)]
pub async fn get_stylist(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<StylistResponse>> {
    let stylist = state.catalog_service.get_stylist(id).await?;
    Ok(Json(StylistResponse::from(stylist)))
}

/// List all testimonials
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "Catalog",
    responses((status = 200, description = "All testimonials", body = Vec<TestimonialResponse>))
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TestimonialResponse>>> {
    let testimonials = state.catalog_service.list_testimonials().await?;
    Ok(Json(
        testimonials
            .into_iter()
            .map(TestimonialResponse::from)
            .collect(),
    ))
}

/// List all offers
#[utoipa::path(
    get,
    path = "/api/offers",
    tag = "Catalog",
    responses((status = 200, description = "All offers", body = Vec<OfferResponse>))
)]
pub async fn list_offers(State(state): State<AppState>) -> AppResult<Json<Vec<OfferResponse>>> {
    let offers = state.catalog_service.list_offers().await?;
    Ok(Json(offers.into_iter().map(OfferResponse::from).collect()))
}
