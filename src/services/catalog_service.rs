//! Catalog service - read-only access to the public catalog.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Offer, Service, Stylist, Testimonial};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_services(&self) -> AppResult<Vec<Service>>;

    /// Fails with NotFound for unknown ids
    async fn get_service(&self, id: i32) -> AppResult<Service>;

    async fn list_stylists(&self) -> AppResult<Vec<Stylist>>;

    /// Fails with NotFound for unknown ids
    async fn get_stylist(&self, id: i32) -> AppResult<Stylist>;

    async fn list_testimonials(&self) -> AppResult<Vec<Testimonial>>;

    async fn list_offers(&self) -> AppResult<Vec<Offer>>;
}

pub struct Catalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Catalog<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for Catalog<U> {
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        self.uow.services().list().await
    }

    async fn get_service(&self, id: i32) -> AppResult<Service> {
        self.uow.services().find_by_id(id).await?.ok_or_not_found("Service")
    }

    async fn list_stylists(&self) -> AppResult<Vec<Stylist>> {
        self.uow.stylists().list().await
    }

    async fn get_stylist(&self, id: i32) -> AppResult<Stylist> {
        self.uow.stylists().find_by_id(id).await?.ok_or_not_found("Stylist")
    }

    async fn list_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        self.uow.testimonials().list().await
    }

    async fn list_offers(&self) -> AppResult<Vec<Offer>> {
        self.uow.offers().list().await
    }
}
