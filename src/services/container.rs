//! Service wiring and concurrent store reads.
//!
//! [`Services`] builds the four application services over one shared
//! [`Persistence`] layer; [`parallel`] runs independent reads (dashboard
//! counts, booking link lookups) concurrently.

use std::future::Future;
use std::sync::Arc;

use super::{
    AdminPanel, AdminService, AuthService, Authenticator, Catalog, CatalogService, Intake,
    IntakeService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;
    fn catalog(&self) -> Arc<dyn CatalogService>;
    fn intake(&self) -> Arc<dyn IntakeService>;
    fn admin(&self) -> Arc<dyn AdminService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    catalog_service: Arc<dyn CatalogService>,
    intake_service: Arc<dyn IntakeService>,
    admin_service: Arc<dyn AdminService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        catalog_service: Arc<dyn CatalogService>,
        intake_service: Arc<dyn IntakeService>,
        admin_service: Arc<dyn AdminService>,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            intake_service,
            admin_service,
        }
    }

    /// Wire every service to one shared persistence layer.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(Authenticator::new(uow.clone(), config)),
            Arc::new(Catalog::new(uow.clone())),
            Arc::new(Intake::new(uow.clone())),
            Arc::new(AdminPanel::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn intake(&self) -> Arc<dyn IntakeService> {
        self.intake_service.clone()
    }

    fn admin(&self) -> Arc<dyn AdminService> {
        self.admin_service.clone()
    }
}

/// Parallel execution utilities for running independent operations concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// If either operation fails, the error is returned immediately.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute four independent async operations in parallel.
    pub async fn join4<F1, F2, F3, F4, T1, T2, T3, T4>(
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
    ) -> AppResult<(T1, T2, T3, T4)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
        F4: Future<Output = AppResult<T4>>,
    {
        try_join!(f1, f2, f3, f4)
    }
}
