//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) and
//! reach the store only through the Unit of Work.

mod admin_service;
mod auth_service;
mod catalog_service;
pub mod container;
mod intake_service;

// Service Container
pub use container::{parallel, ServiceContainer, Services};

// Service traits and implementations
pub use admin_service::{AdminPanel, AdminService, DashboardStats};
pub use auth_service::{AuthService, Authenticator, Claims};
pub use catalog_service::{Catalog, CatalogService};
pub use intake_service::{Intake, IntakeService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
