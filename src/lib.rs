//! Salon backend - public catalog API and session-gated admin panel.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Catalog, intake and session entities
//! - **services**: Authentication, catalog, intake and admin use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: JSON handlers, admin screens, middleware and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the admin account and demo catalog
//! cargo run -- seed
//!
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use errors::{AppError, AppResult};
