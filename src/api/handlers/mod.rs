//! HTTP request handlers.

pub mod admin_auth_handler;
pub mod admin_handler;
pub mod catalog_handler;
pub mod intake_handler;

pub use admin_auth_handler::login_routes;
pub use admin_handler::admin_routes;
pub use catalog_handler::catalog_routes;
pub use intake_handler::intake_routes;
