//! API layer - HTTP handlers and middleware
//!
//! - Public JSON catalog and intake handlers
//! - Session-gated admin panel rendered with askama
//! - Custom extractors and route definitions

pub mod extractors;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
