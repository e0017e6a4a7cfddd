//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `seed` - Admin account and demo catalog
//! - `admin` - Admin account management

pub mod args;

pub use args::{Cli, Commands};
