//! Shared response types used across the API layer.

mod response;

pub use response::{Created, Receipt};
