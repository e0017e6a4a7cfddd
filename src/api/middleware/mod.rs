//! API middleware.

mod session;

pub use session::{removal_cookie, require_admin_session, session_cookie};
