//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Sessions
// =============================================================================

/// Default session lifetime in hours
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 12;

/// Longest accepted session lifetime in hours (one year)
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// Minimum session signing secret length (security requirement)
pub const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Name of the cookie carrying the signed session token
pub const SESSION_COOKIE_NAME: &str = "salon_session";

/// Development-only signing secret, rejected in release builds
pub const DEV_SESSION_SECRET: &str = "dev-secret-key-salon-chic-minimum-32";

/// Default admin username created by `seed`
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Default admin password created by `seed` (warned about when used)
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

// =============================================================================
// Intake acknowledgements
// =============================================================================

/// Status echoed back after a booking request is stored
pub const BOOKING_STATUS_CONFIRMED: &str = "confirmed";

/// Status echoed back after a contact message is stored
pub const MESSAGE_STATUS_SENT: &str = "sent";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://salon.db?mode=rwc";

// =============================================================================
// Admin routes
// =============================================================================

/// Login entry point unauthenticated admin requests are sent to
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Landing page after a successful login
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement for new admin accounts
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum testimonial rating
pub const MIN_RATING: i32 = 1;

/// Maximum testimonial rating
pub const MAX_RATING: i32 = 5;
