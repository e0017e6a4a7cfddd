//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SESSION_TTL_HOURS,
    DEV_SESSION_SECRET, MAX_SESSION_TTL_HOURS, MIN_SESSION_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    session_secret: String,
    pub session_ttl_hours: i64,
    pub server_host: String,
    pub server_port: u16,
    /// Public website; `/` and logout redirect here when set
    pub client_url: Option<String>,
    pub cookie_secure: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("session_secret", &"[REDACTED]")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("client_url", &self.client_url)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl Config {
    /// Build a configuration with defaults for everything but the
    /// database URL and the session signing secret.
    pub fn new(database_url: impl Into<String>, session_secret: impl Into<String>) -> AppResult<Self> {
        let session_secret = session_secret.into();

        if session_secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "SESSION_SECRET must be at least {} characters long",
                MIN_SESSION_SECRET_LENGTH
            )));
        }

        Ok(Self {
            database_url: database_url.into(),
            session_secret,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            client_url: None,
            cookie_secure: false,
        })
    }

    /// Load configuration from environment variables (and `.env`).
    ///
    /// # Errors
    /// Fails if SESSION_SECRET is missing in a release build or too short.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let session_secret = match env::var("SESSION_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, using insecure default for development");
                DEV_SESSION_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "SESSION_SECRET environment variable must be set in production",
                ))
            }
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let mut config = Self::new(database_url, session_secret)?;

        config.session_ttl_hours = session_ttl_hours(env::var("SESSION_TTL_HOURS").ok().as_deref());
        config.server_host =
            env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string());
        config.server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);
        config.client_url = env::var("CLIENT_URL").ok().filter(|url| !url.trim().is_empty());
        config.cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(config)
    }

    /// Get session secret bytes for token signing/verification.
    pub fn session_secret_bytes(&self) -> &[u8] {
        self.session_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Positive hour count, capped at [`MAX_SESSION_TTL_HOURS`].
fn session_ttl_hours(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|hours| *hours > 0)
        .map(|hours| hours.min(MAX_SESSION_TTL_HOURS))
        .unwrap_or(DEFAULT_SESSION_TTL_HOURS)
}
