//! Authenticated admin identity and the session that carries it.
//!
//! An [`Identity`] can only be produced by the authentication service, so
//! holding one is proof that credentials or a live session were checked.
//! Admin operations take it as an explicit argument.

use chrono::{DateTime, Utc};

/// Authenticated administrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: i32,
    username: String,
}

impl Identity {
    pub(crate) fn new(user_id: i32, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Live session resolved from a presented token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub id: String,
    pub identity: Identity,
    pub expires_at: DateTime<Utc>,
}

/// Signed token handed to the browser
#[derive(Clone)]
pub struct SessionToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Server-side session row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
