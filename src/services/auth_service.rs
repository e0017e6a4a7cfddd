//! Authentication service - credential checks and admin sessions.
//!
//! Sessions are server-side rows referenced by a signed token. The token
//! alone is never enough: `require_session` also needs the row to exist,
//! so `end_session` revokes a token before its expiry.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{AdminSession, Identity, Password, SessionRecord, SessionToken};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Session token claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i32,
    /// Session row id
    pub sid: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials. Unknown usernames, wrong passwords and empty
    /// passwords all fail with the same `InvalidCredentials`.
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Identity>;

    /// Open a session for an authenticated identity and sign its token.
    async fn establish_session(&self, identity: &Identity) -> AppResult<SessionToken>;

    /// Resolve a presented token to its live session.
    async fn require_session(&self, token: &str) -> AppResult<AdminSession>;

    /// Revoke a session; its token fails `require_session` afterwards.
    async fn end_session(&self, session: &AdminSession) -> AppResult<()>;

    /// Register a new administrator.
    async fn create_admin(&self, username: &str, password: &str) -> AppResult<Identity>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }

    fn sign(&self, claims: &Claims) -> AppResult<String> {
        let token = encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.config.session_secret_bytes()),
        )?;
        Ok(token)
    }

    fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.session_secret_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Identity> {
        let user = self.uow.users().find_by_username(username).await?;

        // Verify against a placeholder when the user is unknown so both
        // rejection paths cost one Argon2 verification.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::placeholder(),
        };
        let password_valid = stored.verify(password);

        match user {
            Some(user) if password_valid => {
                tracing::info!(username = %user.username, "Admin login succeeded");
                Ok(Identity::new(user.id, user.username))
            }
            _ => {
                tracing::warn!(username = %username, "Admin login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn establish_session(&self, identity: &Identity) -> AppResult<SessionToken> {
        let now = Utc::now();
        let expires_at = Duration::try_hours(self.config.session_ttl_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AppError::internal("Session lifetime out of range"))?;

        let purged = self
            .uow
            .sessions()
            .delete_expired_for_user(identity.user_id(), now)
            .await?;
        if purged > 0 {
            tracing::debug!(user_id = identity.user_id(), purged, "Purged expired sessions");
        }

        let record = self
            .uow
            .sessions()
            .create(SessionRecord {
                id: Uuid::new_v4().to_string(),
                user_id: identity.user_id(),
                created_at: now,
                expires_at,
            })
            .await?;

        let claims = Claims {
            sub: identity.user_id(),
            sid: record.id,
            username: identity.username().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(SessionToken {
            value: self.sign(&claims)?,
            expires_at,
        })
    }

    async fn require_session(&self, token: &str) -> AppResult<AdminSession> {
        let claims = self.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Session token rejected");
            AppError::Unauthorized
        })?;

        let record = self
            .uow
            .sessions()
            .find_by_id(&claims.sid)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if record.user_id != claims.sub || record.is_expired(Utc::now()) {
            return Err(AppError::Unauthorized);
        }

        let user = self
            .uow
            .users()
            .find_by_id(record.user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(AdminSession {
            id: record.id,
            identity: Identity::new(user.id, user.username),
            expires_at: record.expires_at,
        })
    }

    async fn end_session(&self, session: &AdminSession) -> AppResult<()> {
        let removed = self.uow.sessions().delete(&session.id).await?;
        tracing::info!(
            username = %session.identity.username(),
            removed,
            "Admin session ended"
        );
        Ok(())
    }

    async fn create_admin(&self, username: &str, password: &str) -> AppResult<Identity> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::MissingField("username"));
        }

        if self.uow.users().find_by_username(username).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(password)?.into_string();
        let user = self
            .uow
            .users()
            .create(username.to_string(), password_hash)
            .await?;

        tracing::info!(username = %user.username, "Admin user created");
        Ok(Identity::new(user.id, user.username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEV_SESSION_SECRET;
    use crate::domain::User;
    use crate::infra::{MockSessionRepository, MockUnitOfWork, MockUserRepository};
    use crate::infra::{SessionRepository, UserRepository};

    fn config() -> Config {
        Config::new("sqlite::memory:", DEV_SESSION_SECRET).unwrap()
    }

    fn stored_admin() -> User {
        User {
            id: 1,
            username: "admin".into(),
            password_hash: Password::new("admin123").unwrap().into_string(),
        }
    }

    fn auth_with(users: MockUserRepository, sessions: MockSessionRepository) -> Authenticator<MockUnitOfWork> {
        let users: Arc<dyn UserRepository> = Arc::new(users);
        let sessions: Arc<dyn SessionRepository> = Arc::new(sessions);

        let mut uow = MockUnitOfWork::new();
        uow.expect_users().return_const(users);
        uow.expect_sessions().return_const(sessions);

        Authenticator::new(Arc::new(uow), config())
    }

    #[tokio::test]
    async fn test_valid_credentials_authenticate() {
        let admin = stored_admin();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(admin.clone())));

        let auth = auth_with(users, MockSessionRepository::new());
        let identity = auth.authenticate("admin", "admin123").await.unwrap();

        assert_eq!(identity.user_id(), 1);
        assert_eq!(identity.username(), "admin");
    }

    #[tokio::test]
    async fn test_rejections_are_indistinguishable() {
        let admin = stored_admin();
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(move |name| {
            Ok((name == "admin").then(|| admin.clone()))
        });

        let auth = auth_with(users, MockSessionRepository::new());

        for (username, password) in [("ghost", "admin123"), ("admin", "wrong-pass"), ("admin", "")] {
            let err = auth.authenticate(username, password).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid username or password");
        }
    }

    #[tokio::test]
    async fn test_session_round_trip_and_revocation() {
        let admin = stored_admin();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(admin.clone())));

        let stored: Arc<std::sync::Mutex<Option<SessionRecord>>> = Arc::default();
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_delete_expired_for_user()
            .returning(|_, _| Ok(0));
        let slot = stored.clone();
        sessions.expect_create().returning(move |record| {
            *slot.lock().unwrap() = Some(record.clone());
            Ok(record)
        });
        let slot = stored.clone();
        sessions
            .expect_find_by_id()
            .returning(move |id| Ok(slot.lock().unwrap().clone().filter(|r| r.id == id)));
        let slot = stored.clone();
        sessions.expect_delete().returning(move |_| {
            Ok(slot.lock().unwrap().take().is_some())
        });

        let auth = auth_with(users, sessions);
        let identity = Identity::new(1, "admin");

        let token = auth.establish_session(&identity).await.unwrap();
        let session = auth.require_session(&token.value).await.unwrap();
        assert_eq!(session.identity, identity);

        auth.end_session(&session).await.unwrap();
        let err = auth.require_session(&token.value).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_oversized_session_lifetime_is_an_error() {
        let mut config = config();
        config.session_ttl_hours = i64::MAX;
        let auth = Authenticator::new(Arc::new(MockUnitOfWork::new()), config);

        let err = auth
            .establish_session(&Identity::new(1, "admin"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let auth = auth_with(MockUserRepository::new(), MockSessionRepository::new());
        let err = auth.require_session("not.a.token").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_create_admin_conflict() {
        let admin = stored_admin();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(admin.clone())));
        users.expect_create().never();

        let auth = auth_with(users, MockSessionRepository::new());
        let err = auth.create_admin("admin", "another-pass").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
