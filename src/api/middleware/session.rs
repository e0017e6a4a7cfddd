//! Cookie session middleware for the admin panel.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::api::AppState;
use crate::config::{ADMIN_LOGIN_PATH, SESSION_COOKIE_NAME};
use crate::domain::SessionToken;
use crate::errors::AppError;

/// Resolve the session cookie and inject the [`AdminSession`] into the
/// request extensions.
///
/// Requests without a live session are redirected to the login page.
///
/// [`AdminSession`]: crate::domain::AdminSession
pub async fn require_admin_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string()) else {
        return Redirect::to(ADMIN_LOGIN_PATH).into_response();
    };

    match state.auth_service.require_session(&token).await {
        Ok(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Err(AppError::Unauthorized) => {
            tracing::debug!(path = %request.uri().path(), "No live admin session");
            (jar.remove(removal_cookie()), Redirect::to(ADMIN_LOGIN_PATH)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Cookie carrying a freshly signed session token.
pub fn session_cookie(token: SessionToken, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token.value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .build()
}

/// Cookie matching the session cookie's path, for removal.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, "")).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(
            SessionToken {
                value: "signed".into(),
                expires_at: Utc::now(),
            },
            true,
        );

        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "signed");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }
}
