//! Admin login and logout.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Extension, Form, Router,
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::forms::LoginForm;
use crate::api::middleware::{removal_cookie, session_cookie};
use crate::api::views::{render, render_with_status, LoginPage, PageError, PageResult};
use crate::api::AppState;
use crate::config::{ADMIN_DASHBOARD_PATH, SESSION_COOKIE_NAME};
use crate::domain::AdminSession;
use crate::errors::AppError;

const INVALID_CREDENTIALS_NOTICE: &str = "Invalid credentials";

/// Public login routes
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page).post(login))
}

/// Show the login form, or skip it when the cookie carries a live session.
pub async fn login_page(State(state): State<AppState>, jar: CookieJar) -> PageResult<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        if state.auth_service.require_session(cookie.value()).await.is_ok() {
            return Ok(Redirect::to(ADMIN_DASHBOARD_PATH).into_response());
        }
    }

    let page = LoginPage {
        notice: None,
        username: String::new(),
    };
    Ok(render(&page)?.into_response())
}

/// Check credentials and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> PageResult<Response> {
    let username = form.username.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    let identity = match state
        .auth_service
        .authenticate(username.trim(), &password)
        .await
    {
        Ok(identity) => identity,
        Err(AppError::InvalidCredentials) => {
            let page = LoginPage {
                notice: Some(INVALID_CREDENTIALS_NOTICE.to_string()),
                username,
            };
            return Ok(render_with_status(StatusCode::UNAUTHORIZED, &page));
        }
        Err(e) => return Err(PageError(e)),
    };

    let token = state.auth_service.establish_session(&identity).await?;
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));

    Ok((jar, Redirect::to(ADMIN_DASHBOARD_PATH)).into_response())
}

/// End the session and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    jar: CookieJar,
) -> PageResult<Response> {
    state.auth_service.end_session(&session).await?;

    let jar = jar.remove(removal_cookie());
    Ok((jar, Redirect::to(state.landing_url())).into_response())
}
