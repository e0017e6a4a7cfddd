//! Shared integration test harness: a real router over a throwaway SQLite file.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use salon_backend::commands::seed::{seed_catalog, SeedReport};
use salon_backend::config::SESSION_COOKIE_NAME;
use salon_backend::infra::{Database, Persistence};
use salon_backend::{create_router, AppState, Config};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub database: Arc<Database>,
}

impl TestApp {
    /// Fresh database with migrations applied and one admin account.
    pub async fn spawn() -> Self {
        let path = std::env::temp_dir().join(format!("salon-test-{}.db", Uuid::new_v4()));
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let config = Config::new(url, TEST_SECRET).unwrap();
        let database = Arc::new(Database::connect(&config).await.unwrap());
        let state = AppState::from_config(database.clone(), config);

        state
            .auth_service
            .create_admin(ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .unwrap();

        Self {
            router: create_router(state.clone()),
            state,
            database,
        }
    }

    /// Insert the demo catalog.
    pub async fn seed(&self) -> SeedReport {
        let uow = Persistence::new(self.database.get_connection());
        seed_catalog(&uow).await.unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::get(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> Response {
        self.send(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_raw_json(&self, path: &str, body: &'static str) -> Response {
        self.send(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, path: &str, form: &str, cookie: Option<&str>) -> Response {
        let mut builder =
            Request::post(path).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(form.to_string())).unwrap())
            .await
    }

    /// Log in as the test admin and return a `Cookie` header value.
    pub async fn login(&self) -> String {
        let response = self
            .post_form(
                "/admin/login",
                &format!("username={}&password={}", ADMIN_USERNAME, ADMIN_PASSWORD),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_cookie(&response).expect("login sets the session cookie")
    }
}

/// `name=value` of the session cookie set by a response, if any.
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| {
            pair.starts_with(&format!("{}=", SESSION_COOKIE_NAME))
                && pair.len() > SESSION_COOKIE_NAME.len() + 1
        })
        .map(str::to_string)
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
