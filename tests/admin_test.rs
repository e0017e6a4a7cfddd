//! Integration tests for the session-gated admin panel.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, body_text, location, session_cookie, TestApp};

const HAIRCUT_FORM: &str = "title=Classic+Haircut&description=Precision+cut&category=Hair\
                            &price=45.00&duration=45&image=cut.jpg&is_featured=on";

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_login_sets_cookie_and_opens_dashboard() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app.get("/admin/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Services"));
    assert!(html.contains("admin"));
}

#[tokio::test]
async fn test_rejected_logins_look_identical() {
    let app = TestApp::spawn().await;

    let attempts = [
        "username=nobody&password=admin123",
        "username=admin&password=wrong-password",
        "username=admin&password=",
        "username=admin",
    ];

    for form in attempts {
        let response = app.post_form("/admin/login", form, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{form}");
        assert!(session_cookie(&response).is_none());
        assert!(body_text(response).await.contains("Invalid credentials"));
    }
}

#[tokio::test]
async fn test_login_page_skipped_with_live_session() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app.get("/admin/login", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard");

    let response = app.get("/admin/login", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app.get("/admin/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");

    // The old token is still correctly signed but no longer backed by a session
    let response = app.get("/admin/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_admin_screens_redirect_without_session() {
    let app = TestApp::spawn().await;

    for path in [
        "/admin",
        "/admin/dashboard",
        "/admin/services",
        "/admin/stylists/new",
        "/admin/bookings",
        "/admin/messages",
    ] {
        let response = app.get(path, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/admin/login");
    }

    let response = app
        .get("/admin/dashboard", Some("salon_session=forged.token.value"))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// =============================================================================
// Service & stylist CRUD
// =============================================================================

const STYLIST_FORM: &str = "name=Ana+Lima&role=Stylist&bio=Cuts&image=a.jpg&specialties=Hair";

#[tokio::test]
async fn test_catalog_writes_require_session() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let services_before = body_json(app.get("/api/services", None).await).await;
    let stylists_before = body_json(app.get("/api/stylists", None).await).await;

    let writes = [
        ("/admin/services/new", HAIRCUT_FORM),
        ("/admin/services/1/edit", HAIRCUT_FORM),
        ("/admin/services/1/delete", ""),
        ("/admin/stylists/new", STYLIST_FORM),
        ("/admin/stylists/1/edit", STYLIST_FORM),
        ("/admin/stylists/1/delete", ""),
    ];

    for (path, form) in writes {
        let response = app.post_form(path, form, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/admin/login", "{path}");
    }

    let services_after = body_json(app.get("/api/services", None).await).await;
    let stylists_after = body_json(app.get("/api/stylists", None).await).await;
    assert_eq!(services_after, services_before);
    assert_eq!(stylists_after, stylists_before);
    assert_eq!(services_after.as_array().map(Vec::len), Some(3));
    assert_eq!(stylists_after.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_service_crud_is_visible_immediately() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app
        .post_form("/admin/services/new", HAIRCUT_FORM, Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/services");

    let service = body_json(app.get("/api/services/1", None).await).await;
    assert_eq!(service["price"], 4500);
    assert_eq!(service["isFeatured"], true);

    let response = app
        .post_form(
            "/admin/services/1/edit",
            "title=Signature+Cut&description=Precision+cut&category=Hair\
             &price=50.999&duration=50&image=cut.jpg",
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let service = body_json(app.get("/api/services/1", None).await).await;
    assert_eq!(service["title"], "Signature Cut");
    assert_eq!(service["price"], 5099);
    assert_eq!(service["isFeatured"], false);

    let response = app
        .post_form("/admin/services/1/delete", "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let response = app.get("/api/services/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_service_form_rerenders_with_notice() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app
        .post_form(
            "/admin/services/new",
            "title=Trim&description=Quick&category=Hair&price=abc&duration=20&image=x.jpg",
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("value=\"Trim\""));

    let response = app
        .post_form(
            "/admin/services/new",
            "description=Quick&category=Hair&price=10&duration=20&image=x.jpg",
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Missing field: title"));

    assert_eq!(body_json(app.get("/api/services", None).await).await, json!([]));
}

#[tokio::test]
async fn test_editing_missing_service_shows_not_found_page() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app.get("/admin/services/99/edit", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Service not found"));

    let response = app
        .post_form("/admin/stylists/99/delete", "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for path in ["/admin/services/abc/edit", "/admin/bookings/99999999999"] {
        let response = app.get(path, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
        assert!(body_text(response).await.contains("not found"), "{path}");
    }
}

#[tokio::test]
async fn test_stylist_specialties_round_trip() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    let response = app
        .post_form(
            "/admin/stylists/new",
            "name=Elena+Ross&role=Senior+Stylist&bio=Modern+cuts&image=e.jpg\
             &specialties=Hair%2C+Color%2C",
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .post_form(
            "/admin/stylists/new",
            "name=Marco+Diaz&role=Colorist&bio=Colors&image=m.jpg&specialties=",
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let elena = body_json(app.get("/api/stylists/1", None).await).await;
    assert_eq!(elena["specialties"], json!(["Hair", "Color"]));

    let marco = body_json(app.get("/api/stylists/2", None).await).await;
    assert_eq!(marco["specialties"], json!([]));

    let edit = body_text(app.get("/admin/stylists/1/edit", Some(&cookie)).await).await;
    assert!(edit.contains("Hair, Color"));
}

// =============================================================================
// Bookings & messages
// =============================================================================

#[tokio::test]
async fn test_booking_survives_service_deletion() {
    let app = TestApp::spawn().await;
    app.seed().await;
    let cookie = app.login().await;

    let receipt = body_json(
        app.post_json(
            "/api/bookings",
            json!({
                "name": "Ana",
                "email": "a@x.com",
                "phone": "555",
                "serviceId": 1,
                "date": "2025-06-01",
                "time": "10:00"
            }),
        )
        .await,
    )
    .await;
    let id = receipt["id"].as_i64().unwrap();

    let detail = body_text(app.get(&format!("/admin/bookings/{id}"), Some(&cookie)).await).await;
    assert!(detail.contains("Ana"));
    assert!(detail.contains("a@x.com"));
    assert!(detail.contains("2025-06-01"));
    assert!(detail.contains("Classic Haircut"));

    let response = app
        .post_form("/admin/services/1/delete", "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.get("/admin/bookings", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("unresolved #1"));

    let response = app.get(&format!("/admin/bookings/{id}"), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("unresolved #1"));
}

#[tokio::test]
async fn test_messages_listing_shows_submissions() {
    let app = TestApp::spawn().await;
    let cookie = app.login().await;

    app.post_json(
        "/api/messages",
        json!({"name": "Ana", "email": "a@x.com", "subject": "Parking", "message": "Is there parking?"}),
    )
    .await;

    let html = body_text(app.get("/admin/messages", Some(&cookie)).await).await;
    assert!(html.contains("Parking"));
    assert!(html.contains("Is there parking?"));

    let dashboard = body_text(app.get("/admin", Some(&cookie)).await).await;
    assert!(dashboard.contains("Messages"));
}
