//! Session-gated admin panel screens.
//!
//! Every handler receives the [`AdminSession`] injected by the session
//! middleware and passes its identity into the admin service.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Form, Router,
};

use super::admin_auth_handler::logout;
use crate::api::extractors::PageId;
use crate::api::forms::{ServiceForm, StylistForm};
use crate::api::views::{
    render, render_with_status, BookingDetailPage, BookingRow, BookingsPage, DashboardPage,
    MessageRow, MessagesPage, PageError, PageResult, ServiceFormPage, ServiceFormValues,
    ServicesPage, StylistFormPage, StylistFormValues, StylistsPage,
};
use crate::api::AppState;
use crate::domain::{AdminSession, ServiceInput, StylistInput};
use crate::errors::AppError;

const SERVICES_PATH: &str = "/admin/services";
const STYLISTS_PATH: &str = "/admin/stylists";

/// Create admin routes. Callers layer the session middleware on top.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/dashboard", get(dashboard))
        .route("/logout", get(logout))
        .route("/services", get(list_services))
        .route("/services/new", get(new_service).post(create_service))
        .route("/services/:id/edit", get(edit_service).post(update_service))
        .route("/services/:id/delete", post(delete_service))
        .route("/stylists", get(list_stylists))
        .route("/stylists/new", get(new_stylist).post(create_stylist))
        .route("/stylists/:id/edit", get(edit_stylist).post(update_stylist))
        .route("/stylists/:id/delete", post(delete_stylist))
        .route("/bookings", get(list_bookings))
        .route("/bookings/:id", get(get_booking))
        .route("/messages", get(list_messages))
}

/// Validation failures re-render the form; anything else is a notice page.
fn form_failure(err: AppError, page: impl FnOnce(String) -> Response) -> PageResult<Response> {
    match err {
        AppError::MissingField(_) | AppError::Validation(_) | AppError::InvalidField { .. } => {
            Ok(page(err.user_message()))
        }
        other => Err(PageError(other)),
    }
}

async fn dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> PageResult<Html<String>> {
    let stats = state.admin_service.dashboard(&session.identity).await?;
    Ok(render(&DashboardPage::new(session.identity.username(), stats))?)
}

// =============================================================================
// Services
// =============================================================================

async fn list_services(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> PageResult<Html<String>> {
    let services = state.admin_service.list_services(&session.identity).await?;
    Ok(render(&ServicesPage {
        admin_name: session.identity.username().to_string(),
        services,
    })?)
}

fn service_form_page(
    session: &AdminSession,
    heading: &'static str,
    action: String,
    notice: Option<String>,
    values: ServiceFormValues,
) -> ServiceFormPage {
    ServiceFormPage {
        admin_name: session.identity.username().to_string(),
        heading,
        action,
        notice,
        values,
    }
}

async fn new_service(Extension(session): Extension<AdminSession>) -> PageResult<Html<String>> {
    let page = service_form_page(
        &session,
        "New service",
        format!("{}/new", SERVICES_PATH),
        None,
        ServiceFormValues::default(),
    );
    Ok(render(&page)?)
}

async fn create_service(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Form(form): Form<ServiceForm>,
) -> PageResult<Response> {
    let result = match ServiceInput::try_from(&form) {
        Ok(input) => state.admin_service.create_service(&session.identity, input).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Ok(Redirect::to(SERVICES_PATH).into_response()),
        Err(e) => form_failure(e, |notice| {
            let page = service_form_page(
                &session,
                "New service",
                format!("{}/new", SERVICES_PATH),
                Some(notice),
                form.into(),
            );
            render_with_status(StatusCode::BAD_REQUEST, &page)
        }),
    }
}

async fn edit_service(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    PageId(id): PageId,
) -> PageResult<Html<String>> {
    let service = state.admin_service.get_service(&session.identity, id).await?;
    let page = service_form_page(
        &session,
        "Edit service",
        format!("{}/{}/edit", SERVICES_PATH, id),
        None,
        ServiceFormValues::from(&service),
    );
    Ok(render(&page)?)
}

async fn update_service(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    PageId(id): PageId,
    Form(form): Form<ServiceForm>,
) -> PageResult<Response> {
    let result = match ServiceInput::try_from(&form) {
        Ok(input) => {
            state
                .admin_service
                .update_service(&session.identity, id, input)
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Ok(Redirect::to(SERVICES_PATH).into_response()),
        Err(e) => form_failure(e, |notice| {
            let page = service_form_page(
                &session,
                "Edit service",
                format!("{}/{}/edit", SERVICES_PATH, id),
                Some(notice),
                form.into(),
            );
            render_with_status(StatusCode::BAD_REQUEST, &page)
        }),
    }
}

async fn delete_service(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    PageId(id): PageId,
) -> PageResult<Redirect> {
    state.admin_service.delete_service(&session.identity, id).await?;
    Ok(Redirect::to(SERVICES_PATH))
}

// =============================================================================
// Stylists
// =============================================================================

async fn list_stylists(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> PageResult<Html<String>> {
    let stylists = state.admin_service.list_stylists(&session.identity).await?;
    Ok(render(&StylistsPage {
        admin_name: session.identity.username().to_string(),
        stylists,
    })?)
}

fn stylist_form_page(
    session: &AdminSession,
    heading: &'static str,
    action: String,
    notice: Option<String>,
    values: StylistFormValues,
) -> StylistFormPage {
    StylistFormPage {
        admin_name: session.identity.username().to_string(),
        heading,
        action,
        notice,
        values,
    }
}

async fn new_stylist(Extension(session): Extension<AdminSession>) -> PageResult<Html<String>> {
    let page = stylist_form_page(
        &session,
        "New stylist",
        format!("{}/new", STYLISTS_PATH),
        None,
        StylistFormValues::default(),
    );
    Ok(render(&page)?)
}

async fn create_stylist(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Form(form): Form<StylistForm>,
) -> PageResult<Response> {
    let result = match StylistInput::try_from(&form) {
        Ok(input) => state.admin_service.create_stylist(&session.identity, input).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Ok(Redirect::to(STYLISTS_PATH).into_response()),
        Err(e) => form_failure(e, |notice| {
            let page = stylist_form_page(
                &session,
                "New stylist",
                format!("{}/new", STYLISTS_PATH),
                Some(notice),
                form.into(),
            );
            render_with_status(StatusCode::BAD_REQUEST, &page)
        }),
    }
}

async fn edit_stylist(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    PageId(id): PageId,
) -> PageResult<Html<String>> {
    let stylist = state.admin_service.get_stylist(&session.identity, id).await?;
    let page = stylist_form_page(
        &session,
        "Edit stylist",
        format!("{}/{}/edit", STYLISTS_PATH, id),
        None,
        StylistFormValues::from(&stylist),
    );
    Ok(render(&page)?)
}

async fn update_stylist(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    PageId(id): PageId,
    Form(form): Form<StylistForm>,
) -> PageResult<Response> {
    let result = match StylistInput::try_from(&form) {
        Ok(input) => {
            state
                .admin_service
                .update_stylist(&session.identity, id, input)
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Ok(Redirect::to(STYLISTS_PATH).into_response()),
        Err(e) => form_failure(e, |notice| {
            let page = stylist_form_page(
                &session,
                "Edit stylist",
                format!("{}/{}/edit", STYLISTS_PATH, id),
                Some(notice),
                form.into(),
            );
            render_with_status(StatusCode::BAD_REQUEST, &page)
        }),
    }
}

async fn delete_stylist(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    PageId(id): PageId,
) -> PageResult<Redirect> {
    state.admin_service.delete_stylist(&session.identity, id).await?;
    Ok(Redirect::to(STYLISTS_PATH))
}

// =============================================================================
// Bookings & messages (read-only)
// =============================================================================

async fn list_bookings(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> PageResult<Html<String>> {
    let records = state.admin_service.list_bookings(&session.identity).await?;
    Ok(render(&BookingsPage {
        admin_name: session.identity.username().to_string(),
        bookings: records.into_iter().map(BookingRow::from).collect(),
    })?)
}

async fn get_booking(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    PageId(id): PageId,
) -> PageResult<Html<String>> {
    let record = state.admin_service.get_booking(&session.identity, id).await?;
    Ok(render(&BookingDetailPage {
        admin_name: session.identity.username().to_string(),
        booking: BookingRow::from(record),
    })?)
}

async fn list_messages(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> PageResult<Html<String>> {
    let messages = state.admin_service.list_messages(&session.identity).await?;
    Ok(render(&MessagesPage {
        admin_name: session.identity.username().to_string(),
        messages: messages.into_iter().map(MessageRow::from).collect(),
    })?)
}
