//! Server-rendered admin pages (askama templates).

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::domain::{BookingRecord, Linked, Message, Service, Stylist};
use crate::errors::AppError;
use crate::services::DashboardStats;

/// Render a template into an HTML body.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::internal(format!("Template render error: {}", e)))
}

/// Render a template with a non-200 status.
pub fn render_with_status<T: Template>(status: StatusCode, template: &T) -> Response {
    match render(template) {
        Ok(html) => (status, html).into_response(),
        Err(e) => PageError(e).into_response(),
    }
}

/// Error shown to a browser as an HTML notice page instead of JSON.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let page = ErrorPage {
            status: status.as_u16(),
            message: self.0.user_message(),
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!("Template render error: {err}");
                (status, page.message).into_response()
            }
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;

#[derive(Template)]
#[template(path = "admin/error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginPage {
    pub notice: Option<String>,
    pub username: String,
}

#[derive(Clone, Debug)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    pub link: &'static str,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardPage {
    pub admin_name: String,
    pub stats: Vec<StatCard>,
}

impl DashboardPage {
    pub fn new(admin_name: &str, stats: DashboardStats) -> Self {
        Self {
            admin_name: admin_name.to_string(),
            stats: vec![
                StatCard {
                    label: "Services",
                    value: stats.services,
                    link: "/admin/services",
                },
                StatCard {
                    label: "Stylists",
                    value: stats.stylists,
                    link: "/admin/stylists",
                },
                StatCard {
                    label: "Bookings",
                    value: stats.bookings,
                    link: "/admin/bookings",
                },
                StatCard {
                    label: "Messages",
                    value: stats.messages,
                    link: "/admin/messages",
                },
            ],
        }
    }
}

#[derive(Template)]
#[template(path = "admin/services.html")]
pub struct ServicesPage {
    pub admin_name: String,
    pub services: Vec<Service>,
}

/// Values echoed back into the service form
#[derive(Clone, Debug, Default)]
pub struct ServiceFormValues {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub duration: String,
    pub image: String,
    pub is_featured: bool,
}

impl From<&Service> for ServiceFormValues {
    fn from(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            category: service.category.clone(),
            price: service.price_display(),
            duration: service.duration.to_string(),
            image: service.image.clone(),
            is_featured: service.is_featured,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/service_form.html")]
pub struct ServiceFormPage {
    pub admin_name: String,
    pub heading: &'static str,
    pub action: String,
    pub notice: Option<String>,
    pub values: ServiceFormValues,
}

#[derive(Template)]
#[template(path = "admin/stylists.html")]
pub struct StylistsPage {
    pub admin_name: String,
    pub stylists: Vec<Stylist>,
}

/// Values echoed back into the stylist form
#[derive(Clone, Debug, Default)]
pub struct StylistFormValues {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    pub specialties: String,
}

impl From<&Stylist> for StylistFormValues {
    fn from(stylist: &Stylist) -> Self {
        Self {
            name: stylist.name.clone(),
            role: stylist.role.clone(),
            bio: stylist.bio.clone(),
            image: stylist.image.clone(),
            specialties: stylist.specialties_text(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/stylist_form.html")]
pub struct StylistFormPage {
    pub admin_name: String,
    pub heading: &'static str,
    pub action: String,
    pub notice: Option<String>,
    pub values: StylistFormValues,
}

/// Booking flattened for display
#[derive(Clone, Debug)]
pub struct BookingRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub service_resolved: bool,
    pub stylist: String,
    pub stylist_resolved: bool,
    pub date: String,
    pub time: String,
    pub message: String,
    pub created_at: String,
}

fn describe<T>(link: &Linked<T>, label: impl Fn(&T) -> String) -> (String, bool) {
    match link {
        Linked::Resolved(target) => (label(target), true),
        Linked::Unresolved { id } => (format!("unresolved #{}", id), false),
    }
}

impl From<BookingRecord> for BookingRow {
    fn from(record: BookingRecord) -> Self {
        let (service, service_resolved) = describe(&record.service, |s: &Service| s.title.clone());
        let (stylist, stylist_resolved) = match &record.stylist {
            Some(link) => describe(link, |s: &Stylist| s.name.clone()),
            None => ("Any".to_string(), true),
        };
        let booking = record.booking;

        Self {
            id: booking.id,
            name: booking.name,
            email: booking.email,
            phone: booking.phone,
            service,
            service_resolved,
            stylist,
            stylist_resolved,
            date: booking.date,
            time: booking.time,
            message: booking.message.unwrap_or_default(),
            created_at: booking.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/bookings.html")]
pub struct BookingsPage {
    pub admin_name: String,
    pub bookings: Vec<BookingRow>,
}

#[derive(Template)]
#[template(path = "admin/booking_detail.html")]
pub struct BookingDetailPage {
    pub admin_name: String,
    pub booking: BookingRow,
}

#[derive(Clone, Debug)]
pub struct MessageRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
}

impl From<Message> for MessageRow {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            name: message.name,
            email: message.email,
            subject: message.subject,
            message: message.message,
            created_at: message.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/messages.html")]
pub struct MessagesPage {
    pub admin_name: String,
    pub messages: Vec<MessageRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Booking;
    use chrono::Utc;

    fn record(service: Linked<Service>, stylist: Option<Linked<Stylist>>) -> BookingRecord {
        BookingRecord {
            booking: Booking {
                id: 4,
                name: "Ana".into(),
                email: "a@x.com".into(),
                phone: "555".into(),
                service_id: 1,
                stylist_id: None,
                date: "2025-06-01".into(),
                time: "10:00".into(),
                message: None,
                created_at: Utc::now(),
            },
            service,
            stylist,
        }
    }

    #[test]
    fn test_unresolved_service_is_labelled() {
        let row = BookingRow::from(record(Linked::Unresolved { id: 1 }, None));
        assert_eq!(row.service, "unresolved #1");
        assert!(!row.service_resolved);
        assert_eq!(row.stylist, "Any");
    }

    #[test]
    fn test_error_page_renders_message() {
        let html = ErrorPage {
            status: 404,
            message: "Service not found".into(),
        }
        .render()
        .unwrap();
        assert!(html.contains("Service not found"));
    }

    #[test]
    fn test_login_page_escapes_username() {
        let html = LoginPage {
            notice: Some("Invalid credentials".into()),
            username: "<script>".into(),
        }
        .render()
        .unwrap();
        assert!(html.contains("Invalid credentials"));
        assert!(!html.contains("<script>"));
    }
}
