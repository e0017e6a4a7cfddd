//! Admin service - operations behind the session-gated admin panel.
//!
//! Every operation takes the caller's [`Identity`]. Only the
//! authentication service can produce one, so a call here is always made
//! on behalf of a checked session.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::container::parallel;
use crate::domain::{
    Booking, BookingRecord, Identity, Linked, Message, Service, ServiceInput, Stylist,
    StylistInput,
};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Entity counts shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub services: u64,
    pub stylists: u64,
    pub bookings: u64,
    pub messages: u64,
}

#[async_trait]
pub trait AdminService: Send + Sync {
    async fn dashboard(&self, actor: &Identity) -> AppResult<DashboardStats>;

    async fn list_services(&self, actor: &Identity) -> AppResult<Vec<Service>>;
    async fn get_service(&self, actor: &Identity, id: i32) -> AppResult<Service>;
    async fn create_service(&self, actor: &Identity, input: ServiceInput) -> AppResult<Service>;
    async fn update_service(
        &self,
        actor: &Identity,
        id: i32,
        input: ServiceInput,
    ) -> AppResult<Service>;
    /// Bookings referencing the service keep its id
    async fn delete_service(&self, actor: &Identity, id: i32) -> AppResult<()>;

    async fn list_stylists(&self, actor: &Identity) -> AppResult<Vec<Stylist>>;
    async fn get_stylist(&self, actor: &Identity, id: i32) -> AppResult<Stylist>;
    async fn create_stylist(&self, actor: &Identity, input: StylistInput) -> AppResult<Stylist>;
    async fn update_stylist(
        &self,
        actor: &Identity,
        id: i32,
        input: StylistInput,
    ) -> AppResult<Stylist>;
    async fn delete_stylist(&self, actor: &Identity, id: i32) -> AppResult<()>;

    /// Most recent first, with service and stylist looked up
    async fn list_bookings(&self, actor: &Identity) -> AppResult<Vec<BookingRecord>>;
    async fn get_booking(&self, actor: &Identity, id: i32) -> AppResult<BookingRecord>;

    /// Most recent first
    async fn list_messages(&self, actor: &Identity) -> AppResult<Vec<Message>>;
}

pub struct AdminPanel<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AdminPanel<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn resolve(&self, bookings: Vec<Booking>) -> AppResult<Vec<BookingRecord>> {
        let service_ids: BTreeSet<i32> = bookings.iter().map(|b| b.service_id).collect();
        let stylist_ids: BTreeSet<i32> = bookings.iter().filter_map(|b| b.stylist_id).collect();

        let services = self.uow.services();
        let stylists = self.uow.stylists();
        let (services, stylists) = parallel::join2(
            services.find_by_ids(service_ids.into_iter().collect()),
            stylists.find_by_ids(stylist_ids.into_iter().collect()),
        )
        .await?;

        Ok(link_bookings(bookings, services, stylists))
    }
}

/// Attach services and stylists to bookings; ids with no match become
/// `Linked::Unresolved`.
pub(crate) fn link_bookings(
    bookings: Vec<Booking>,
    services: Vec<Service>,
    stylists: Vec<Stylist>,
) -> Vec<BookingRecord> {
    let services: HashMap<i32, Service> = services.into_iter().map(|s| (s.id, s)).collect();
    let stylists: HashMap<i32, Stylist> = stylists.into_iter().map(|s| (s.id, s)).collect();

    bookings
        .into_iter()
        .map(|booking| {
            let service =
                Linked::from_lookup(booking.service_id, services.get(&booking.service_id).cloned());
            if !service.is_resolved() {
                tracing::warn!(
                    booking_id = booking.id,
                    service_id = booking.service_id,
                    "Booking references a missing service"
                );
            }

            let stylist = booking.stylist_id.map(|id| {
                let stylist = Linked::from_lookup(id, stylists.get(&id).cloned());
                if !stylist.is_resolved() {
                    tracing::warn!(
                        booking_id = booking.id,
                        stylist_id = id,
                        "Booking references a missing stylist"
                    );
                }
                stylist
            });

            BookingRecord {
                booking,
                service,
                stylist,
            }
        })
        .collect()
}

#[async_trait]
impl<U: UnitOfWork> AdminService for AdminPanel<U> {
    async fn dashboard(&self, actor: &Identity) -> AppResult<DashboardStats> {
        tracing::debug!(actor = %actor.username(), "Loading dashboard");

        let (services, stylists, bookings, messages) = (
            self.uow.services(),
            self.uow.stylists(),
            self.uow.bookings(),
            self.uow.messages(),
        );
        let (services, stylists, bookings, messages) = parallel::join4(
            services.count(),
            stylists.count(),
            bookings.count(),
            messages.count(),
        )
        .await?;

        Ok(DashboardStats {
            services,
            stylists,
            bookings,
            messages,
        })
    }

    async fn list_services(&self, _actor: &Identity) -> AppResult<Vec<Service>> {
        self.uow.services().list().await
    }

    async fn get_service(&self, _actor: &Identity, id: i32) -> AppResult<Service> {
        self.uow.services().find_by_id(id).await?.ok_or_not_found("Service")
    }

    async fn create_service(&self, actor: &Identity, input: ServiceInput) -> AppResult<Service> {
        let service = self.uow.services().create(input).await?;
        tracing::info!(actor = %actor.username(), service_id = service.id, "Service created");
        Ok(service)
    }

    async fn update_service(
        &self,
        actor: &Identity,
        id: i32,
        input: ServiceInput,
    ) -> AppResult<Service> {
        let service = self.uow.services().update(id, input).await?;
        tracing::info!(actor = %actor.username(), service_id = id, "Service updated");
        Ok(service)
    }

    async fn delete_service(&self, actor: &Identity, id: i32) -> AppResult<()> {
        self.uow.services().delete(id).await?;
        tracing::info!(actor = %actor.username(), service_id = id, "Service deleted");
        Ok(())
    }

    async fn list_stylists(&self, _actor: &Identity) -> AppResult<Vec<Stylist>> {
        self.uow.stylists().list().await
    }

    async fn get_stylist(&self, _actor: &Identity, id: i32) -> AppResult<Stylist> {
        self.uow.stylists().find_by_id(id).await?.ok_or_not_found("Stylist")
    }

    async fn create_stylist(&self, actor: &Identity, input: StylistInput) -> AppResult<Stylist> {
        let stylist = self.uow.stylists().create(input).await?;
        tracing::info!(actor = %actor.username(), stylist_id = stylist.id, "Stylist created");
        Ok(stylist)
    }

    async fn update_stylist(
        &self,
        actor: &Identity,
        id: i32,
        input: StylistInput,
    ) -> AppResult<Stylist> {
        let stylist = self.uow.stylists().update(id, input).await?;
        tracing::info!(actor = %actor.username(), stylist_id = id, "Stylist updated");
        Ok(stylist)
    }

    async fn delete_stylist(&self, actor: &Identity, id: i32) -> AppResult<()> {
        self.uow.stylists().delete(id).await?;
        tracing::info!(actor = %actor.username(), stylist_id = id, "Stylist deleted");
        Ok(())
    }

    async fn list_bookings(&self, _actor: &Identity) -> AppResult<Vec<BookingRecord>> {
        let bookings = self.uow.bookings().list_recent().await?;
        self.resolve(bookings).await
    }

    async fn get_booking(&self, _actor: &Identity, id: i32) -> AppResult<BookingRecord> {
        let booking = self.uow.bookings().find_by_id(id).await?.ok_or_not_found("Booking")?;
        let mut records = self.resolve(vec![booking]).await?;
        records.pop().ok_or_not_found("Booking")
    }

    async fn list_messages(&self, _actor: &Identity) -> AppResult<Vec<Message>> {
        self.uow.messages().list_recent().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::{
        BookingRepository, MessageRepository, MockBookingRepository, MockMessageRepository,
        MockServiceRepository, MockStylistRepository, MockUnitOfWork, ServiceRepository,
        StylistRepository,
    };
    use chrono::Utc;

    fn booking(id: i32, service_id: i32, stylist_id: Option<i32>) -> Booking {
        Booking {
            id,
            name: "Ana".into(),
            email: "a@x.com".into(),
            phone: "555".into(),
            service_id,
            stylist_id,
            date: "2025-06-01".into(),
            time: "10:00".into(),
            message: None,
            created_at: Utc::now(),
        }
    }

    fn haircut() -> Service {
        Service {
            id: 1,
            title: "Classic Haircut".into(),
            description: "Cut and style".into(),
            category: "Hair".into(),
            price: 4500,
            duration: 45,
            image: "haircut.jpg".into(),
            is_featured: true,
        }
    }

    fn elena() -> Stylist {
        Stylist {
            id: 3,
            name: "Elena Ross".into(),
            role: "Senior Stylist".into(),
            bio: String::new(),
            image: String::new(),
            specialties: vec!["Hair".into(), "Color".into()],
        }
    }

    #[test]
    fn test_link_bookings_marks_missing_targets() {
        let records = link_bookings(
            vec![booking(1, 1, Some(3)), booking(2, 9, Some(8)), booking(3, 1, None)],
            vec![haircut()],
            vec![elena()],
        );

        assert_eq!(records[0].service, Linked::Resolved(haircut()));
        assert_eq!(records[0].stylist, Some(Linked::Resolved(elena())));
        assert_eq!(records[1].service, Linked::Unresolved { id: 9 });
        assert_eq!(records[1].stylist, Some(Linked::Unresolved { id: 8 }));
        assert_eq!(records[2].stylist, None);
    }

    #[tokio::test]
    async fn test_dashboard_counts() {
        let mut services = MockServiceRepository::new();
        services.expect_count().returning(|| Ok(3));
        let mut stylists = MockStylistRepository::new();
        stylists.expect_count().returning(|| Ok(2));
        let mut bookings = MockBookingRepository::new();
        bookings.expect_count().returning(|| Ok(7));
        let mut messages = MockMessageRepository::new();
        messages.expect_count().returning(|| Ok(0));

        let services: Arc<dyn ServiceRepository> = Arc::new(services);
        let stylists: Arc<dyn StylistRepository> = Arc::new(stylists);
        let bookings: Arc<dyn BookingRepository> = Arc::new(bookings);
        let messages: Arc<dyn MessageRepository> = Arc::new(messages);

        let mut uow = MockUnitOfWork::new();
        uow.expect_services().return_const(services);
        uow.expect_stylists().return_const(stylists);
        uow.expect_bookings().return_const(bookings);
        uow.expect_messages().return_const(messages);

        let panel = AdminPanel::new(Arc::new(uow));
        let stats = panel.dashboard(&Identity::new(1, "admin")).await.unwrap();

        assert_eq!(
            stats,
            DashboardStats {
                services: 3,
                stylists: 2,
                bookings: 7,
                messages: 0
            }
        );
    }

    #[tokio::test]
    async fn test_get_missing_service_is_not_found() {
        let mut services = MockServiceRepository::new();
        services.expect_find_by_id().returning(|_| Ok(None));
        let services: Arc<dyn ServiceRepository> = Arc::new(services);

        let mut uow = MockUnitOfWork::new();
        uow.expect_services().return_const(services);

        let panel = AdminPanel::new(Arc::new(uow));
        let err = panel
            .get_service(&Identity::new(1, "admin"), 42)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Service")));
    }
}
