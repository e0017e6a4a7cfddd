//! Booking repository. Bookings are insert-only.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::entities::booking::{self, ActiveModel, Entity as BookingEntity};
use crate::domain::{Booking, NewBooking};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert with a store-assigned id and the current UTC time as `created_at`
    async fn create(&self, booking: NewBooking) -> AppResult<Booking>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Booking>>;

    /// Most recent first
    async fn list_recent(&self) -> AppResult<Vec<Booking>>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct BookingStore {
    db: DatabaseConnection,
}

impl BookingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn create(&self, booking: NewBooking) -> AppResult<Booking> {
        let active_model = ActiveModel {
            name: Set(booking.name),
            email: Set(booking.email),
            phone: Set(booking.phone),
            service_id: Set(booking.service_id),
            stylist_id: Set(booking.stylist_id),
            date: Set(booking.date),
            time: Set(booking.time),
            message: Set(booking.message),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Booking::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Booking>> {
        let result = BookingEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Booking::from))
    }

    async fn list_recent(&self) -> AppResult<Vec<Booking>> {
        let models = BookingEntity::find()
            .order_by_desc(booking::Column::CreatedAt)
            .order_by_desc(booking::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Booking::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        BookingEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
