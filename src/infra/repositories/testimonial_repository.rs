//! Testimonial repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::entities::testimonial::{self, ActiveModel, Entity as TestimonialEntity};
use crate::config::{MAX_RATING, MIN_RATING};
use crate::domain::{NewTestimonial, Testimonial};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Testimonial>>;

    async fn create(&self, testimonial: NewTestimonial) -> AppResult<Testimonial>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct TestimonialStore {
    db: DatabaseConnection,
}

impl TestimonialStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialStore {
    async fn list(&self) -> AppResult<Vec<Testimonial>> {
        let models = TestimonialEntity::find()
            .order_by_asc(testimonial::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Testimonial::from).collect())
    }

    async fn create(&self, testimonial: NewTestimonial) -> AppResult<Testimonial> {
        if !(MIN_RATING..=MAX_RATING).contains(&testimonial.rating) {
            return Err(AppError::validation(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        let active_model = ActiveModel {
            name: Set(testimonial.name),
            role: Set(testimonial.role),
            content: Set(testimonial.content),
            rating: Set(testimonial.rating),
            avatar: Set(testimonial.avatar),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Testimonial::from(model))
    }

    async fn count(&self) -> AppResult<u64> {
        TestimonialEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
