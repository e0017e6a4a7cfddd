//! Offer repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::entities::offer::{self, ActiveModel, Entity as OfferEntity};
use crate::domain::{NewOffer, Offer};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Offer>>;

    async fn create(&self, offer: NewOffer) -> AppResult<Offer>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct OfferStore {
    db: DatabaseConnection,
}

impl OfferStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OfferRepository for OfferStore {
    async fn list(&self) -> AppResult<Vec<Offer>> {
        let models = OfferEntity::find()
            .order_by_asc(offer::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Offer::from).collect())
    }

    async fn create(&self, offer: NewOffer) -> AppResult<Offer> {
        let active_model = ActiveModel {
            title: Set(offer.title),
            description: Set(offer.description),
            code: Set(offer.code),
            discount: Set(offer.discount),
            expiry: Set(offer.expiry),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Offer::from(model))
    }

    async fn count(&self) -> AppResult<u64> {
        OfferEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
