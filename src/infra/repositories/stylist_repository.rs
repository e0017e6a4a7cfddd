//! Stylist repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::stylist::{self, ActiveModel, Entity as StylistEntity};
use crate::domain::{join_specialties, Stylist, StylistInput};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StylistRepository: Send + Sync {
    /// All stylists in id order
    async fn list(&self) -> AppResult<Vec<Stylist>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Stylist>>;

    /// Stylists among `ids`; unknown ids are absent from the result
    async fn find_by_ids(&self, ids: Vec<i32>) -> AppResult<Vec<Stylist>>;

    async fn create(&self, input: StylistInput) -> AppResult<Stylist>;

    async fn update(&self, id: i32, input: StylistInput) -> AppResult<Stylist>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct StylistStore {
    db: DatabaseConnection,
}

impl StylistStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn apply(active: &mut ActiveModel, input: StylistInput) {
    active.name = Set(input.name);
    active.role = Set(input.role);
    active.bio = Set(input.bio);
    active.image = Set(input.image);
    active.specialties = Set(Some(join_specialties(&input.specialties)));
}

#[async_trait]
impl StylistRepository for StylistStore {
    async fn list(&self) -> AppResult<Vec<Stylist>> {
        let models = StylistEntity::find()
            .order_by_asc(stylist::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Stylist::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Stylist>> {
        let result = StylistEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Stylist::from))
    }

    async fn find_by_ids(&self, ids: Vec<i32>) -> AppResult<Vec<Stylist>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = StylistEntity::find()
            .filter(stylist::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Stylist::from).collect())
    }

    async fn create(&self, input: StylistInput) -> AppResult<Stylist> {
        let mut active = <ActiveModel as Default>::default();
        apply(&mut active, input);

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Stylist::from(model))
    }

    async fn update(&self, id: i32, input: StylistInput) -> AppResult<Stylist> {
        let existing = StylistEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Stylist"))?;

        let mut active: ActiveModel = existing.into();
        apply(&mut active, input);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Stylist::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = StylistEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Stylist"));
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        StylistEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
