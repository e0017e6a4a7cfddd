//! Service (treatment) repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::service::{self, ActiveModel, Entity as ServiceEntity};
use crate::domain::{Service, ServiceInput};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// All services in id order
    async fn list(&self) -> AppResult<Vec<Service>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Service>>;

    /// Services among `ids`; ids with no row are simply absent from the result
    async fn find_by_ids(&self, ids: Vec<i32>) -> AppResult<Vec<Service>>;

    async fn create(&self, input: ServiceInput) -> AppResult<Service>;

    /// Replace every editable field. Fails with NotFound for unknown ids.
    async fn update(&self, id: i32, input: ServiceInput) -> AppResult<Service>;

    /// Fails with NotFound for unknown ids.
    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct ServiceStore {
    db: DatabaseConnection,
}

impl ServiceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn apply(active: &mut ActiveModel, input: ServiceInput) {
    active.title = Set(input.title);
    active.description = Set(input.description);
    active.category = Set(input.category);
    active.price = Set(input.price_cents);
    active.duration = Set(input.duration_minutes);
    active.image = Set(input.image);
    active.is_featured = Set(input.featured);
}

#[async_trait]
impl ServiceRepository for ServiceStore {
    async fn list(&self) -> AppResult<Vec<Service>> {
        let models = ServiceEntity::find()
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Service::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Service>> {
        let result = ServiceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Service::from))
    }

    async fn find_by_ids(&self, ids: Vec<i32>) -> AppResult<Vec<Service>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = ServiceEntity::find()
            .filter(service::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Service::from).collect())
    }

    async fn create(&self, input: ServiceInput) -> AppResult<Service> {
        let mut active = <ActiveModel as Default>::default();
        apply(&mut active, input);

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Service::from(model))
    }

    async fn update(&self, id: i32, input: ServiceInput) -> AppResult<Service> {
        let existing = ServiceEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Service"))?;

        let mut active: ActiveModel = existing.into();
        apply(&mut active, input);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Service::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ServiceEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Service"));
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        ServiceEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
