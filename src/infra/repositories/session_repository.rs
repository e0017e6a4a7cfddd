//! Admin session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::session::{self, ActiveModel, Entity as SessionEntity};
use crate::domain::SessionRecord;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, record: SessionRecord) -> AppResult<SessionRecord>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<SessionRecord>>;

    /// Remove one session; returns whether a row was deleted
    async fn delete(&self, id: &str) -> AppResult<bool>;

    /// Remove the user's sessions that expired at or before `now`
    async fn delete_expired_for_user(&self, user_id: i32, now: DateTime<Utc>) -> AppResult<u64>;
}

pub struct SessionStore {
    db: DatabaseConnection,
}

impl SessionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn create(&self, record: SessionRecord) -> AppResult<SessionRecord> {
        let active_model = ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            created_at: Set(record.created_at),
            expires_at: Set(record.expires_at),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(SessionRecord::from(model))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<SessionRecord>> {
        let result = SessionEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(SessionRecord::from))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = SessionEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_expired_for_user(&self, user_id: i32, now: DateTime<Utc>) -> AppResult<u64> {
        let result = SessionEntity::delete_many()
            .filter(session::Column::UserId.eq(user_id))
            .filter(session::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
