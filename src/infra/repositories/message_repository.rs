//! Contact message repository. Messages are insert-only.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::entities::message::{self, ActiveModel, Entity as MessageEntity};
use crate::domain::{Message, NewMessage};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: NewMessage) -> AppResult<Message>;

    /// Most recent first
    async fn list_recent(&self) -> AppResult<Vec<Message>>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct MessageStore {
    db: DatabaseConnection,
}

impl MessageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageStore {
    async fn create(&self, message: NewMessage) -> AppResult<Message> {
        let active_model = ActiveModel {
            name: Set(message.name),
            email: Set(message.email),
            subject: Set(message.subject),
            message: Set(message.message),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Message::from(model))
    }

    async fn list_recent(&self) -> AppResult<Vec<Message>> {
        let models = MessageEntity::find()
            .order_by_desc(message::Column::CreatedAt)
            .order_by_desc(message::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Message::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        MessageEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
