//! Service (treatment) database entity.

use sea_orm::entity::prelude::*;

use crate::domain::Service;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Minor currency units
    pub price: i64,
    pub duration: i32,
    pub image: String,
    pub is_featured: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Service {
    fn from(model: Model) -> Self {
        Service {
            id: model.id,
            title: model.title,
            description: model.description,
            category: model.category,
            price: model.price,
            duration: model.duration,
            image: model.image,
            is_featured: model.is_featured,
        }
    }
}
