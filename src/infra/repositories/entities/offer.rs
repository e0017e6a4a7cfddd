//! Offer database entity.

use sea_orm::entity::prelude::*;

use crate::domain::Offer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub code: String,
    pub discount: String,
    pub expiry: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Offer {
    fn from(model: Model) -> Self {
        Offer {
            id: model.id,
            title: model.title,
            description: model.description,
            code: model.code,
            discount: model.discount,
            expiry: model.expiry,
        }
    }
}
