//! Stylist database entity.

use sea_orm::entity::prelude::*;

use crate::domain::{split_specialties, Stylist};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stylists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    /// Comma separated
    pub specialties: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Stylist {
    fn from(model: Model) -> Self {
        Stylist {
            id: model.id,
            name: model.name,
            role: model.role,
            bio: model.bio,
            image: model.image,
            specialties: split_specialties(model.specialties.as_deref()),
        }
    }
}
