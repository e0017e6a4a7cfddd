//! Testimonial database entity.

use sea_orm::entity::prelude::*;

use crate::domain::Testimonial;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
    pub avatar: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Testimonial {
    fn from(model: Model) -> Self {
        Testimonial {
            id: model.id,
            name: model.name,
            role: model.role,
            content: model.content,
            rating: model.rating,
            avatar: model.avatar,
        }
    }
}
