//! Booking database entity.
//!
//! `service_id` and `stylist_id` are declared without
//! relations: rows keep their ids after the referenced record is deleted.

use sea_orm::entity::prelude::*;

use crate::domain::Booking;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: i32,
    pub stylist_id: Option<i32>,
    pub date: String,
    pub time: String,
    pub message: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Booking {
    fn from(model: Model) -> Self {
        Booking {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            service_id: model.service_id,
            stylist_id: model.stylist_id,
            date: model.date,
            time: model.time,
            message: model.message,
            created_at: model.created_at,
        }
    }
}
