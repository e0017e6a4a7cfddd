//! Migration: Create bookings and messages tables.
//!
//! Bookings reference services and stylists by plain indexed id columns;
//! no foreign key constraint is declared.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Bookings::Email).string_len(120).not_null())
                    .col(ColumnDef::new(Bookings::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Bookings::ServiceId).integer().not_null())
                    .col(ColumnDef::new(Bookings::StylistId).integer().null())
                    .col(ColumnDef::new(Bookings::Date).string_len(20).not_null())
                    .col(ColumnDef::new(Bookings::Time).string_len(20).not_null())
                    .col(ColumnDef::new(Bookings::Message).text().null())
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_service_id")
                    .table(Bookings::Table)
                    .col(Bookings::ServiceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_stylist_id")
                    .table(Bookings::Table)
                    .col(Bookings::StylistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_created_at")
                    .table(Bookings::Table)
                    .col(Bookings::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Messages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Messages::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Messages::Email).string_len(120).not_null())
                    .col(ColumnDef::new(Messages::Subject).string_len(200).not_null())
                    .col(ColumnDef::new(Messages::Message).text().not_null())
                    .col(
                        ColumnDef::new(Messages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_messages_created_at")
                    .table(Messages::Table)
                    .col(Messages::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    Name,
    Email,
    Phone,
    ServiceId,
    StylistId,
    Date,
    Time,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    CreatedAt,
}
