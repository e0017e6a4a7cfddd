//! Migration: Create services, stylists, testimonials and offers tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(ColumnDef::new(Services::Category).string_len(50).not_null())
                    .col(ColumnDef::new(Services::Price).big_integer().not_null())
                    .col(ColumnDef::new(Services::Duration).integer().not_null())
                    .col(ColumnDef::new(Services::Image).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Services::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Stylists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stylists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stylists::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Stylists::Role).string_len(100).not_null())
                    .col(ColumnDef::new(Stylists::Bio).text().not_null())
                    .col(ColumnDef::new(Stylists::Image).string_len(255).not_null())
                    .col(ColumnDef::new(Stylists::Specialties).string_len(255).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Testimonials::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Testimonials::Role).string_len(100).not_null())
                    .col(ColumnDef::new(Testimonials::Content).text().not_null())
                    .col(ColumnDef::new(Testimonials::Rating).integer().not_null())
                    .col(ColumnDef::new(Testimonials::Avatar).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Offers::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Offers::Description).text().not_null())
                    .col(ColumnDef::new(Offers::Code).string_len(50).not_null())
                    .col(ColumnDef::new(Offers::Discount).string_len(50).not_null())
                    .col(ColumnDef::new(Offers::Expiry).string_len(100).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stylists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    Category,
    Price,
    Duration,
    Image,
    IsFeatured,
}

#[derive(DeriveIden)]
enum Stylists {
    Table,
    Id,
    Name,
    Role,
    Bio,
    Image,
    Specialties,
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Role,
    Content,
    Rating,
    Avatar,
}

#[derive(DeriveIden)]
enum Offers {
    Table,
    Id,
    Title,
    Description,
    Code,
    Discount,
    Expiry,
}
