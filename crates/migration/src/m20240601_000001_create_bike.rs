//! Create `bikes` table.
//! Product catalog entries; `category` holds one of the catalog category names.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bike::Table)
                    .if_not_exists()
                    .col(uuid(Bike::Id).primary_key())
                    .col(text(Bike::Name).not_null())
                    .col(text(Bike::Brand).not_null())
                    .col(double(Bike::Price).not_null())
                    .col(string_len(Bike::Category, 16).not_null())
                    .col(text(Bike::Description).not_null())
                    .col(integer(Bike::Quantity).not_null())
                    .col(boolean(Bike::InStock).not_null())
                    .col(timestamp_with_time_zone(Bike::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Bike::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bike::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Bike {
    #[sea_orm(iden = "bikes")]
    Table,
    Id,
    Name,
    Brand,
    Price,
    Category,
    Description,
    Quantity,
    InStock,
    CreatedAt,
    UpdatedAt,
}
