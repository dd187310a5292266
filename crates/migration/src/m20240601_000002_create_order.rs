//! Create `orders` table.
//! `product` references `bikes.id` without a foreign key so that removing a
//! bike from the catalog keeps its sales history.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(uuid(Order::Id).primary_key())
                    .col(text(Order::Email).not_null())
                    .col(uuid(Order::Product).not_null())
                    .col(integer(Order::Quantity).not_null())
                    .col(double(Order::TotalPrice).not_null())
                    .col(timestamp_with_time_zone(Order::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Order::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    Email,
    Product,
    Quantity,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
}
