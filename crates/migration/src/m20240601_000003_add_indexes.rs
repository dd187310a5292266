use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_bike::Bike;
use crate::m20240601_000002_create_order::Order;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Bikes: category is the most common listing filter
        manager
            .create_index(
                Index::create()
                    .name("idx_bikes_category")
                    .table(Bike::Table)
                    .col(Bike::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Orders: lookups by referenced product
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_product")
                    .table(Order::Table)
                    .col(Order::Product)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_orders_product").table(Order::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bikes_category").table(Bike::Table).to_owned())
            .await
    }
}
