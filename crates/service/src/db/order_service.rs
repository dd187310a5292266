use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, QuerySelect, Set,
    TransactionTrait,
};
use tracing::info;
use models::bike::{self, Entity as BikeEntity};
use models::order::{self, Entity as OrderEntity, OrderDraft};

use crate::errors::ServiceError;
use crate::order::remaining_stock;

/// Persist an order and take its quantity out of the referenced bike's stock.
///
/// The bike row is locked for the duration of the transaction so concurrent
/// orders cannot oversell it.
pub async fn create_order(db: &DatabaseConnection, draft: OrderDraft) -> Result<order::Model, ServiceError> {
    let txn = db.begin().await?;

    let Some(product) = BikeEntity::find_by_id(draft.product)
        .lock_exclusive()
        .one(&txn)
        .await?
    else {
        return Err(ServiceError::not_found("bike"));
    };
    let remaining = remaining_stock(&product, draft.quantity)?;

    let bike_id = product.id;
    let mut am: bike::ActiveModel = product.into();
    am.quantity = Set(remaining);
    am.in_stock = Set(remaining > 0);
    am.updated_at = Set(Utc::now().into());
    am.update(&txn).await?;

    let created = draft.into_active_model().insert(&txn).await?;
    txn.commit().await?;

    info!(order_id = %created.id, %bike_id, remaining, "stock reserved for order");
    Ok(created)
}

#[derive(Debug, FromQueryResult)]
struct RevenueRow {
    total: Option<f64>,
}

/// Sum of `total_price` over every order.
pub async fn calculate_revenue(db: &DatabaseConnection) -> Result<f64, ServiceError> {
    let row = OrderEntity::find()
        .select_only()
        .column_as(Expr::col(order::Column::TotalPrice).sum(), "total")
        .into_model::<RevenueRow>()
        .one(db)
        .await?;
    Ok(row.and_then(|r| r.total).unwrap_or(0.0))
}
