use async_trait::async_trait;
use models::order::{self, OrderDraft};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Persistence seam for orders and the revenue aggregate.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store an order against an existing bike and take its quantity out of stock.
    async fn create(&self, draft: OrderDraft) -> Result<order::Model, ServiceError>;
    /// Sum of `totalPrice` over all orders; `0.0` without orders.
    async fn total_revenue(&self) -> Result<f64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, draft: OrderDraft) -> Result<order::Model, ServiceError> {
        crate::db::order_service::create_order(&self.db, draft).await
    }

    async fn total_revenue(&self) -> Result<f64, ServiceError> {
        crate::db::order_service::calculate_revenue(&self.db).await
    }
}
