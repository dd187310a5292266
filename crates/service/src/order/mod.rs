pub mod repository;

pub use repository::{OrderRepository, SeaOrmOrderRepository};

use models::bike;

use crate::errors::ServiceError;

/// Stock left on `bike` after taking `quantity` units, or a validation error
/// when the bike cannot cover the order.
pub fn remaining_stock(bike: &bike::Model, quantity: i32) -> Result<i32, ServiceError> {
    if bike.quantity < quantity {
        return Err(ServiceError::Validation(format!(
            "Insufficient stock: requested {}, available {}",
            quantity, bike.quantity
        )));
    }
    Ok(bike.quantity - quantity)
}
