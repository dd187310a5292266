//! SeaORM data access functions used by the repository implementations.

pub mod bike_service;
pub mod order_service;
