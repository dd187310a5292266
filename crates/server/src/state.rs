use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::bike::{BikeRepository, SeaOrmBikeRepository};
use service::order::{OrderRepository, SeaOrmOrderRepository};
use service::storage::memory::InMemoryStore;

/// Shared handler state: the two service-layer seams.
#[derive(Clone)]
pub struct AppState {
    pub bikes: Arc<dyn BikeRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new(bikes: Arc<dyn BikeRepository>, orders: Arc<dyn OrderRepository>) -> Self {
        Self { bikes, orders }
    }

    /// SeaORM repositories sharing one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self {
            bikes: Arc::new(SeaOrmBikeRepository { db: db.clone() }),
            orders: Arc::new(SeaOrmOrderRepository { db }),
        }
    }

    /// Both repositories backed by the same in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        let bikes: Arc<dyn BikeRepository> = store.clone();
        let orders: Arc<dyn OrderRepository> = store;
        Self { bikes, orders }
    }
}
