use async_trait::async_trait;
use models::bike::{self, BikePatch, NewBike};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::bike::BikeFilter;
use crate::errors::ServiceError;

/// Persistence seam for the bike catalog.
///
/// Lookups by id return `Ok(None)` when the bike does not exist; `Err` is
/// reserved for infrastructure failures.
#[async_trait]
pub trait BikeRepository: Send + Sync {
    async fn create(&self, input: NewBike) -> Result<bike::Model, ServiceError>;
    async fn list(&self, filter: &BikeFilter) -> Result<Vec<bike::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<bike::Model>, ServiceError>;
    async fn update(&self, id: Uuid, patch: BikePatch) -> Result<Option<bike::Model>, ServiceError>;
    /// Returns the removed bike.
    async fn delete(&self, id: Uuid) -> Result<Option<bike::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmBikeRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BikeRepository for SeaOrmBikeRepository {
    async fn create(&self, input: NewBike) -> Result<bike::Model, ServiceError> {
        crate::db::bike_service::create_bike(&self.db, input).await
    }

    async fn list(&self, filter: &BikeFilter) -> Result<Vec<bike::Model>, ServiceError> {
        crate::db::bike_service::list_bikes(&self.db, filter).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<bike::Model>, ServiceError> {
        crate::db::bike_service::get_bike(&self.db, id).await
    }

    async fn update(&self, id: Uuid, patch: BikePatch) -> Result<Option<bike::Model>, ServiceError> {
        crate::db::bike_service::update_bike(&self.db, id, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<Option<bike::Model>, ServiceError> {
        crate::db::bike_service::delete_bike(&self.db, id).await
    }
}
