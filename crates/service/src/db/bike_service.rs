use uuid::Uuid;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;
use models::bike::{self, BikePatch, Entity as BikeEntity, NewBike};

use crate::bike::BikeFilter;
use crate::errors::ServiceError;

/// Insert a validated bike.
pub async fn create_bike(db: &DatabaseConnection, input: NewBike) -> Result<bike::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await?;
    Ok(created)
}

/// List bikes matching `filter`, oldest first.
pub async fn list_bikes(db: &DatabaseConnection, filter: &BikeFilter) -> Result<Vec<bike::Model>, ServiceError> {
    let mut finder = BikeEntity::find();
    if let Some(cond) = filter.condition() {
        debug!(term = ?filter.search_term(), "bike search");
        finder = finder.filter(cond);
    }
    let rows = finder
        .order_by_asc(bike::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

/// Get a bike by id.
pub async fn get_bike(db: &DatabaseConnection, id: Uuid) -> Result<Option<bike::Model>, ServiceError> {
    let found = BikeEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Apply a partial update; `None` when the bike does not exist.
pub async fn update_bike(db: &DatabaseConnection, id: Uuid, patch: BikePatch) -> Result<Option<bike::Model>, ServiceError> {
    let Some(existing) = BikeEntity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: bike::ActiveModel = existing.into();
    patch.apply_to_active(&mut am);
    let updated = am.update(db).await?;
    Ok(Some(updated))
}

/// Delete a bike; returns the removed row, `None` when it did not exist.
pub async fn delete_bike(db: &DatabaseConnection, id: Uuid) -> Result<Option<bike::Model>, ServiceError> {
    let Some(existing) = BikeEntity::find_by_id(id).one(db).await? else { return Ok(None) };
    let res = BikeEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        // removed concurrently between the lookup and the delete
        return Ok(None);
    }
    Ok(Some(existing))
}
