/// Entity round trips against a live database.
/// Skipped when `SKIP_DB_TESTS` is set or no database is reachable.
pub mod crud_tests {
    use crate::db::connect;
    use crate::{bike, order};
    use anyhow::Result;
    use migration::MigratorTrait;
    use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
    use serde_json::json;
    use uuid::Uuid;

    async fn setup_test_db() -> Option<DatabaseConnection> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return None;
        }
        let db = match connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return None;
            }
        };
        if let Err(e) = migration::Migrator::up(&db, None).await {
            eprintln!("skip: migrate up failed: {}", e);
            return None;
        }
        Some(db)
    }

    #[tokio::test]
    async fn test_bike_crud() -> Result<()> {
        let Some(db) = setup_test_db().await else { return Ok(()) };

        let name = format!("crud_bike_{}", Uuid::new_v4());
        let new_bike = bike::NewBike::parse(&json!({
            "name": name,
            "brand": "Trek",
            "price": 850.0,
            "category": "Road",
            "description": "Endurance road frame",
            "quantity": 3
        }))?;
        let created = new_bike.into_active_model().insert(&db).await?;
        assert_eq!(created.name, name);
        assert_eq!(created.category, bike::Category::Road);

        let found = bike::Entity::find()
            .filter(bike::Column::Name.eq(name.clone()))
            .one(&db)
            .await?;
        assert_eq!(found.map(|b| b.id), Some(created.id));

        let res = bike::Entity::delete_by_id(created.id).exec(&db).await?;
        assert_eq!(res.rows_affected, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_long_text_fields_persist() -> Result<()> {
        let Some(db) = setup_test_db().await else { return Ok(()) };

        let name = format!("{}{}", "n".repeat(300), Uuid::new_v4());
        let created = bike::NewBike::parse(&json!({
            "name": name,
            "brand": "b".repeat(300),
            "price": 10.0,
            "category": "Hybrid",
            "description": "Long text columns",
            "quantity": 1
        }))?
        .into_active_model()
        .insert(&db)
        .await?;
        assert_eq!(created.name, name);
        assert_eq!(created.brand.len(), 300);

        let draft = order::NewOrder::parse(&json!({
            "email": format!("{}@example.com", "e".repeat(300)),
            "product": created.id.to_string(),
            "quantity": 1,
            "totalPrice": 10.0
        }))?
        .into_draft()?;
        let placed = draft.into_active_model().insert(&db).await?;

        order::Entity::delete_by_id(placed.id).exec(&db).await?;
        bike::Entity::delete_by_id(created.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_order_insert_keeps_reference() -> Result<()> {
        let Some(db) = setup_test_db().await else { return Ok(()) };

        let product = Uuid::new_v4();
        let draft = order::NewOrder::parse(&json!({
            "email": "crud@example.com",
            "product": product.to_string(),
            "quantity": 1,
            "totalPrice": 42.0
        }))?
        .into_draft()?;
        let created = draft.into_active_model().insert(&db).await?;
        assert_eq!(created.product, product);

        order::Entity::delete_by_id(created.id).exec(&db).await?;
        Ok(())
    }
}
