use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use models::bike::{self, BikePatch, NewBike};
use models::order::{self, OrderDraft};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::bike::{BikeFilter, BikeRepository};
use crate::errors::ServiceError;
use crate::order::{remaining_stock, OrderRepository};

/// Process-local store implementing both repositories.
///
/// Data lives only as long as the store; it backs the router tests.
/// Locks are always taken bikes first, then orders.
#[derive(Default)]
pub struct InMemoryStore {
    bikes: RwLock<HashMap<Uuid, bike::Model>>,
    orders: RwLock<Vec<order::Model>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> { Arc::new(Self::default()) }

    /// Number of stored orders.
    pub async fn order_count(&self) -> usize { self.orders.read().await.len() }
}

#[async_trait]
impl BikeRepository for InMemoryStore {
    async fn create(&self, input: NewBike) -> Result<bike::Model, ServiceError> {
        let model = input.into_model();
        self.bikes.write().await.insert(model.id, model.clone());
        Ok(model)
    }

    async fn list(&self, filter: &BikeFilter) -> Result<Vec<bike::Model>, ServiceError> {
        let map = self.bikes.read().await;
        let mut rows: Vec<bike::Model> = map.values().filter(|b| filter.matches(b)).cloned().collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<bike::Model>, ServiceError> {
        Ok(self.bikes.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, patch: BikePatch) -> Result<Option<bike::Model>, ServiceError> {
        let mut map = self.bikes.write().await;
        let Some(existing) = map.get_mut(&id) else { return Ok(None) };
        patch.apply_to_model(existing);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<bike::Model>, ServiceError> {
        Ok(self.bikes.write().await.remove(&id))
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn create(&self, draft: OrderDraft) -> Result<order::Model, ServiceError> {
        let mut bikes = self.bikes.write().await;
        let product = bikes.get_mut(&draft.product).ok_or_else(|| ServiceError::not_found("bike"))?;
        let remaining = remaining_stock(product, draft.quantity)?;
        product.quantity = remaining;
        product.in_stock = remaining > 0;
        product.updated_at = Utc::now().into();

        let model = draft.into_model();
        self.orders.write().await.push(model.clone());
        Ok(model)
    }

    async fn total_revenue(&self) -> Result<f64, ServiceError> {
        Ok(self.orders.read().await.iter().map(|o| o.total_price).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::bike::Category;

    fn new_bike(name: &str, brand: &str, category: Category, quantity: i32) -> NewBike {
        NewBike {
            name: name.into(),
            brand: brand.into(),
            price: 100.0,
            category,
            description: "test bike".into(),
            quantity,
            in_stock: quantity > 0,
        }
    }

    #[tokio::test]
    async fn list_applies_search_filter() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        BikeRepository::create(&*store, new_bike("Summit", "Trek", Category::Mountain, 1)).await?;
        BikeRepository::create(&*store, new_bike("Aero", "Mountainside", Category::Road, 1)).await?;
        BikeRepository::create(&*store, new_bike("Volt", "Rad", Category::Electric, 1)).await?;

        let all = store.list(&BikeFilter::all()).await?;
        assert_eq!(all.len(), 3);

        let hits = store.list(&BikeFilter::from_search_term(Some("MOUNTAIN"))).await?;
        let mut names: Vec<_> = hits.iter().map(|b| b.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Aero", "Summit"]);
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_missing_return_none() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        assert!(store.update(Uuid::new_v4(), BikePatch::default()).await?.is_none());
        assert!(BikeRepository::get(&*store, Uuid::new_v4()).await?.is_none());
        assert!(store.delete(Uuid::new_v4()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn order_takes_stock_and_adds_revenue() -> Result<(), anyhow::Error> {
        let store = InMemoryStore::new();
        assert_eq!(store.total_revenue().await?, 0.0);

        let b = BikeRepository::create(&*store, new_bike("Summit", "Trek", Category::Mountain, 3)).await?;
        let draft = OrderDraft { email: "a@b.io".into(), product: b.id, quantity: 3, total_price: 300.0 };
        let o = OrderRepository::create(&*store, draft).await?;
        assert_eq!(o.product, b.id);

        let after = BikeRepository::get(&*store, b.id).await?.unwrap();
        assert_eq!(after.quantity, 0);
        assert!(!after.in_stock);
        assert_eq!(store.total_revenue().await?, 300.0);

        let more = OrderDraft { email: "a@b.io".into(), product: b.id, quantity: 1, total_price: 100.0 };
        assert!(matches!(OrderRepository::create(&*store, more).await, Err(ServiceError::Validation(_))));
        assert_eq!(store.order_count().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn order_for_unknown_bike_is_not_found() {
        let store = InMemoryStore::new();
        let draft = OrderDraft { email: "a@b.io".into(), product: Uuid::new_v4(), quantity: 1, total_price: 1.0 };
        assert!(matches!(OrderRepository::create(&*store, draft).await, Err(ServiceError::NotFound(_))));
    }
}
