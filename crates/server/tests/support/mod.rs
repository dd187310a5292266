#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use models::bike::{self, BikePatch, NewBike};
use models::order::{self, OrderDraft};
use serde_json::Value;
use service::bike::{BikeFilter, BikeRepository};
use service::errors::ServiceError;
use service::order::OrderRepository;
use service::storage::memory::InMemoryStore;
use tower::Service;

use server::routes;
use server::startup::build_cors;
use server::state::AppState;

pub fn memory_app() -> (Router, Arc<InMemoryStore>) {
    let store = InMemoryStore::new();
    let app = routes::build_router(AppState::in_memory(store.clone()), build_cors());
    (app, store)
}

/// Router whose repositories fail every call with a database error.
pub fn broken_app() -> Router {
    let broken = Arc::new(Broken);
    routes::build_router(AppState::new(broken.clone(), broken), build_cors())
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let resp = app.clone().call(req.body(body)?).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

pub struct Broken;

fn down() -> ServiceError {
    ServiceError::Db("connection refused".into())
}

#[async_trait]
impl BikeRepository for Broken {
    async fn create(&self, _input: NewBike) -> Result<bike::Model, ServiceError> { Err(down()) }
    async fn list(&self, _filter: &BikeFilter) -> Result<Vec<bike::Model>, ServiceError> { Err(down()) }
    async fn get(&self, _id: uuid::Uuid) -> Result<Option<bike::Model>, ServiceError> { Err(down()) }
    async fn update(&self, _id: uuid::Uuid, _patch: BikePatch) -> Result<Option<bike::Model>, ServiceError> { Err(down()) }
    async fn delete(&self, _id: uuid::Uuid) -> Result<Option<bike::Model>, ServiceError> { Err(down()) }
}

#[async_trait]
impl OrderRepository for Broken {
    async fn create(&self, _draft: OrderDraft) -> Result<order::Model, ServiceError> { Err(down()) }
    async fn total_revenue(&self) -> Result<f64, ServiceError> { Err(down()) }
}
