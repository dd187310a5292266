use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, info};
use uuid::Uuid;

use models::bike::{self, BikePatch, NewBike};
use service::bike::BikeFilter;

use crate::errors::{error_value, JsonApiError};
use crate::response::{ApiSuccess, FlagKey};
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive match against name, brand and category
    pub search_term: Option<String>,
}

/// Ids that are not UUIDs fail like any other lookup error on the endpoint.
fn parse_bike_id(raw: &str, code: StatusCode) -> Result<Uuid, JsonApiError> {
    Uuid::parse_str(raw).map_err(|e| {
        debug!(raw, "bike id is not a uuid");
        JsonApiError::cast(code, FlagKey::Status, raw, e)
    })
}

#[utoipa::path(
    post, path = "/api/products", tag = "bikes",
    request_body = crate::openapi::CreateBikeDoc,
    responses(
        (status = 200, description = "Bike created successfully"),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Something went wrong")
    )
)]
pub async fn create_bike(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiSuccess<bike::Model>, JsonApiError> {
    let Json(raw) = body.map_err(|e| JsonApiError::rejected_body(FlagKey::Success, e))?;
    let input = NewBike::parse(&raw).map_err(|errs| {
        debug!(errors = errs.errors().len(), "bike payload rejected");
        JsonApiError::validation(FlagKey::Success, &errs)
    })?;

    match state.bikes.create(input).await {
        Ok(b) => {
            info!(id = %b.id, name = %b.name, "created bike");
            Ok(ApiSuccess::ok(FlagKey::Success, "Bike created successfully", b))
        }
        Err(e) => {
            error!(err = %e, "create bike failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                FlagKey::Success,
                "Something went wrong",
                Some(error_value(&e)),
            ))
        }
    }
}

#[utoipa::path(
    get, path = "/api/products", tag = "bikes",
    params(ListQuery),
    responses(
        (status = 200, description = "Bikes retrieved successfully"),
        (status = 400, description = "Malformed query string"),
        (status = 500, description = "List failed")
    )
)]
pub async fn get_all_bikes(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ApiSuccess<Vec<bike::Model>>, JsonApiError> {
    let Query(q) = query.map_err(|e| JsonApiError::rejected_query(FlagKey::Status, e))?;
    let filter = BikeFilter::from_search_term(q.search_term.as_deref());
    match state.bikes.list(&filter).await {
        Ok(list) => {
            info!(count = list.len(), term = ?filter.search_term(), "list bikes");
            Ok(ApiSuccess::ok(FlagKey::Status, "Bikes retrieved successfully", list))
        }
        Err(e) => {
            error!(err = %e, "list bikes failed");
            Err(JsonApiError::service(StatusCode::INTERNAL_SERVER_ERROR, FlagKey::Status, &e))
        }
    }
}

#[utoipa::path(
    get, path = "/api/products/{bikeId}", tag = "bikes",
    params(("bikeId" = String, Path, description = "Bike ID")),
    responses(
        (status = 200, description = "Bike retrieved successfully"),
        (status = 404, description = "Bike not found"),
        (status = 500, description = "Lookup failed")
    )
)]
pub async fn get_single_bike(
    State(state): State<AppState>,
    Path(bike_id): Path<String>,
) -> Result<ApiSuccess<bike::Model>, JsonApiError> {
    let id = parse_bike_id(&bike_id, StatusCode::INTERNAL_SERVER_ERROR)?;
    match state.bikes.get(id).await {
        Ok(Some(b)) => Ok(ApiSuccess::ok(FlagKey::Status, "Bike retrieved successfully", b)),
        Ok(None) => Err(JsonApiError::not_found(FlagKey::Status, "Bike not found")),
        Err(e) => {
            error!(err = %e, %id, "get bike failed");
            Err(JsonApiError::service(StatusCode::INTERNAL_SERVER_ERROR, FlagKey::Status, &e))
        }
    }
}

#[utoipa::path(
    put, path = "/api/products/{bikeId}", tag = "bikes",
    params(("bikeId" = String, Path, description = "Bike ID")),
    request_body = crate::openapi::UpdateBikeDoc,
    responses(
        (status = 200, description = "Bike updated successfully"),
        (status = 400, description = "Update failed"),
        (status = 404, description = "Updated bike ID not found")
    )
)]
pub async fn update_bike(
    State(state): State<AppState>,
    Path(bike_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiSuccess<bike::Model>, JsonApiError> {
    let Json(raw) = body.map_err(|e| JsonApiError::rejected_body(FlagKey::Status, e))?;
    let id = parse_bike_id(&bike_id, StatusCode::BAD_REQUEST)?;
    let patch = BikePatch::from_value(raw).map_err(|e| {
        let message = e.to_string();
        JsonApiError::new(
            StatusCode::BAD_REQUEST,
            FlagKey::Status,
            message.clone(),
            Some(json!({ "name": "CastError", "message": message })),
        )
    })?;

    // every failure on this endpoint is reported as 400, including storage errors
    match state.bikes.update(id, patch).await {
        Ok(Some(b)) => {
            info!(%id, "updated bike");
            Ok(ApiSuccess::ok(FlagKey::Status, "Bike updated successfully", b))
        }
        Ok(None) => Err(JsonApiError::not_found(FlagKey::Status, "Updated bike ID not found")),
        Err(e) => {
            error!(err = %e, %id, "update bike failed");
            Err(JsonApiError::service(StatusCode::BAD_REQUEST, FlagKey::Status, &e))
        }
    }
}

#[utoipa::path(
    delete, path = "/api/products/{bikeId}", tag = "bikes",
    params(("bikeId" = String, Path, description = "Bike ID")),
    responses(
        (status = 200, description = "Bike deleted successfully"),
        (status = 404, description = "Deleted bike ID not found"),
        (status = 500, description = "Delete failed")
    )
)]
pub async fn delete_bike(
    State(state): State<AppState>,
    Path(bike_id): Path<String>,
) -> Result<ApiSuccess<Value>, JsonApiError> {
    let id = parse_bike_id(&bike_id, StatusCode::INTERNAL_SERVER_ERROR)?;
    match state.bikes.delete(id).await {
        Ok(Some(_)) => {
            info!(%id, "deleted bike");
            Ok(ApiSuccess::ok(FlagKey::Status, "Bike deleted successfully", json!({})))
        }
        Ok(None) => Err(JsonApiError::not_found(FlagKey::Status, "Deleted bike ID not found")),
        Err(e) => {
            error!(err = %e, %id, "delete bike failed");
            Err(JsonApiError::service(StatusCode::INTERNAL_SERVER_ERROR, FlagKey::Status, &e))
        }
    }
}
