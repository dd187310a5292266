use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info};

use models::order::{self, NewOrder};

use crate::errors::JsonApiError;
use crate::response::{ApiSuccess, FlagKey};
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueData {
    pub total_revenue: f64,
}

/// Every failure while creating an order is a 400, whatever its cause.
fn order_failure(message: impl Into<String>, error: Option<Value>) -> JsonApiError {
    let message = message.into();
    let message = if message.is_empty() { "Validation failed".to_string() } else { message };
    JsonApiError::new(StatusCode::BAD_REQUEST, FlagKey::Status, message, error)
}

#[utoipa::path(
    post, path = "/api/orders", tag = "orders",
    request_body = crate::openapi::CreateOrderDoc,
    responses(
        (status = 201, description = "Order created successfully"),
        (status = 400, description = "Order rejected")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiSuccess<order::Model>, JsonApiError> {
    let Json(raw) = body.map_err(|e| JsonApiError::rejected_body(FlagKey::Status, e))?;
    let parsed = NewOrder::parse(&raw).map_err(|errs| JsonApiError::validation(FlagKey::Status, &errs))?;

    // the persistence layer only ever sees the converted reference
    let draft = parsed.into_draft().map_err(|e| {
        let message = e.to_string();
        order_failure(message.clone(), Some(json!({ "name": "ReferenceError", "message": message })))
    })?;
    let product = draft.product;

    match state.orders.create(draft).await {
        Ok(o) => {
            info!(id = %o.id, %product, quantity = o.quantity, "created order");
            Ok(ApiSuccess::created(FlagKey::Status, "Order created successfully", o))
        }
        Err(e) => {
            error!(err = %e, %product, "create order failed");
            Err(order_failure(e.to_string(), Some(crate::errors::error_value(&e))))
        }
    }
}

#[utoipa::path(
    get, path = "/api/orders/revenue", tag = "orders",
    responses(
        (status = 200, description = "Revenue calculated successfully", body = RevenueData),
        (status = 500, description = "Failed to calculate revenue")
    )
)]
pub async fn get_revenue(State(state): State<AppState>) -> Result<ApiSuccess<RevenueData>, JsonApiError> {
    match state.orders.total_revenue().await {
        Ok(total_revenue) => {
            info!(total_revenue, "revenue calculated");
            Ok(ApiSuccess::ok(
                FlagKey::Status,
                "Revenue calculated successfully",
                RevenueData { total_revenue },
            ))
        }
        Err(e) => {
            error!(err = %e, "revenue aggregation failed");
            let message = e.to_string();
            let message = if message.is_empty() { "Failed to calculate revenue".to_string() } else { message };
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                FlagKey::Status,
                message,
                Some(crate::errors::error_value(&e)),
            ))
        }
    }
}
