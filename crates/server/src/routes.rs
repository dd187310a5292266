pub mod bikes;
pub mod orders;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Liveness;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/", tag = "health",
    responses((status = 200, description = "Alive", body = crate::openapi::LivenessDoc))
)]
pub async fn liveness() -> Json<Liveness> {
    Json(Liveness::default())
}

/// Build the full application router: liveness, bike catalog, orders and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let products = Router::new()
        .route("/api/products", get(bikes::get_all_bikes).post(bikes::create_bike))
        .route(
            "/api/products/:bikeId",
            get(bikes::get_single_bike)
                .put(bikes::update_bike)
                .delete(bikes::delete_bike),
        );

    let orders = Router::new()
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/revenue", get(orders::get_revenue));

    Router::new()
        .route("/", get(liveness))
        .merge(products)
        .merge(orders)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
