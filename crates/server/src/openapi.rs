use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct LivenessDoc { pub status: bool, pub message: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateBikeDoc {
    pub name: String,
    pub brand: String,
    pub price: f64,
    /// Mountain, Road, Hybrid or Electric
    pub category: String,
    pub description: String,
    pub quantity: i32,
    pub in_stock: Option<bool>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateBikeDoc {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub in_stock: Option<bool>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateOrderDoc {
    pub email: String,
    /// Bike ID
    pub product: String,
    pub quantity: i32,
    pub total_price: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::liveness,
        crate::routes::bikes::create_bike,
        crate::routes::bikes::get_all_bikes,
        crate::routes::bikes::get_single_bike,
        crate::routes::bikes::update_bike,
        crate::routes::bikes::delete_bike,
        crate::routes::orders::create_order,
        crate::routes::orders::get_revenue,
    ),
    components(
        schemas(
            LivenessDoc,
            CreateBikeDoc,
            UpdateBikeDoc,
            CreateOrderDoc,
            crate::routes::orders::RevenueData,
        )
    ),
    tags(
        (name = "health"),
        (name = "bikes"),
        (name = "orders")
    )
)]
pub struct ApiDoc;
