use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};

use crate::{
    dto::order_lines::{ProductSalesList, StockUpdateResult},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    routes::params::TopProductsQuery,
    services::order_line_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_top_products))
        .route("/{merchant_product_no}/update-stock", put(update_stock))
}

#[utoipa::path(
    get,
    path = "/api/order-lines",
    params(TopProductsQuery),
    responses(
        (status = 200, description = "Top selling products by quantity", body = ApiResponse<ProductSalesList>),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Order lines"
)]
pub async fn list_top_products(
    State(state): State<AppState>,
    Query(query): Query<TopProductsQuery>,
) -> AppResult<Json<ApiResponse<ProductSalesList>>> {
    let limit = query.normalize();
    let items = order_line_service::top_selling_products(&state, limit).await?;
    let meta = Meta::new(limit, items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Top selling products",
        ProductSalesList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    put,
    path = "/api/order-lines/{merchant_product_no}/update-stock",
    params(
        ("merchant_product_no" = String, Path, description = "Merchant product number")
    ),
    responses(
        (status = 200, description = "Stock adjustment result", body = ApiResponse<StockUpdateResult>),
        (status = 404, description = "No order line for this product"),
        (status = 502, description = "Channel gateway unreachable"),
    ),
    tag = "Order lines"
)]
pub async fn update_stock(
    State(state): State<AppState>,
    Path(merchant_product_no): Path<String>,
) -> AppResult<(StatusCode, Json<ApiResponse<StockUpdateResult>>)> {
    let (status, message, updated) =
        match order_line_service::update_product_stock(&state, &merchant_product_no).await {
            Ok(true) => (StatusCode::OK, "Stock updated successfully".to_string(), true),
            Ok(false) => (StatusCode::OK, "Failed to update stock".to_string(), false),
            Err(AppError::Connectivity(err)) => {
                tracing::warn!(error = %err, %merchant_product_no, "stock update failed");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Failed to update stock: {err}"),
                    false,
                )
            }
            Err(err) => return Err(err),
        };

    let data = StockUpdateResult {
        merchant_product_no,
        updated,
    };
    Ok((
        status,
        Json(ApiResponse::success(message, data, Some(Meta::empty()))),
    ))
}
