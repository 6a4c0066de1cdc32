use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::orders::IngestionSummary,
    error::AppResult,
    response::{ApiResponse, Meta},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/fetch-in-progress", post(fetch_in_progress))
}

#[utoipa::path(
    post,
    path = "/api/orders/fetch-in-progress",
    responses(
        (status = 200, description = "Orders fetched and stored", body = ApiResponse<IngestionSummary>),
        (status = 422, description = "An order record is missing a required field"),
        (status = 502, description = "Failed to fetch orders in progress"),
    ),
    tag = "Orders"
)]
pub async fn fetch_in_progress(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<IngestionSummary>>> {
    let orders = order_service::ingest_in_progress_orders(&state).await?;
    let summary = IngestionSummary::from_orders(&orders);
    let meta = Meta::count(summary.received_orders);
    Ok(Json(ApiResponse::success(
        "Fetched orders successfully.",
        summary,
        Some(meta),
    )))
}
