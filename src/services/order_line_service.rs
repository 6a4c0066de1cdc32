use crate::{
    error::{AppError, AppResult},
    models::ProductSales,
    repository::order_line_repository,
    services::stock_service,
    state::AppState,
};

pub const DEFAULT_TOP_LIMIT: u64 = 5;

pub async fn top_selling_products(state: &AppState, limit: u64) -> AppResult<Vec<ProductSales>> {
    let products = order_line_repository::top_selling_products(&state.orm, limit).await?;
    Ok(products)
}

pub async fn update_product_stock(state: &AppState, merchant_product_no: &str) -> AppResult<bool> {
    let line = order_line_repository::find_by_merchant_product_no(&state.orm, merchant_product_no)
        .await?
        .ok_or(AppError::NotFound)?;

    stock_service::adjust_stock(
        state,
        &line.merchant_product_no,
        line.stock_location_id,
        state.stock_adjustment,
    )
    .await
}
