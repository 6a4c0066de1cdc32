use serde_json::Value;

use crate::{
    error::AppResult,
    gateway::{GatewayError, StockEntry},
    state::AppState,
};

pub async fn get_product_stock(
    state: &AppState,
    merchant_product_no: &str,
    stock_location_id: i32,
) -> AppResult<i64> {
    let response = state.gateway.fetch_stock(stock_location_id).await?;

    if !response.is_success() {
        return Err(GatewayError::Status(response.status).into());
    }

    let entries = match response.content() {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(GatewayError::MalformedEnvelope("Content is not a list".into()).into());
        }
        None => {
            return Err(GatewayError::MalformedEnvelope("Content is missing".into()).into());
        }
    };

    let Some(entry) = entries.iter().find(|entry| {
        entry.get("MerchantProductNo").and_then(Value::as_str) == Some(merchant_product_no)
    }) else {
        return Ok(0);
    };

    let entry: StockEntry = serde_json::from_value(entry.clone())
        .map_err(|err| GatewayError::MalformedEnvelope(err.to_string()))?;
    Ok(entry.stock.unwrap_or(0))
}

/// Read-modify-write with no lock between the read and the write: two
/// adjustments of the same product and location racing each other lose one
/// delta. Callers that need both applied must serialize them per
/// (product, location).
pub async fn adjust_stock(
    state: &AppState,
    merchant_product_no: &str,
    stock_location_id: i32,
    delta: i32,
) -> AppResult<bool> {
    let current = get_product_stock(state, merchant_product_no, stock_location_id).await?;
    let new_stock = current + i64::from(delta);

    let accepted = state
        .gateway
        .push_stock(merchant_product_no, stock_location_id, new_stock)
        .await?;

    tracing::info!(
        merchant_product_no,
        stock_location_id,
        current,
        delta,
        new_stock,
        accepted,
        "stock adjusted"
    );
    Ok(accepted)
}
