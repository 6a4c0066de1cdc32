use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    gateway::RawOrder,
    repository::{
        order_line_repository::{self, OrderLineRecord},
        order_repository,
    },
    state::AppState,
};

pub const IN_PROGRESS: &str = "IN_PROGRESS";

const FETCH_FAILED: &str = "Failed to fetch orders in progress";

pub async fn ingest_in_progress_orders(state: &AppState) -> AppResult<Vec<RawOrder>> {
    let response = match state.gateway.fetch_orders(IN_PROGRESS).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "order fetch failed");
            return Err(AppError::Ingestion(FETCH_FAILED.into()));
        }
    };

    if !response.is_success() {
        tracing::warn!(status = %response.status, "order fetch returned non-success status");
        return Err(AppError::Ingestion(FETCH_FAILED.into()));
    }

    let records = match response.content() {
        Some(Value::Array(records)) if !records.is_empty() => records,
        Some(Value::Array(_)) => {
            tracing::warn!("order fetch returned no orders");
            return Err(AppError::Ingestion(FETCH_FAILED.into()));
        }
        Some(_) => {
            tracing::warn!("order fetch returned a non-array Content");
            return Err(AppError::Ingestion(FETCH_FAILED.into()));
        }
        None => {
            tracing::warn!("order fetch response has no Content");
            return Err(AppError::Ingestion(FETCH_FAILED.into()));
        }
    };

    let mut orders = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let raw: RawOrder = serde_json::from_value(record.clone())
            .map_err(|err| AppError::Constraint(format!("order #{index}: {err}")))?;
        apply_order(state, &raw).await?;
        orders.push(raw);
    }

    tracing::info!(orders = orders.len(), "ingested in-progress orders");
    Ok(orders)
}

async fn apply_order(state: &AppState, raw: &RawOrder) -> AppResult<()> {
    let order =
        order_repository::upsert_order(&state.orm, &raw.channel_order_no, &raw.status).await?;

    for line in &raw.lines {
        order_line_repository::upsert_order_line(&state.orm, order.id, OrderLineRecord::from(line))
            .await?;
    }

    tracing::debug!(
        channel_order_no = %raw.channel_order_no,
        status = %raw.status,
        lines = raw.lines.len(),
        "order upserted"
    );
    Ok(())
}
