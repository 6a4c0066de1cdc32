use serde::Serialize;
use utoipa::ToSchema;

use crate::gateway::RawOrder;

/// Orders and lines received from the gateway in one ingestion run. Lines
/// sharing an order, description and gtin are stored as a single row, so
/// `received_lines` can exceed the rows written.
#[derive(Debug, Serialize, ToSchema)]
pub struct IngestionSummary {
    pub received_orders: usize,
    pub received_lines: usize,
}

impl IngestionSummary {
    pub fn from_orders(orders: &[RawOrder]) -> Self {
        Self {
            received_orders: orders.len(),
            received_lines: orders.iter().map(|order| order.lines.len()).sum(),
        }
    }
}
