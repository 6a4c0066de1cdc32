use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quantity sold per (gtin, description) across all stored order lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct ProductSales {
    pub gtin: Option<String>,
    pub description: String,
    pub total_quantity_sold: i64,
}
