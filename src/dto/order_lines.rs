use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ProductSales;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductSalesList {
    pub items: Vec<ProductSales>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockUpdateResult {
    pub merchant_product_no: String,
    pub updated: bool,
}
