use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        order_lines::{ProductSalesList, StockUpdateResult},
        orders::IngestionSummary,
    },
    models::ProductSales,
    response::{ApiResponse, Meta},
    routes::{health, order_lines, orders, params},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "channel-order-sync",
        description = "Order ingestion, sales aggregation and stock reconciliation for a channel gateway"
    ),
    paths(
        health::health_check,
        order_lines::list_top_products,
        order_lines::update_stock,
        orders::fetch_in_progress,
    ),
    components(
        schemas(
            ProductSales,
            ProductSalesList,
            StockUpdateResult,
            IngestionSummary,
            params::TopProductsQuery,
            health::HealthData,
            Meta,
            ApiResponse<ProductSalesList>,
            ApiResponse<StockUpdateResult>,
            ApiResponse<IngestionSummary>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Order lines", description = "Sales aggregation and stock updates"),
        (name = "Orders", description = "Order ingestion"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
