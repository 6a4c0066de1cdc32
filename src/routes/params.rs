use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::services::order_line_service::DEFAULT_TOP_LIMIT;

const MAX_TOP_LIMIT: u64 = 100;

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopProductsQuery {
    /// Number of products to return, default 5.
    pub limit: Option<u64>,
}

impl TopProductsQuery {
    pub fn normalize(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_TOP_LIMIT).min(MAX_TOP_LIMIT)
    }
}
