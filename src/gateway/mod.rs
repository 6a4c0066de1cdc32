//! HTTP client for the channel gateway. Nothing is retried.

pub mod types;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::ChannelConfig;

pub use types::{RawOrder, RawOrderLine, StockEntry, StockLocationUpdate, StockUpdate};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("channel gateway unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("channel gateway responded with status {0}")]
    Status(StatusCode),

    #[error("malformed gateway response: {0}")]
    MalformedEnvelope(String),
}

/// Status and decoded body of a gateway call. A body that is not JSON
/// decodes to `Value::Null`.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl GatewayResponse {
    async fn read(response: reqwest::Response) -> Result<Self, GatewayError> {
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        Ok(Self { status, body })
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The `Content` field of the envelope, treating an explicit `null` as absent.
    pub fn content(&self) -> Option<&Value> {
        self.body.get("Content").filter(|content| !content.is_null())
    }
}

#[derive(Debug, Clone)]
pub struct ChannelClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ChannelClient {
    pub fn new(config: &ChannelConfig) -> Result<Self, GatewayError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub async fn fetch_orders(&self, statuses: &str) -> Result<GatewayResponse, GatewayError> {
        tracing::debug!(statuses, "fetching orders from channel gateway");
        let response = self
            .http
            .get(format!("{}/v2/orders", self.base_url))
            .query(&[("apikey", self.api_key.as_str()), ("statuses", statuses)])
            .send()
            .await?;
        GatewayResponse::read(response).await
    }

    pub async fn fetch_stock(&self, stock_location_id: i32) -> Result<GatewayResponse, GatewayError> {
        tracing::debug!(stock_location_id, "fetching stock from channel gateway");
        let response = self
            .http
            .get(format!("{}/v2/offer/stock", self.base_url))
            .query(&[
                ("apikey", self.api_key.clone()),
                ("stockLocationIds", stock_location_id.to_string()),
            ])
            .send()
            .await?;
        GatewayResponse::read(response).await
    }

    /// Sets the absolute stock; `Ok(false)` when the gateway rejects it.
    pub async fn push_stock(
        &self,
        merchant_product_no: &str,
        stock_location_id: i32,
        stock: i64,
    ) -> Result<bool, GatewayError> {
        let body = [StockUpdate {
            merchant_product_no: merchant_product_no.to_string(),
            stock_locations: vec![StockLocationUpdate {
                stock,
                stock_location_id,
            }],
        }];

        let response = self
            .http
            .put(format!("{}/v2/offer/stock", self.base_url))
            .query(&[("apikey", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                %status,
                merchant_product_no,
                stock_location_id,
                "channel gateway rejected stock update"
            );
        }
        Ok(status.is_success())
    }
}
