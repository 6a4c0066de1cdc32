use std::env;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub channel: ChannelConfig,
    /// Fixed delta applied by the stock update endpoint.
    pub stock_adjustment: i32,
    /// Interval of the background ingestion task; `None` disables it.
    pub order_sync_interval: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let stock_adjustment = env::var("STOCK_ADJUSTMENT_QUANTITY")
            .ok()
            .and_then(|q| q.parse::<i32>().ok())
            .unwrap_or(25);
        let order_sync_interval = env::var("ORDER_SYNC_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Ok(Self {
            port,
            database_url,
            host,
            channel: ChannelConfig::from_env()?,
            stock_adjustment,
            order_sync_interval,
        })
    }
}

impl ChannelConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = env::var("CHANNEL_API_URL").context("CHANNEL_API_URL must be set")?;
        let api_key = env::var("CHANNEL_API_KEY").context("CHANNEL_API_KEY must be set")?;
        let timeout = env::var("CHANNEL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);
        Ok(Self {
            api_url,
            api_key,
            timeout: Duration::from_secs(timeout),
        })
    }
}
