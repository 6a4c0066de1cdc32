use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    db::create_orm_conn,
    gateway::ChannelClient,
};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub gateway: ChannelClient,
    /// Delta applied by the stock update endpoint.
    pub stock_adjustment: i32,
}

impl AppState {
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let orm = create_orm_conn(&config.database_url).await?;
        let gateway = ChannelClient::new(&config.channel)?;
        Ok(Self {
            orm,
            gateway,
            stock_adjustment: config.stock_adjustment,
        })
    }
}
