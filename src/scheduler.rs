use std::time::Duration;

use tokio::task::JoinHandle;

use crate::{services::order_service, state::AppState};

/// Run order ingestion every `period`, starting immediately. A failed run is
/// logged and the next tick tries again; nothing is retried in between.
pub fn spawn_order_sync(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(secs = period.as_secs(), "order sync task started");
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            match order_service::ingest_in_progress_orders(&state).await {
                Ok(orders) => tracing::info!(orders = orders.len(), "scheduled order sync finished"),
                Err(err) => tracing::error!(error = %err, "scheduled order sync failed"),
            }
        }
    })
}
