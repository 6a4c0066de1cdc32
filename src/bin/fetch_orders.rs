use std::process::ExitCode;

use channel_order_sync::{
    config::AppConfig, db::run_migrations, services::order_service, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,channel_order_sync=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config).await?;
    run_migrations(&state.orm).await?;

    match order_service::ingest_in_progress_orders(&state).await {
        Ok(_) => {
            println!("Fetched orders successfully.");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
