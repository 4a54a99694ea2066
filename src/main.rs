use anyhow::Context;
use application::InventoryApp;
use config::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "stockroom=info,api_server=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("🚀 Starting Stockroom inventory API");

    // Missing or malformed settings abort startup.
    let config = Config::from_env(None).context("invalid configuration")?;
    config.log_summary();

    let app = Arc::new(
        InventoryApp::new(&config)
            .await
            .context("failed to initialize the store")?,
    );

    api_server::serve(app.clone(), &config.api_address(), shutdown_signal()).await?;

    app.shutdown().await;
    info!("👋 Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("🛑 Shutdown signal received");
}
