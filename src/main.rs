//! BRCMA API server.

use std::error::Error;

use tracing_subscriber::EnvFilter;

use brcma::adapters::http::{build_router, AnalysisAppState};
use brcma::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.server);

    let addr = config.server.socket_addr()?;
    let state = AnalysisAppState::new(config.analysis.thresholds());
    let app = build_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        strong = state.defaults.strong,
        weak = state.defaults.weak,
        minimal = state.defaults.minimal,
        "BRCMA API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl+c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
