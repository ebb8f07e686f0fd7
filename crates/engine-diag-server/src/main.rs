use std::sync::Arc;

use anyhow::Result;
use engine_diag_config::{ServerConfig, SERVICE_DESCRIPTION, SERVICE_NAME, SERVICE_VERSION};
use engine_diag_server::{build_router, ServerState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_filter))?,
        )
        .compact()
        .init();

    info!("{} v{} - {}", SERVICE_NAME, SERVICE_VERSION, SERVICE_DESCRIPTION);

    let addr = config.bind_addr()?;
    let state = Arc::new(ServerState::with_mock_analyzer(config));
    let app = build_router(state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
