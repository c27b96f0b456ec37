use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use plafond_server::api::create_router;
use plafond_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Systeemplafond Rekenmachine API listening on http://{}", addr);

    axum::serve(listener, create_router()).await?;

    Ok(())
}
