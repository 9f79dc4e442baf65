//! cinelog daemon
//!
//! Movie catalog JSON API using the axum HTTP server

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use cinelog::config::Config;
use cinelog::router::create_router;
use cinelog::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState::new(config));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(env = %state.config.env, %addr, "starting server");
    axum::serve(listener, create_router(state).into_make_service()).await?;

    Ok(())
}
