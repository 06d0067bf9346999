//! HTTP server binary for the Tax Calculation Engine.
//!
//! Serves the calculation endpoint on the address given by the
//! `TAX_ENGINE_ADDR` environment variable (default `127.0.0.1:8080`).

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tax_engine::api::{AppState, create_router};
use tax_engine::error::{EngineError, EngineResult};
use tax_engine::tables::TaxTables;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> EngineResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let value = std::env::var("TAX_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = value
        .parse()
        .map_err(|source| EngineError::InvalidListenAddr {
            value: value.clone(),
            source,
        })?;

    let state = AppState::new(TaxTables::bundled());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Tax calculation engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
