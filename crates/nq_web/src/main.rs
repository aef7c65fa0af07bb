use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use nq_client::NewsClient;
use nq_core::Config;
use nq_web::{create_app, AppState};

const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        warn!("NEWS_API_KEY is not set; /api/news will report a configuration error");
    }

    let backend = Arc::new(NewsClient::new()?);
    let state = AppState { config, backend };

    let addr = std::env::var("NQ_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("🌐 listening on {}", addr);

    axum::serve(listener, create_app(state)).await?;
    Ok(())
}
