use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Config;
use crate::core::discord_cdn::DiscordCdn;
use crate::server::router::build_router;
use crate::server::types::AppState;
use reqwest::Client;

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Initialize app state from the startup configuration
fn init_app_state(config: &Config) -> AppState {
    let http_client = Client::new();

    AppState {
        host: Arc::new(DiscordCdn::new(http_client, config.webhook_url.clone())),
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let state = Arc::new(init_app_state(&config));

    let router = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
