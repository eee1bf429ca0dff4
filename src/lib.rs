pub mod cache;
pub mod cli;
pub mod clock;
pub mod config;
pub mod fetch;
pub mod geo;
pub mod i18n;
pub mod images;
pub mod library;
pub mod render;
pub mod server;
pub mod sky;
pub mod story;
pub mod tale;

use anyhow::{Context as _, Result};
use cli::CliArgs;
use config::AppConfig;
use server::{AppState, Server};
use tale::TaleComposer;

pub async fn run(args: CliArgs) -> Result<()> {
    let config = if let Some(path) = args.config.as_deref() {
        AppConfig::load_with_path(Some(path))?
    } else {
        AppConfig::load()?
    };
    validate_config(&config);

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let composer = TaleComposer::new(client, &config);
    let state = AppState::new(composer);
    let server = Server::new(state);

    let shutdown = server.shutdown_token();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {err}");
            return;
        }
        tracing::info!("Shutting down");
        shutdown.cancel();
    });

    server.bind(args.bind).await
}

fn validate_config(config: &AppConfig) {
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set! Add it to environment or .env file");
        tracing::warn!("Some features may not work without proper configuration.");
    } else {
        tracing::info!("Configuration validated successfully!");
    }
}
