use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;

use prompt_separator::application::services::SeparationEngine;
use prompt_separator::infrastructure::llm::SplitterFactory;
use prompt_separator::infrastructure::observability::{TracingConfig, init_tracing};
use prompt_separator::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment))
        .context("Failed to initialize tracing")?;
    tracing::debug!(llm = ?settings.llm, "Settings loaded");

    let splitter =
        SplitterFactory::from_settings(&settings.llm).context("Failed to build splitter")?;

    let state = AppState::new(
        SeparationEngine::new(settings.separation.policy()),
        splitter,
        settings.separation.batch_concurrency,
        settings.history.max_entries,
    );

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
