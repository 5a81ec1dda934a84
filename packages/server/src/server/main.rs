// Main entry point for API server

use anyhow::{Context, Result};
use landing_core::{kernel::ServerDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,landing_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Landing Page Scoring API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    if config.heuristic_only() {
        tracing::info!(
            use_mock = config.use_mock,
            has_api_key = config.openai_api_key.is_some(),
            "LLM scoring disabled, using heuristic scoring"
        );
    } else {
        tracing::info!(
            model = %config.openai_model,
            timeout_secs = config.llm_timeout.as_secs(),
            "LLM scoring enabled"
        );
    }

    // Build application
    let deps = ServerDeps::from_config(&config);
    let app = build_app(deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("UI: http://localhost:{}/", config.port);
    tracing::info!("Health check: http://localhost:{}/healthz", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
