use alarm_display::{app, config::Config, state::AppState};
use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alarm_display=debug".parse()?),
        )
        .init();

    tracing::info!("Starting Alarm Display Server");

    // Override via ALARM_DISPLAY_CONFIG env var if needed
    let config = Config::load_with_fallback("alarm_display");
    let bind = config.server.bind.clone();
    tracing::info!(
        "Display language: {:?}, timezone: {}",
        config.display.language,
        config.display.timezone
    );

    let router = app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind to {}", bind))?;

    tracing::info!("Server listening on http://{}", bind);
    tracing::info!("V1 widget: POST /api/v1/display/v1");
    tracing::info!("V2 widget: POST /api/v1/display/v2");
    tracing::info!("Health check: GET /health");

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
