use axum::extract::{Json, State};
use chrono::Local;

use crate::{
    api::models::*,
    display::{v1, v2},
    error::Result,
    event::Event,
    state::AppState,
};

/// Decode the V1 payload into `data`
pub async fn handle_v1_decode(Json(mut event): Json<Event>) -> Result<Json<Event>> {
    tracing::debug!("V1 decode request: {:?}", event.payload);
    v1::decode_payload(&mut event)?;
    Ok(Json(event))
}

/// Render already decoded V1 data
pub async fn handle_v1_render(
    State(state): State<AppState>,
    Json(mut event): Json<Event>,
) -> Result<Json<Event>> {
    v1::render(&mut event, &state.config.display.timezone)?;
    Ok(Json(event))
}

/// Decode and render in one call
pub async fn handle_v1_transform(
    State(state): State<AppState>,
    Json(mut event): Json<Event>,
) -> Result<Json<Event>> {
    tracing::debug!("V1 transform request: {:?}", event.payload);
    if let Err(e) = v1::transform(&mut event, &state.config.display.timezone) {
        tracing::warn!("V1 transform failed: {}", e);
        return Err(e);
    }
    Ok(Json(event))
}

/// Render the V2 status widget
pub async fn handle_v2_render(
    State(state): State<AppState>,
    Json(mut event): Json<Event>,
) -> Result<Json<Event>> {
    if let Err(e) = v2::render(&mut event, &state.config.messages()) {
        tracing::warn!("V2 render failed: {}", e);
        return Err(e);
    }
    Ok(Json(event))
}

/// Get current display configuration
pub async fn handle_get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let display = &state.config.display;

    Json(ConfigResponse {
        language: display.language,
        timezone: display.timezone,
        timestamp: Local::now().to_rfc3339(),
    })
}

/// Health check endpoint
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_ms: state.started_at.elapsed().as_millis() as u64,
    })
}
