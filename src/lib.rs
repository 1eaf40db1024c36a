pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::{DisplayError, Result};
pub use event::{DisplayColor, Event};

/// Build the HTTP router that hosts the display transforms.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(api::handlers::handle_health))
        .route("/api/v1/config", get(api::handlers::handle_get_config))

        // Widget transforms
        .route("/api/v1/display/v1", post(api::handlers::handle_v1_transform))
        .route("/api/v1/display/v1/decode", post(api::handlers::handle_v1_decode))
        .route("/api/v1/display/v1/render", post(api::handlers::handle_v1_render))
        .route("/api/v1/display/v2", post(api::handlers::handle_v2_render))

        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
