use std::sync::Arc;

use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;
use utoipa_axum::router::OpenApiRouter;

pub mod client;
pub mod generation;
pub mod models;
pub mod routes;
mod utils;

use models::{
    config::{QuillConfig, ServerConfig},
    state::QuillState,
};

/// Install the global tracing subscriber. Call once from the binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Load configuration and build the shared server state.
pub fn init() -> Result<(ServerConfig, QuillState), Box<dyn std::error::Error>> {
    // A config file is optional. Without one, everything comes from
    // environment variables (and a `.env` file if present).
    let config = match dotenvy::var("QUILL_CONFIG_PATH") {
        Ok(config_path) => QuillConfig::from_path(config_path)?,
        Err(_) => QuillConfig::from_env()?,
    };
    let QuillConfig { server, generation } = config;

    let model_client = client::ModelClient::new(generation)?;
    let state = QuillState::new(Arc::new(model_client));
    Ok((server, state))
}

/// All API routes with their OpenAPI docs, without CORS or tracing layers.
pub fn router(state: QuillState) -> OpenApiRouter {
    OpenApiRouter::new()
        .nest("/api/generate", routes::generate::router(state))
        .merge(routes::health::router())
}

/// Cross-origin policy allowing the editor's origin to call the API with
/// credentials.
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(&config.allowed_origin)?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
