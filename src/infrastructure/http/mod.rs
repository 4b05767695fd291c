use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod request_id;

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;
use request_id::request_id_middleware;

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let api_routes = Router::new()
        .route("/api/voices", get(TtsController::list_voices))
        .route(
            "/api/generate-speech",
            post(TtsController::generate_speech),
        )
        .with_state(tts_controller);

    // Build application routes
    let app = Router::new()
        .route("/health", get(health::health))
        .merge(api_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS layer restricted to the configured origin allow-list,
/// GET and POST only.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
