use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicerelay::controllers::tts::TtsController;
use voicerelay::domain::tts::TtsService;
use voicerelay::infrastructure::config::{Config, LogFormat};
use voicerelay::infrastructure::http::start_http_server;
use voicerelay::infrastructure::providers::WatsonSpeechProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; missing provider credentials abort startup here
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting voicerelay on {}:{}",
        config.host,
        config.port
    );

    // Create the Watson Text to Speech client
    let provider = Arc::new(WatsonSpeechProvider::new(
        config.tts_api_key.clone(),
        config.tts_service_url.clone(),
    ));
    tracing::info!(
        service_url = %config.tts_service_url,
        "Watson Text to Speech client initialized"
    );

    let config = Arc::new(config);

    // Instantiate service and controller
    let tts_service = Arc::new(TtsService::new(provider));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    // Start HTTP server with all routes
    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicerelay=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicerelay=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
