use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{SpeechRequest, TtsService, TtsServiceApi, Voice},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// GET /api/voices - List available synthesis voices
    pub async fn list_voices(
        State(controller): State<Arc<TtsController>>,
    ) -> AppResult<Json<Vec<Voice>>> {
        let voices = controller.tts_service.list_voices().await?;
        Ok(Json(voices))
    }

    /// POST /api/generate-speech - Convert text to speech
    ///
    /// Streams the provider's MPEG bytes through unmodified, with download
    /// headers attached.
    pub async fn generate_speech(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<SpeechRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        // Validate input before touching the provider
        if request.text.is_empty() {
            return Err(AppError::BadRequest(
                "Text is required for speech generation.".to_string(),
            ));
        }

        let stream = controller
            .tts_service
            .synthesize(&request.text, request.voice_id.as_deref())
            .await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"speech.mp3\"".parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from_stream(stream)))
    }
}
