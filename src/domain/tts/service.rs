use async_trait::async_trait;
use std::sync::Arc;

use super::dto::Voice;
use super::error::TtsServiceError;
use super::DEFAULT_VOICE;
use crate::infrastructure::providers::{AudioStream, ProviderVoice, SpeechProvider};

pub struct TtsService {
    provider: Arc<dyn SpeechProvider>,
}

impl TtsService {
    pub fn new(provider: Arc<dyn SpeechProvider>) -> Self {
        Self { provider }
    }

    /// Normalize a provider voice into the shape served by the API.
    ///
    /// The provider's internal name becomes the selection key; gender and
    /// language fall back to "N/A" when the provider omits them.
    fn normalize(voice: ProviderVoice) -> Voice {
        Voice {
            voice_id: voice.name,
            name: voice.description,
            gender: voice.gender.unwrap_or_else(|| "N/A".to_string()),
            language: voice.language.unwrap_or_else(|| "N/A".to_string()),
            customizable: voice.customizable.unwrap_or(false),
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Fetch and normalize the provider's voice catalog, preserving
    /// provider order.
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsServiceError>;

    /// Synthesize speech for `text`.
    ///
    /// Falls back to [`DEFAULT_VOICE`] when `voice_id` is absent or empty.
    async fn synthesize(
        &self,
        text: &str,
        voice_id: Option<&str>,
    ) -> Result<AudioStream, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsServiceError> {
        let voices = self
            .provider
            .list_voices()
            .await
            .map_err(TtsServiceError::VoiceCatalog)?;

        tracing::info!(voice_count = voices.len(), "Voice catalog fetched");

        Ok(voices.into_iter().map(Self::normalize).collect())
    }

    async fn synthesize(
        &self,
        text: &str,
        voice_id: Option<&str>,
    ) -> Result<AudioStream, TtsServiceError> {
        let voice = match voice_id {
            Some(id) if !id.is_empty() => id,
            _ => DEFAULT_VOICE,
        };

        tracing::info!(
            voice = voice,
            text_length = text.len(),
            "Speech synthesis request"
        );

        self.provider
            .synthesize(text, voice)
            .await
            .map_err(TtsServiceError::Synthesis)
    }
}
