use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use serde::Deserialize;

use super::speech_provider::{AudioStream, ProviderVoice, SpeechProvider};

/// Basic-auth username expected by the Watson IAM gateway.
const BASIC_AUTH_USER: &str = "apikey";

/// IBM Watson Text to Speech implementation of [`SpeechProvider`].
///
/// Talks to the service's REST API directly: `GET /v1/voices` for the
/// catalog and `POST /v1/synthesize` for audio.
pub struct WatsonSpeechProvider {
    http: reqwest::Client,
    api_key: String,
    service_url: String,
}

#[derive(Debug, Deserialize)]
struct VoicesEnvelope {
    voices: Vec<WatsonVoice>,
}

#[derive(Debug, Deserialize)]
struct WatsonVoice {
    name: String,
    description: String,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    customizable: Option<bool>,
}

impl WatsonSpeechProvider {
    pub fn new(api_key: String, service_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            service_url: service_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read a non-success response into the error string surfaced to callers.
    async fn error_body(response: reqwest::Response) -> String {
        let status = response.status();
        match response.text().await {
            Ok(body) if !body.is_empty() => format!("{}: {}", status, body),
            _ => status.to_string(),
        }
    }
}

#[async_trait]
impl SpeechProvider for WatsonSpeechProvider {
    async fn list_voices(&self) -> Result<Vec<ProviderVoice>, String> {
        let url = format!("{}/v1/voices", self.service_url);

        let response = self
            .http
            .get(&url)
            .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        let envelope: VoicesEnvelope = response.json().await.map_err(|e| e.to_string())?;

        tracing::debug!(
            voice_count = envelope.voices.len(),
            "Watson voice catalog fetched"
        );

        Ok(envelope
            .voices
            .into_iter()
            .map(|voice| ProviderVoice {
                name: voice.name,
                description: voice.description,
                gender: voice.gender,
                language: voice.language,
                customizable: voice.customizable,
            })
            .collect())
    }

    async fn synthesize(&self, text: &str, voice: &str) -> Result<AudioStream, String> {
        let url = format!("{}/v1/synthesize", self.service_url);

        tracing::info!(
            voice = voice,
            text_length = text.len(),
            "Calling Watson synthesize"
        );

        let response = self
            .http
            .post(&url)
            .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
            .query(&[("voice", voice)])
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        // Pipe the provider's body through without buffering it whole.
        let stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));

        Ok(stream.boxed())
    }
}
