use bytes::Bytes;

use crate::domain::tts::{SpeechRequest, Voice};
use crate::error::ErrorResponse;

/// HTTP client for the proxy's two operations.
#[derive(Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Error message reported by the proxy's JSON error body.
    #[error("{0}")]
    Api(String),
    /// Non-success response whose body carried no usable error message.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The proxy could not be reached at all.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /api/voices
    pub async fn list_voices(&self) -> Result<Vec<Voice>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/voices", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(response.json().await?)
    }

    /// POST /api/generate-speech, returning the raw MPEG bytes.
    pub async fn generate_speech(
        &self,
        text: &str,
        voice_id: Option<&str>,
    ) -> Result<Bytes, ClientError> {
        let request = SpeechRequest {
            text: text.to_string(),
            voice_id: voice_id.map(str::to_string),
        };

        let response = self
            .http
            .post(format!("{}/api/generate-speech", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(response.bytes().await?)
    }

    /// Map a non-success response to the server's error message, falling
    /// back to a status-based message when the body is not the expected
    /// JSON shape.
    async fn error_from_response(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        match response.json::<ErrorResponse>().await {
            Ok(body) => ClientError::Api(body.error),
            Err(_) => ClientError::Status(status),
        }
    }
}
