use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

/// Encoded audio as produced by the provider: a finite, non-restartable
/// byte stream, consumed once while piping into the HTTP response.
pub type AudioStream = BoxStream<'static, Result<Bytes, std::io::Error>>;

/// A voice as the remote provider reports it, before normalization.
#[derive(Debug, Clone)]
pub struct ProviderVoice {
    pub name: String,
    pub description: String,
    pub gender: Option<String>,
    pub language: Option<String>,
    pub customizable: Option<bool>,
}

/// Client for the remote speech-synthesis service.
/// Abstracts the concrete provider (IBM Watson, etc.) so the proxy can be
/// tested against a substitute returning canned catalogs, streams and
/// errors.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Fetch the provider's voice catalog, in provider order.
    async fn list_voices(&self) -> Result<Vec<ProviderVoice>, String>;

    /// Synthesize `text` with the given provider voice.
    ///
    /// Returns an MPEG audio byte stream.
    async fn synthesize(&self, text: &str, voice: &str) -> Result<AudioStream, String>;
}
