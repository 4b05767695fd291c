use bytes::Bytes;
use std::path::Path;

use super::api::ProxyClient;
use crate::domain::tts::Voice;

/// Lifecycle of one generation cycle.
///
/// `Loading` is entered only from `Idle` or a terminal state, and always
/// resolves to exactly one of `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// An operation refused before any work started.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Text is required for speech generation.")]
    EmptyText,
    #[error("A generation is already in progress.")]
    GenerationInFlight,
    #[error("Unknown voice: {0}")]
    UnknownVoice(String),
    #[error("No audio to download. Please generate speech first!")]
    NoAudio,
    #[error("Failed to save audio: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory state for one client session.
///
/// Everything here is ephemeral: it lives only as long as the session and
/// is never persisted. The proxy holds no state at all, so the session is
/// the single owner of the entered text, the voice catalog, the current
/// selection, the error banner and the last generated clip.
pub struct Session {
    text: String,
    voices: Vec<Voice>,
    selected_voice: Option<String>,
    state: GenerationState,
    error: Option<String>,
    audio: Option<Bytes>,
}

impl Session {
    /// Fixed filename suggested when saving a generated clip.
    pub const DOWNLOAD_FILENAME: &'static str = "generated_speech.mp3";

    pub fn new() -> Self {
        Self {
            text: String::new(),
            voices: Vec::new(),
            selected_voice: None,
            state: GenerationState::Idle,
            error: None,
            audio: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn selected_voice(&self) -> Option<&str> {
        self.selected_voice.as_deref()
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn audio(&self) -> Option<&Bytes> {
        self.audio.as_ref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Startup sequence: fetch the voice catalog once.
    ///
    /// On success the catalog is stored and the first voice auto-selected.
    /// On failure the banner is set and catalog/selection stay empty.
    pub async fn load_voices(&mut self, client: &ProxyClient) {
        match client.list_voices().await {
            Ok(voices) => self.apply_catalog(voices),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn apply_catalog(&mut self, voices: Vec<Voice>) {
        self.selected_voice = voices.first().map(|voice| voice.voice_id.clone());
        self.voices = voices;
    }

    /// Select a voice by id. The id must name an entry of the loaded
    /// catalog.
    pub fn select_voice(&mut self, voice_id: &str) -> Result<(), SessionError> {
        if !self.voices.iter().any(|voice| voice.voice_id == voice_id) {
            return Err(SessionError::UnknownVoice(voice_id.to_string()));
        }
        self.selected_voice = Some(voice_id.to_string());
        Ok(())
    }

    /// Whether the generate trigger is currently enabled.
    pub fn can_generate(&self) -> bool {
        !self.text.is_empty() && self.state != GenerationState::Loading
    }

    /// Run one generation cycle with the current text and voice selection.
    ///
    /// Refused without a state change when the text is empty or a cycle is
    /// already in flight; otherwise ends in exactly one of `Ready` or
    /// `Failed`. A failure leaves the catalog and any previously generated
    /// clip intact.
    pub async fn generate(
        &mut self,
        client: &ProxyClient,
    ) -> Result<&GenerationState, SessionError> {
        self.begin()?;

        match client
            .generate_speech(&self.text, self.selected_voice.as_deref())
            .await
        {
            Ok(audio) => self.complete(audio),
            Err(e) => self.fail(e.to_string()),
        }

        Ok(&self.state)
    }

    fn begin(&mut self) -> Result<(), SessionError> {
        if self.state == GenerationState::Loading {
            return Err(SessionError::GenerationInFlight);
        }
        if self.text.is_empty() {
            return Err(SessionError::EmptyText);
        }
        self.state = GenerationState::Loading;
        self.error = None;
        Ok(())
    }

    fn complete(&mut self, audio: Bytes) {
        // Overwriting the handle releases the previous clip
        self.audio = Some(audio);
        self.state = GenerationState::Ready;
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.state = GenerationState::Failed;
    }

    /// Save the last generated clip to `path`.
    ///
    /// Refused with a blocking notice when no clip has been generated.
    pub fn save_audio(&self, path: &Path) -> Result<(), SessionError> {
        let audio = self.audio.as_ref().ok_or(SessionError::NoAudio)?;
        std::fs::write(path, audio)?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
