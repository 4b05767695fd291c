use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    /// Provider failure while fetching the voice catalog.
    #[error("Failed to fetch voices: {0}")]
    VoiceCatalog(String),
    /// Provider failure while synthesizing speech.
    #[error("Error generating speech: {0}")]
    Synthesis(String),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        AppError::ExternalService(err.to_string())
    }
}
