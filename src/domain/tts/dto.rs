use serde::{Deserialize, Serialize};

/// Normalized view of a provider voice, as served by GET /api/voices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Voice {
    /// Provider's internal voice name; the selection key for synthesis.
    pub voice_id: String,
    /// Human-readable display name (the provider's description).
    pub name: String,
    pub gender: String,
    pub language: String,
    pub customizable: bool,
}

/// Request for POST /api/generate-speech
///
/// An absent `text` field deserializes to an empty string and is rejected
/// by validation rather than by the JSON layer, so the client always sees
/// the same error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
}
