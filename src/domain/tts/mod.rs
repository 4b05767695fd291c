pub mod dto;
pub mod error;
pub mod service;

pub use dto::{SpeechRequest, Voice};
pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi};

/// Voice used when a synthesis request names none.
pub const DEFAULT_VOICE: &str = "en-US_AllisonV3Voice";
