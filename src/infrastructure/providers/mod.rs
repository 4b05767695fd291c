pub mod speech_provider;
pub mod watson;

pub use speech_provider::{AudioStream, ProviderVoice, SpeechProvider};
pub use watson::WatsonSpeechProvider;
