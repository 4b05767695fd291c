use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use std::sync::Mutex;

use voicerelay::infrastructure::providers::{AudioStream, ProviderVoice, SpeechProvider};

/// Arguments of one recorded synthesize call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizeCall {
    pub text: String,
    pub voice: String,
}

/// Canned [`SpeechProvider`] for the e2e suite: fixed catalog, fixed
/// audio, optional failures, and call recording.
pub struct MockSpeechProvider {
    voices: Vec<ProviderVoice>,
    audio: Vec<u8>,
    fail_voices: Option<String>,
    fail_synthesize: Option<String>,
    calls: Mutex<Vec<SynthesizeCall>>,
}

impl MockSpeechProvider {
    pub fn new() -> Self {
        Self {
            voices: default_voices(),
            audio: mock_audio_bytes(),
            fail_voices: None,
            fail_synthesize: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_audio(mut self, audio: Vec<u8>) -> Self {
        self.audio = audio;
        self
    }

    pub fn failing_voices(mut self, message: &str) -> Self {
        self.fail_voices = Some(message.to_string());
        self
    }

    pub fn failing_synthesize(mut self, message: &str) -> Self {
        self.fail_synthesize = Some(message.to_string());
        self
    }

    pub fn recorded_calls(&self) -> Vec<SynthesizeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechProvider for MockSpeechProvider {
    async fn list_voices(&self) -> Result<Vec<ProviderVoice>, String> {
        if let Some(message) = &self.fail_voices {
            return Err(message.clone());
        }
        Ok(self.voices.clone())
    }

    async fn synthesize(&self, text: &str, voice: &str) -> Result<AudioStream, String> {
        self.calls.lock().unwrap().push(SynthesizeCall {
            text: text.to_string(),
            voice: voice.to_string(),
        });

        if let Some(message) = &self.fail_synthesize {
            return Err(message.clone());
        }

        // Deliver the clip in two chunks so the proxy's streaming path is
        // actually exercised.
        let split = self.audio.len() / 2;
        let chunks = vec![
            Ok(Bytes::copy_from_slice(&self.audio[..split])),
            Ok(Bytes::copy_from_slice(&self.audio[split..])),
        ];
        Ok(futures::stream::iter(chunks).boxed())
    }
}

/// Minimal valid MP3 frame (silence), enough for byte-equality assertions.
pub fn mock_audio_bytes() -> Vec<u8> {
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        0x00, 0x00, 0x00, 0x00, // Some padding
    ]
}

pub fn default_voices() -> Vec<ProviderVoice> {
    vec![
        ProviderVoice {
            name: "en-US_AllisonV3Voice".to_string(),
            description: "Allison: American English female voice.".to_string(),
            gender: Some("female".to_string()),
            language: Some("en-US".to_string()),
            customizable: Some(true),
        },
        ProviderVoice {
            name: "en-GB_JamesV3Voice".to_string(),
            description: "James: British English male voice.".to_string(),
            gender: None,
            language: None,
            customizable: None,
        },
    ]
}
