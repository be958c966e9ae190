pub mod config;
pub mod openai;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::ProviderError;
use crate::transcript::RawTranscription;

pub use config::ProviderConfig;
pub use openai::OpenAiClient;

pub const MODEL: &str = "whisper-1";
pub const RESPONSE_FORMAT: &str = "verbose_json";
pub const TEMPERATURE: f32 = 0.0;
pub const LANGUAGE: &str = "en";
pub const PROMPT: &str = "This is an audiobook narration";

/// One transcription call. Everything except the audio path is fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRequest {
    pub audio_path: PathBuf,
    pub model: &'static str,
    pub response_format: &'static str,
    pub temperature: f32,
    pub language: &'static str,
    pub prompt: &'static str,
}

impl TranscriptionRequest {
    pub fn for_audiobook(audio_path: impl AsRef<Path>) -> Self {
        Self {
            audio_path: audio_path.as_ref().to_path_buf(),
            model: MODEL,
            response_format: RESPONSE_FORMAT,
            temperature: TEMPERATURE,
            language: LANGUAGE,
            prompt: PROMPT,
        }
    }
}

/// A speech-to-text backend returning verbose, segment-level responses.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<RawTranscription, ProviderError>;
}
