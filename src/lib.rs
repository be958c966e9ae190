pub mod audio;
pub mod chapter;
pub mod cli;
pub mod error;
pub mod paths;
pub mod provider;
pub mod timer;
pub mod transcribe;
pub mod transcript;

pub use chapter::{transcribe_chapter, transcribe_chapter_in};
pub use error::{ProviderError, TranscribeError, ValidationError};
pub use paths::ChapterPaths;
pub use provider::{OpenAiClient, ProviderConfig, TranscriptionProvider, TranscriptionRequest};
pub use transcribe::transcribe;
pub use transcript::{RawTranscription, Transcript, clean};
