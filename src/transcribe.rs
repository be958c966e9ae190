use log::info;
use std::path::Path;

use crate::audio::{size_in_megabytes, validate_audio_file};
use crate::error::TranscribeError;
use crate::provider::{TranscriptionProvider, TranscriptionRequest};
use crate::timer::ElapsedTimer;
use crate::transcript::RawTranscription;

/// Validates `audio_path` and submits it to `provider`.
///
/// Validation failures return before any request is made. Provider errors are
/// passed through as-is.
pub async fn transcribe(
    provider: &dyn TranscriptionProvider,
    audio_path: &Path,
) -> Result<RawTranscription, TranscribeError> {
    let size = validate_audio_file(audio_path)?;
    info!("File size: {:.2} MB", size_in_megabytes(size));
    info!("Starting transcription...");

    let request = TranscriptionRequest::for_audiobook(audio_path);

    let mut timer = ElapsedTimer::new();
    timer.start();
    let response = provider.transcribe(&request).await?;
    timer.stop();

    info!("Transcribed duration: {} seconds", response.duration());
    info!(
        "Number of segments: {}",
        response.segments().map_or(0, |segments| segments.len())
    );

    Ok(response)
}
