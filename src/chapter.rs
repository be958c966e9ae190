use log::info;
use std::path::Path;

use crate::error::TranscribeError;
use crate::paths::{ChapterPaths, DEFAULT_AUDIO_ROOT};
use crate::provider::TranscriptionProvider;
use crate::transcribe::transcribe;
use crate::transcript::clean;

pub async fn transcribe_chapter(
    provider: &dyn TranscriptionProvider,
    book: &str,
    chapter: &str,
) -> Result<(), TranscribeError> {
    transcribe_chapter_in(provider, DEFAULT_AUDIO_ROOT, book, chapter).await
}

/// Transcribes `<root>/<book>/<chapter>/<chapter>.mp3` and writes the raw and
/// cleaned transcripts next to it. A raw file already written stays on disk if
/// a later step fails.
pub async fn transcribe_chapter_in(
    provider: &dyn TranscriptionProvider,
    root: impl AsRef<Path>,
    book: &str,
    chapter: &str,
) -> Result<(), TranscribeError> {
    let paths = ChapterPaths::with_root(root, book, chapter);

    let file_name = paths
        .audio
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!("Processing: {file_name}");
    info!("Book: {book}");
    info!("Chapter: {chapter}");

    let response = transcribe(provider, &paths.audio).await?;

    tokio::fs::write(&paths.raw_response, response.body()).await?;
    info!("Raw response saved to: {}", paths.raw_response.display());

    let transcript = clean(&response);
    let json = serde_json::to_string_pretty(&transcript)?;
    tokio::fs::write(&paths.transcript, json).await?;
    info!("Cleaned transcript saved to: {}", paths.transcript.display());

    Ok(())
}
