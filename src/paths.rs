use std::path::{Path, PathBuf};

pub const DEFAULT_AUDIO_ROOT: &str = "audiobooks";
pub const AUDIO_EXTENSION: &str = "mp3";
pub const RAW_RESPONSE_FILE: &str = "transcript.res.json";
pub const TRANSCRIPT_FILE: &str = "transcript.json";

/// Locations of a chapter's audio and its two transcript outputs.
///
/// Identifiers are joined as given; a bad book or chapter only shows up later
/// as a missing audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterPaths {
    pub audio: PathBuf,
    pub raw_response: PathBuf,
    pub transcript: PathBuf,
}

impl ChapterPaths {
    pub fn new(book: &str, chapter: &str) -> Self {
        Self::with_root(DEFAULT_AUDIO_ROOT, book, chapter)
    }

    pub fn with_root(root: impl AsRef<Path>, book: &str, chapter: &str) -> Self {
        let chapter_dir = root.as_ref().join(book).join(chapter);
        Self {
            audio: chapter_dir.join(format!("{chapter}.{AUDIO_EXTENSION}")),
            raw_response: chapter_dir.join(RAW_RESPONSE_FILE),
            transcript: chapter_dir.join(TRANSCRIPT_FILE),
        }
    }
}
