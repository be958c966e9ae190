use clap::Parser;
use std::path::PathBuf;

use crate::paths::DEFAULT_AUDIO_ROOT;

#[derive(Parser, Debug)]
#[command(
    name = "chapter-transcribe",
    about = "Transcribe an audiobook chapter with the OpenAI speech-to-text API",
    long_about = "Reads <audio-root>/<BOOK>/<CHAPTER>/<CHAPTER>.mp3, sends it for transcription and writes transcript.res.json and transcript.json next to it.",
    after_help = "EXAMPLES:\n    # Transcribe audiobooks/Dune/Ch01/Ch01.mp3\n    chapter-transcribe Dune Ch01\n\n    # Use a different audio root\n    chapter-transcribe Dune Ch01 --audio-root /mnt/books\n\nENVIRONMENT:\n    OPENAI_API_KEY     API key (also read from .env)\n    OPENAI_BASE_URL    API base URL [default: https://api.openai.com/v1]\n    RUST_LOG           Log filter [default: info]"
)]
pub struct Cli {
    pub book: String,

    pub chapter: String,

    #[arg(long, default_value = DEFAULT_AUDIO_ROOT)]
    pub audio_root: PathBuf,
}
