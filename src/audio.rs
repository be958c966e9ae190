use log::debug;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{TranscribeError, ValidationError};

/// Formats accepted by the transcription endpoint.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "flac", "m4a", "mp3", "mp4", "mpeg", "mpga", "oga", "ogg", "wav", "webm",
];

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

pub fn is_supported_extension(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

pub fn mime_type(path: &Path) -> &'static str {
    match extension_of(path).as_deref() {
        Some("flac") => "audio/flac",
        Some("m4a") => "audio/mp4",
        Some("mp4") => "audio/mp4",
        Some("mp3") | Some("mpeg") | Some("mpga") => "audio/mpeg",
        Some("oga") | Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

/// Checks that `path` is an existing regular file with a supported extension
/// and returns its size in bytes.
pub fn validate_audio_file(path: &Path) -> Result<u64, TranscribeError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ValidationError::NotFound(path.to_path_buf()).into());
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_file() {
        return Err(ValidationError::NotAFile(path.to_path_buf()).into());
    }
    if !is_supported_extension(path) {
        return Err(ValidationError::UnsupportedFormat(path.to_path_buf()).into());
    }

    debug!("Validated audio file {} ({} bytes)", path.display(), metadata.len());
    Ok(metadata.len())
}

pub fn size_in_megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_ignores_case() {
        assert!(is_supported_extension(Path::new("a/b/Ch1.MP3")));
        assert!(is_supported_extension(Path::new("take.wav")));
        assert!(!is_supported_extension(Path::new("notes.txt")));
        assert!(!is_supported_extension(Path::new("no_extension")));
    }

    #[test]
    fn missing_file_is_a_validation_error() {
        let err = validate_audio_file(Path::new("does/not/exist.mp3")).unwrap_err();
        assert!(matches!(
            err,
            TranscribeError::Validation(ValidationError::NotFound(_))
        ));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = validate_audio_file(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            TranscribeError::Validation(ValidationError::NotAFile(_))
        ));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chapter.txt");
        std::fs::write(&path, b"not audio").unwrap();
        let err = validate_audio_file(&path).unwrap_err();
        assert!(matches!(
            err,
            TranscribeError::Validation(ValidationError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn reports_size_of_valid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chapter.mp3");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();
        assert_eq!(validate_audio_file(&path).unwrap(), 2048);
    }

    #[test]
    fn megabytes_use_binary_units() {
        assert_eq!(format!("{:.2}", size_in_megabytes(3 * 1024 * 1024 / 2)), "1.50");
        assert_eq!(mime_type(Path::new("x.mp3")), "audio/mpeg");
    }
}
