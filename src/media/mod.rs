//! Input classification and media normalization.
//!
//! Video containers are converted to an audio-only sibling file before
//! transcription; everything else is passed through unchanged.

mod ffmpeg;

pub use ffmpeg::FfmpegExtractor;

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Video container extensions that trigger audio extraction.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "mov", "avi"];

/// Check if path is a recognized video container (case-insensitive).
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Capability for extracting the audio track from a video container.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Extract the best audio stream from `input` into a sibling audio file,
    /// returning the path to the new file. Any pre-existing file at that
    /// path is overwritten silently.
    async fn extract_audio(&self, input: &Path) -> Result<PathBuf>;
}

/// Normalize an input path to something the transcription engine can consume.
///
/// Video files go through `extractor`; audio files and unrecognized
/// extensions pass through unchanged and may fail later inside the engine.
pub async fn normalize_input(input: &Path, extractor: &dyn AudioExtractor) -> Result<PathBuf> {
    if is_video_file(input) {
        debug!("Input {:?} is a video container, extracting audio", input);
        extractor.extract_audio(input).await
    } else {
        debug!("Input {:?} passed through as audio", input);
        Ok(input.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeetransError;

    struct StubExtractor;

    #[async_trait]
    impl AudioExtractor for StubExtractor {
        async fn extract_audio(&self, input: &Path) -> Result<PathBuf> {
            Ok(input.with_extension("wav"))
        }
    }

    struct FailingExtractor;

    #[async_trait]
    impl AudioExtractor for FailingExtractor {
        async fn extract_audio(&self, _input: &Path) -> Result<PathBuf> {
            Err(MeetransError::MediaConversion("boom".to_string()))
        }
    }

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file(Path::new("meeting.mp4")));
        assert!(is_video_file(Path::new("meeting.MKV")));
        assert!(is_video_file(Path::new("/path/to/meeting.mov")));
        assert!(is_video_file(Path::new("meeting.Avi")));
        assert!(!is_video_file(Path::new("meeting.mp3")));
        assert!(!is_video_file(Path::new("meeting.webm")));
        assert!(!is_video_file(Path::new("meeting")));
    }

    #[tokio::test]
    async fn test_video_input_is_extracted() {
        let path = normalize_input(Path::new("/tmp/meeting.mp4"), &StubExtractor)
            .await
            .unwrap();
        assert_eq!(path, Path::new("/tmp/meeting.wav"));
    }

    #[tokio::test]
    async fn test_audio_input_passes_through() {
        let path = normalize_input(Path::new("/tmp/meeting.m4a"), &StubExtractor)
            .await
            .unwrap();
        assert_eq!(path, Path::new("/tmp/meeting.m4a"));
    }

    #[tokio::test]
    async fn test_unknown_extension_passes_through() {
        let path = normalize_input(Path::new("/tmp/meeting.xyz"), &FailingExtractor)
            .await
            .unwrap();
        assert_eq!(path, Path::new("/tmp/meeting.xyz"));
    }

    #[tokio::test]
    async fn test_extraction_failure_propagates() {
        let err = normalize_input(Path::new("/tmp/meeting.mp4"), &FailingExtractor)
            .await
            .unwrap_err();
        assert!(matches!(err, MeetransError::MediaConversion(_)));
    }
}
