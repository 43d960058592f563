//! Error types for Meetrans.

use thiserror::Error;

/// Library-level error type for Meetrans operations.
#[derive(Error, Debug)]
pub enum MeetransError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Media conversion failed: {0}")]
    MediaConversion(String),

    #[error("Model download failed: {0}")]
    ModelDownload(String),

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Prompt file error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Whisper error: {0}")]
    Whisper(#[from] whisper_rs::WhisperError),

    #[error("WAV decode error: {0}")]
    Wav(#[from] hound::Error),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Meetrans operations.
pub type Result<T> = std::result::Result<T, MeetransError>;
