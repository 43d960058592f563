//! Per-invocation run configuration.
//!
//! Resolved once from CLI arguments at startup and read-only afterwards.

use clap::ValueEnum;
use std::path::PathBuf;

/// Whisper model size selector.
///
/// Controls the accuracy/latency/resource trade-off; the choice is passed
/// through to the engine unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    #[value(name = "large-v3")]
    LargeV3,
}

impl ModelSize {
    /// Canonical name as used in GGML model file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::LargeV3 => "large-v3",
        }
    }
}

impl std::fmt::Display for ModelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The resolved inputs for one transcription run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the input audio or video file.
    pub input: PathBuf,
    /// Destination path for the transcript.
    pub output: PathBuf,
    /// Selected model size.
    pub model: ModelSize,
    /// Whether to prefix each line with a start/end time range.
    pub timestamp: bool,
    /// Optional path to a prompt/glossary file.
    pub prompt: Option<PathBuf>,
}

/// Default output path: `meetrans_output_<YYYYMMDD>.txt` in the current directory.
pub fn default_output_path() -> PathBuf {
    let today = chrono::Local::now().format("%Y%m%d");
    PathBuf::from(format!("meetrans_output_{}.txt", today))
}
