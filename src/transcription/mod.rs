//! Transcription module for Meetrans.
//!
//! Wraps a local whisper.cpp model behind the [`SpeechEngine`] trait and
//! provides segment formatting and transcript writing.

mod decode;
mod download;
mod models;
mod whisper;
mod writer;

pub use download::{ensure_model, ensure_vad_model};
pub use models::{format_timestamp, Segment};
pub use whisper::WhisperEngine;
pub use writer::write_transcript;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Target language for all transcriptions. Language detection is a non-goal.
pub const LANGUAGE: &str = "ja";

/// A lazy, single-pass, forward-only sequence of segments.
///
/// Consumers must not assume random access or repeated iteration.
pub type SegmentStream = Box<dyn Iterator<Item = Segment> + Send>;

/// Capability interface for speech-to-text engines.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Transcribe an audio file, optionally biased by a free-text prompt.
    ///
    /// Segments are yielded in engine order; ordering is not re-validated
    /// downstream.
    async fn transcribe(&self, audio_path: &Path, prompt: Option<&str>) -> Result<SegmentStream>;
}
