//! Meetrans - Meeting Transcription
//!
//! A local-first CLI tool for transcribing meeting recordings (audio or
//! video) into Japanese text with a local Whisper model.
//!
//! # Overview
//!
//! One invocation runs three stages in strict sequence:
//!
//! 1. Media normalization: video containers have their audio track
//!    extracted with ffmpeg; audio files pass through unchanged.
//! 2. Transcription: a whisper.cpp model (downloaded and cached on first
//!    use) transcribes the audio with voice-activity filtering, optionally
//!    biased by a free-text prompt/glossary.
//! 3. Writing: each segment becomes one line in a UTF-8 text file, with an
//!    optional `[hh:mm:ss -> hh:mm:ss]` prefix.
//!
//! # Architecture
//!
//! - `config` - Settings file and per-run configuration
//! - `media` - Input classification and audio extraction
//! - `transcription` - Speech engine, model cache, segment writing
//! - `prompt` - Prompt/glossary file loading
//! - `pipeline` - Stage coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use meetrans::config::{ModelSize, RunConfig, Settings};
//! use meetrans::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let config = RunConfig {
//!         input: "meeting.mp4".into(),
//!         output: "meeting.txt".into(),
//!         model: ModelSize::LargeV3,
//!         timestamp: true,
//!         prompt: None,
//!     };
//!
//!     let pipeline = Pipeline::new(&config, &settings).await?;
//!     let segments = pipeline.run(&config).await?;
//!     println!("Wrote {} segments", segments);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod pipeline;
pub mod prompt;
pub mod transcription;

pub use error::{MeetransError, Result};
