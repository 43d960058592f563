//! CLI module for Meetrans.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use crate::config::ModelSize;
use clap::Parser;
use std::path::PathBuf;

/// Meetrans - Meeting Transcription
///
/// Transcribes an audio or video file into Japanese text with a local
/// Whisper model. Video containers have their audio track extracted with
/// ffmpeg before transcription.
#[derive(Parser, Debug)]
#[command(name = "meetrans")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input audio or video file
    pub input: PathBuf,

    /// Destination text file (default: meetrans_output_<YYYYMMDD>.txt in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Whisper model to use
    #[arg(short, long, value_enum, default_value = "large-v3")]
    pub model: ModelSize,

    /// Path to a plain-text prompt/glossary file used as context bias
    #[arg(short, long)]
    pub prompt: Option<PathBuf>,

    /// Prefix each line with a [hh:mm:ss -> hh:mm:ss] time range
    #[arg(short, long)]
    pub timestamp: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
