//! ffmpeg-backed audio extraction.

use super::AudioExtractor;
use crate::error::{MeetransError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Extracts audio from video containers by shelling out to ffmpeg.
///
/// The extracted file is written next to the input, sharing its base name,
/// as 16 kHz mono PCM WAV (the sample format the transcription engine
/// consumes directly).
pub struct FfmpegExtractor;

impl FfmpegExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioExtractor for FfmpegExtractor {
    async fn extract_audio(&self, input: &Path) -> Result<PathBuf> {
        let dest = input.with_extension("wav");

        info!("Extracting audio from {:?} to {:?}", input, dest);

        let result = Command::new("ffmpeg")
            .arg("-i").arg(input)
            .arg("-vn")
            .arg("-ar").arg("16000")
            .arg("-ac").arg("1")
            .arg("-c:a").arg("pcm_s16le")
            .arg("-y")
            .arg("-loglevel").arg("error")
            .arg(&dest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match result {
            Ok(o) => o,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MeetransError::ToolNotFound("ffmpeg".into()));
            }
            Err(e) => {
                return Err(MeetransError::MediaConversion(format!(
                    "ffmpeg execution failed: {e}"
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MeetransError::MediaConversion(format!(
                "ffmpeg failed: {}",
                stderr.trim()
            )));
        }

        debug!("Audio extraction complete");
        Ok(dest)
    }
}
