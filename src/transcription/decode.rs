//! Audio decoding for the Whisper engine.
//!
//! whisper.cpp consumes 16 kHz mono f32 samples. Whatever the input format,
//! ffmpeg resamples it into a temporary WAV which is then read with hound.

use crate::error::{MeetransError, Result};
use std::path::Path;
use std::process::Stdio;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::debug;

/// Decode an audio file into 16 kHz mono f32 samples.
pub async fn read_samples(audio_path: &Path) -> Result<Vec<f32>> {
    let temp_wav = NamedTempFile::with_suffix(".wav")?;

    debug!("Resampling {:?} for the engine", audio_path);

    let result = Command::new("ffmpeg")
        .arg("-i").arg(audio_path)
        .arg("-ar").arg("16000")
        .arg("-ac").arg("1")
        .arg("-c:a").arg("pcm_s16le")
        .arg("-y")
        .arg("-loglevel").arg("error")
        .arg(temp_wav.path())
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
            "ffmpeg failed to decode {:?}: {}",
            audio_path,
            stderr.trim()
        )));
    }

    let mut reader = hound::WavReader::open(temp_wav.path())?;
    let samples: std::result::Result<Vec<i16>, _> = reader.samples::<i16>().collect();
    let samples = samples?;

    let mut floats = vec![0.0f32; samples.len()];
    whisper_rs::convert_integer_to_float_audio(&samples, &mut floats)?;

    debug!("Decoded {} samples", floats.len());
    Ok(floats)
}
