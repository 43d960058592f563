//! Model weight download and caching.
//!
//! GGML Whisper weights and the Silero VAD model are fetched on first use
//! and cached under a local models directory. Cached files are reused
//! without re-downloading.

use crate::config::ModelSize;
use crate::error::{MeetransError, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Ensure the GGML weights for `model` are present, downloading if needed.
pub async fn ensure_model(model: ModelSize, models_dir: &Path, base_url: &str) -> Result<PathBuf> {
    let file_name = format!("ggml-{}.bin", model.as_str());
    let url = format!("{}/{}", base_url.trim_end_matches('/'), file_name);
    ensure_file(models_dir, &file_name, &url).await
}

/// Ensure the Silero VAD model is present, downloading if needed.
pub async fn ensure_vad_model(models_dir: &Path, url: &str) -> Result<PathBuf> {
    let file_name = url
        .rsplit('/')
        .next()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| MeetransError::Config(format!("Invalid VAD model URL: {}", url)))?;
    ensure_file(models_dir, file_name, url).await
}

async fn ensure_file(models_dir: &Path, file_name: &str, url: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(models_dir)?;

    let target_path = models_dir.join(file_name);
    if target_path.exists() {
        debug!("Using cached model file {:?}", target_path);
        return Ok(target_path);
    }

    info!("Downloading {} from {}", file_name, url);
    download_to(url, &target_path).await?;

    Ok(target_path)
}

/// Download `url` to `dest`, streaming through a `.part` file so an
/// interrupted download never leaves a truncated model behind.
async fn download_to(url: &str, dest: &Path) -> Result<()> {
    let response = reqwest::get(url).await?;

    if !response.status().is_success() {
        return Err(MeetransError::ModelDownload(format!(
            "{} returned HTTP {}",
            url,
            response.status()
        )));
    }

    let total = response.content_length().unwrap_or(0);
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {spinner:.green} {msg} [{bar:30.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(
        dest.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    );

    let part_path = dest.with_extension("part");
    let mut file = tokio::fs::File::create(&part_path).await?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        pb.inc(chunk.len() as u64);
    }

    file.flush().await?;
    drop(file);
    pb.finish_and_clear();

    tokio::fs::rename(&part_path, dest).await?;
    info!("Saved model to {:?}", dest);

    Ok(())
}
