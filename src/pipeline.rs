//! Pipeline orchestrator for Meetrans.
//!
//! Coordinates one transcription run: media normalization, prompt loading,
//! engine invocation, and transcript writing. Strictly sequential; data
//! flows forward only.

use crate::config::{RunConfig, Settings};
use crate::error::Result;
use crate::media::{normalize_input, AudioExtractor, FfmpegExtractor};
use crate::prompt::load_prompt;
use crate::transcription::{write_transcript, SpeechEngine, WhisperEngine};
use std::sync::Arc;
use tracing::{info, instrument};

/// The main pipeline for one Meetrans invocation.
pub struct Pipeline {
    extractor: Arc<dyn AudioExtractor>,
    engine: Arc<dyn SpeechEngine>,
}

impl Pipeline {
    /// Create a pipeline with the production collaborators: ffmpeg for
    /// extraction and a local Whisper model for transcription.
    pub async fn new(config: &RunConfig, settings: &Settings) -> Result<Self> {
        let engine = WhisperEngine::load(config.model, settings).await?;

        Ok(Self {
            extractor: Arc::new(FfmpegExtractor::new()),
            engine: Arc::new(engine),
        })
    }

    /// Create a pipeline with custom collaborators.
    pub fn with_components(
        extractor: Arc<dyn AudioExtractor>,
        engine: Arc<dyn SpeechEngine>,
    ) -> Self {
        Self { extractor, engine }
    }

    /// Run one transcription pass, returning the number of segments written.
    ///
    /// A prompt-file failure aborts before the output file is touched; the
    /// extracted-audio byproduct of video inputs is left on disk.
    #[instrument(skip(self, config), fields(input = %config.input.display()))]
    pub async fn run(&self, config: &RunConfig) -> Result<usize> {
        let audio_path = normalize_input(&config.input, self.extractor.as_ref()).await?;

        let prompt = match &config.prompt {
            Some(path) => Some(load_prompt(path)?),
            None => None,
        };

        info!(
            "Transcribing {:?} with model '{}'",
            audio_path, config.model
        );
        let segments = self.engine.transcribe(&audio_path, prompt.as_deref()).await?;

        let count = write_transcript(&config.output, segments, config.timestamp)?;
        info!("Transcript written to {:?}", config.output);

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelSize;
    use crate::error::MeetransError;
    use crate::transcription::{Segment, SegmentStream};
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};

    struct StubExtractor;

    #[async_trait]
    impl AudioExtractor for StubExtractor {
        async fn extract_audio(&self, input: &Path) -> Result<PathBuf> {
            Ok(input.with_extension("wav"))
        }
    }

    struct CannedEngine {
        segments: Vec<Segment>,
    }

    #[async_trait]
    impl SpeechEngine for CannedEngine {
        async fn transcribe(
            &self,
            _audio_path: &Path,
            _prompt: Option<&str>,
        ) -> Result<SegmentStream> {
            Ok(Box::new(self.segments.clone().into_iter()))
        }
    }

    struct FailingEngine;

    #[async_trait]
    impl SpeechEngine for FailingEngine {
        async fn transcribe(
            &self,
            _audio_path: &Path,
            _prompt: Option<&str>,
        ) -> Result<SegmentStream> {
            Err(MeetransError::Transcription("engine exploded".to_string()))
        }
    }

    fn canned_pipeline() -> Pipeline {
        Pipeline::with_components(
            Arc::new(StubExtractor),
            Arc::new(CannedEngine {
                segments: vec![
                    Segment::new(0.0, 1.5, "こんにちは"),
                    Segment::new(1.5, 3.2, "さようなら"),
                ],
            }),
        )
    }

    fn run_config(dir: &Path, prompt: Option<PathBuf>, timestamp: bool) -> RunConfig {
        RunConfig {
            input: dir.join("meeting.m4a"),
            output: dir.join("out.txt"),
            model: ModelSize::Tiny,
            timestamp,
            prompt,
        }
    }

    #[tokio::test]
    async fn test_run_writes_plain_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let config = run_config(dir.path(), None, false);

        let count = canned_pipeline().run(&config).await.unwrap();

        assert_eq!(count, 2);
        let content = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(content, "こんにちは\nさようなら\n");
    }

    #[tokio::test]
    async fn test_run_writes_timestamped_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let config = run_config(dir.path(), None, true);

        canned_pipeline().run(&config).await.unwrap();

        let content = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(
            content,
            "[00:00:00 -> 00:00:01] こんにちは\n[00:00:01 -> 00:00:03] さようなら\n"
        );
    }

    #[tokio::test]
    async fn test_unreadable_prompt_aborts_before_output_write() {
        let dir = tempfile::tempdir().unwrap();
        let config = run_config(dir.path(), Some(dir.path().join("missing.txt")), false);

        let err = canned_pipeline().run(&config).await.unwrap_err();

        assert!(matches!(err, MeetransError::Prompt(_)));
        assert!(!config.output.exists());
    }

    #[tokio::test]
    async fn test_prompt_is_passed_to_engine() {
        use std::sync::Mutex;

        struct RecordingEngine {
            seen: Mutex<Option<String>>,
        }

        #[async_trait]
        impl SpeechEngine for RecordingEngine {
            async fn transcribe(
                &self,
                _audio_path: &Path,
                prompt: Option<&str>,
            ) -> Result<SegmentStream> {
                *self.seen.lock().unwrap() = prompt.map(|p| p.to_string());
                Ok(Box::new(std::iter::empty()))
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let prompt_path = dir.path().join("terms.txt");
        std::fs::write(&prompt_path, "議事録 アジェンダ").unwrap();

        let engine = Arc::new(RecordingEngine {
            seen: Mutex::new(None),
        });
        let pipeline = Pipeline::with_components(Arc::new(StubExtractor), engine.clone());

        let config = run_config(dir.path(), Some(prompt_path), false);
        pipeline.run(&config).await.unwrap();

        assert_eq!(
            engine.seen.lock().unwrap().as_deref(),
            Some("議事録 アジェンダ")
        );
        // An empty stream still produces an empty output file.
        assert_eq!(std::fs::read_to_string(&config.output).unwrap(), "");
    }

    #[tokio::test]
    async fn test_engine_failure_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = run_config(dir.path(), None, false);
        let pipeline = Pipeline::with_components(Arc::new(StubExtractor), Arc::new(FailingEngine));

        let err = pipeline.run(&config).await.unwrap_err();

        assert!(matches!(err, MeetransError::Transcription(_)));
        assert!(!config.output.exists());
    }
}
