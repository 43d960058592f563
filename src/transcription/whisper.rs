//! Local whisper.cpp transcription implementation.

use super::{decode, download, SegmentStream, SpeechEngine, LANGUAGE};
use crate::config::{EngineSettings, ModelSize, Settings};
use crate::error::{MeetransError, Result};
use crate::transcription::models::Segment;
use async_trait::async_trait;
use std::ffi::c_int;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperVadParams};

/// Speech engine backed by a local whisper.cpp model.
///
/// Model weights are fetched into the configured cache directory on first
/// use. Language is fixed to Japanese and voice-activity filtering is
/// always enabled; silence suppression happens inside the engine, not here.
pub struct WhisperEngine {
    ctx: WhisperContext,
    vad_model_path: PathBuf,
    tuning: EngineSettings,
}

impl WhisperEngine {
    /// Load (downloading if necessary) the weights for `model` and build a context.
    pub async fn load(model: ModelSize, settings: &Settings) -> Result<Self> {
        let models_dir = settings.models_dir();

        let model_path =
            download::ensure_model(model, &models_dir, &settings.models.base_url).await?;
        let vad_model_path =
            download::ensure_vad_model(&models_dir, &settings.models.vad_model_url).await?;

        info!("Loading Whisper model '{}' from {:?}", model, model_path);

        let model_path_str = model_path
            .to_str()
            .ok_or_else(|| MeetransError::InvalidInput(format!("Invalid model path: {:?}", model_path)))?;

        let ctx = WhisperContext::new_with_params(model_path_str, WhisperContextParameters::default())?;

        Ok(Self {
            ctx,
            vad_model_path,
            tuning: settings.engine.clone(),
        })
    }

    fn build_params<'a>(&'a self, prompt: Option<&'a str>) -> Result<FullParams<'a, 'a>> {
        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: self.tuning.beam_size as c_int,
            patience: self.tuning.patience,
        });

        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_token_timestamps(false);
        params.set_temperature(self.tuning.temperature);
        params.set_language(Some(LANGUAGE));

        if let Some(prompt) = prompt {
            debug!("Using initial prompt of {} chars", prompt.chars().count());
            params.set_initial_prompt(prompt);
        }

        // Voice-activity filtering is always on.
        let mut vad_params = WhisperVadParams::new();
        vad_params.set_min_speech_duration(150);
        vad_params.set_min_silence_duration(200);
        vad_params.set_speech_pad(30);
        params.set_no_context(true);
        params.set_vad_params(vad_params);

        let vad_path = self.vad_model_path.to_str().ok_or_else(|| {
            MeetransError::InvalidInput(format!("Invalid VAD model path: {:?}", self.vad_model_path))
        })?;
        params.set_vad_model_path(Some(vad_path));
        params.enable_vad(true);

        Ok(params)
    }
}

#[async_trait]
impl SpeechEngine for WhisperEngine {
    #[instrument(skip(self, prompt), fields(audio_path = %audio_path.display()))]
    async fn transcribe(&self, audio_path: &Path, prompt: Option<&str>) -> Result<SegmentStream> {
        let samples = decode::read_samples(audio_path).await?;

        let params = self.build_params(prompt)?;

        let mut state = self.ctx.create_state()?;
        state.full(params, &samples)?;

        let num_segments = state.full_n_segments();
        if num_segments < 1 {
            warn!("Engine produced no segments");
            return Ok(Box::new(std::iter::empty()));
        }

        let mut segments = Vec::with_capacity(num_segments as usize);

        for segment in state.as_iter() {
            let text = segment
                .to_str_lossy()
                .map_err(|e| MeetransError::Transcription(format!("segment text: {e}")))?
                .to_string();
            // whisper.cpp timestamps are in 10 ms units
            let start_seconds = segment.start_timestamp() as f64 / 100.0;
            let end_seconds = segment.end_timestamp() as f64 / 100.0;

            segments.push(Segment::new(start_seconds, end_seconds, text));
        }

        debug!("Transcribed {} segments", segments.len());
        Ok(Box::new(segments.into_iter()))
    }
}
