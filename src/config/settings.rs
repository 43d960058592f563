//! Configuration settings for Meetrans.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub models: ModelSettings,
    pub engine: EngineSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Model cache and download settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Directory where model weights are cached.
    pub dir: String,
    /// Base URL for Whisper GGML model downloads.
    pub base_url: String,
    /// URL of the Silero VAD model used for voice-activity filtering.
    pub vad_model_url: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            dir: "./models".to_string(),
            base_url: "https://huggingface.co/ggerganov/whisper.cpp/resolve/main".to_string(),
            vad_model_url:
                "https://huggingface.co/ggml-org/whisper-vad/resolve/main/ggml-silero-v5.1.2.bin"
                    .to_string(),
        }
    }
}

/// Decoding parameters delegated to the transcription engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Beam size for beam-search decoding.
    pub beam_size: u32,
    /// Beam-search patience factor.
    pub patience: f32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            beam_size: 5,
            patience: 1.0,
            temperature: 0.0,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or the default location if None.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("meetrans")
            .join("config.toml")
    }

    /// Get the model cache directory path.
    pub fn models_dir(&self) -> PathBuf {
        PathBuf::from(&self.models.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.general.log_level, "info");
        assert_eq!(settings.models.dir, "./models");
        assert_eq!(settings.engine.beam_size, 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("[models]\ndir = \"/var/cache/meetrans\"\n").unwrap();
        assert_eq!(settings.models.dir, "/var/cache/meetrans");
        assert_eq!(settings.general.log_level, "info");
        assert!((settings.engine.patience - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load_from(Some(&PathBuf::from("/nonexistent/meetrans.toml"))).unwrap();
        assert_eq!(settings.models.dir, "./models");
    }
}
