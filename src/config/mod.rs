//! Configuration module for Meetrans.
//!
//! Handles the optional settings file and the per-invocation run configuration.

mod run;
mod settings;

pub use run::{default_output_path, ModelSize, RunConfig};
pub use settings::{EngineSettings, GeneralSettings, ModelSettings, Settings};
