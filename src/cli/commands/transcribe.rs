//! Transcribe command implementation.

use crate::cli::{preflight, Cli, Output};
use crate::config::{default_output_path, RunConfig, Settings};
use crate::pipeline::Pipeline;
use anyhow::Result;

/// Run one transcription pass from parsed CLI arguments.
pub async fn run_transcribe(cli: Cli, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check() {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    if !cli.input.exists() {
        let err = crate::error::MeetransError::InvalidInput(format!(
            "Input file not found: {}",
            cli.input.display()
        ));
        Output::error(&format!("{}", err));
        return Err(err.into());
    }

    let config = RunConfig {
        input: cli.input,
        output: cli.output.unwrap_or_else(default_output_path),
        model: cli.model,
        timestamp: cli.timestamp,
        prompt: cli.prompt,
    };

    Output::info(&format!(
        "Transcribing {} with model '{}'",
        config.input.display(),
        config.model
    ));

    let pipeline = Pipeline::new(&config, &settings).await?;

    let spinner = Output::spinner("Transcribing...");
    let result = pipeline.run(&config).await;
    spinner.finish_and_clear();

    match result {
        Ok(count) => {
            Output::success(&format!(
                "Wrote {} segments to {}",
                count,
                config.output.display()
            ));
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Transcription failed: {}", e));
            Err(e.into())
        }
    }
}
