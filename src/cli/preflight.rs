//! Pre-flight checks before expensive operations.
//!
//! Validates that required external tools are available before starting
//! work that would otherwise fail midway.

use crate::error::{MeetransError, Result};
use std::process::Command;

/// Verify everything a transcription run needs.
///
/// ffmpeg is required for both video audio extraction and the engine's
/// decode step, so it is checked regardless of input type.
pub fn check() -> Result<()> {
    check_tool("ffmpeg")
}

/// Check if an external tool is available.
fn check_tool(name: &str) -> Result<()> {
    // ffmpeg uses -version (single dash)
    let version_arg = match name {
        "ffmpeg" | "ffprobe" => "-version",
        _ => "--version",
    };
    match Command::new(name).arg(version_arg).output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(_) => Err(MeetransError::ToolNotFound(format!(
            "{} is installed but not working correctly",
            name
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(MeetransError::ToolNotFound(name.to_string()))
        }
        Err(e) => Err(MeetransError::ToolNotFound(format!("{}: {}", name, e))),
    }
}
