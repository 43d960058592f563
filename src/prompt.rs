//! Prompt file loading.
//!
//! The prompt is an opaque UTF-8 string passed verbatim to the engine as
//! contextual bias. No internal structure is imposed, even when the file
//! reads like a glossary.

use crate::error::{MeetransError, Result};
use std::path::Path;
use tracing::info;

/// Read the entire prompt file as one string.
///
/// Missing files, permission problems, and invalid UTF-8 are all fatal; the
/// caller is expected to abort before any transcription work starts.
pub fn load_prompt(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| MeetransError::Prompt(format!("cannot read {:?}: {}", path, e)))?;

    info!("Loaded prompt from {:?} ({} chars)", path, text.chars().count());
    Ok(text)
}
