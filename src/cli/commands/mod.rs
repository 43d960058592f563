//! CLI command implementations.

mod transcribe;

pub use transcribe::run_transcribe;
