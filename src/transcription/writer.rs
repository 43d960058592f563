//! Segment formatting and transcript file writing.
//!
//! This is the terminal pipeline stage: it consumes the segment sequence
//! exactly once, in order, and fully rewrites the destination file.

use super::models::{format_timestamp, Segment};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write a transcript to `dest`, one line per segment.
///
/// The destination is truncated first; a pre-existing file is fully
/// replaced, and an empty segment sequence still produces an empty file.
/// With `timestamps` set, each line is `[hh:mm:ss -> hh:mm:ss] text`,
/// seconds truncated toward zero. Segment text is written exactly as
/// received, with no trimming or normalization.
pub fn write_transcript<I>(dest: &Path, segments: I, timestamps: bool) -> Result<usize>
where
    I: IntoIterator<Item = Segment>,
{
    let file = File::create(dest)?;
    let mut writer = BufWriter::new(file);
    let mut count = 0usize;

    for segment in segments {
        if timestamps {
            let start = format_timestamp(segment.start_seconds as u64);
            let end = format_timestamp(segment.end_seconds as u64);
            writeln!(writer, "[{} -> {}] {}", start, end, segment.text)?;
        } else {
            writeln!(writer, "{}", segment.text)?;
        }
        count += 1;
    }

    writer.flush()?;
    info!("Wrote {} segments to {:?}", count, dest);
    Ok(count)
}
