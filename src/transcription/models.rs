//! Data models for transcription.

/// A single timed unit of recognized speech.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Start time in seconds.
    pub start_seconds: f64,
    /// End time in seconds.
    pub end_seconds: f64,
    /// Transcribed text, exactly as produced by the engine.
    pub text: String,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start_seconds: f64, end_seconds: f64, text: impl Into<String>) -> Self {
        Self {
            start_seconds,
            end_seconds,
            text: text.into(),
        }
    }
}

/// Format a whole-second count as `hh:mm:ss`.
///
/// Minutes and seconds are always in [0, 59] and zero-padded to width 2.
/// The hours field is zero-padded to width 2 but unbounded above, so
/// durations of 100 hours and more still format.
pub fn format_timestamp(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_basic() {
        assert_eq!(format_timestamp(0), "00:00:00");
        assert_eq!(format_timestamp(59), "00:00:59");
        assert_eq!(format_timestamp(60), "00:01:00");
        assert_eq!(format_timestamp(3661), "01:01:01");
    }

    #[test]
    fn test_format_timestamp_hours_unbounded() {
        assert_eq!(format_timestamp(360_000), "100:00:00");
        assert_eq!(format_timestamp(360_000 + 61), "100:01:01");
    }

    #[test]
    fn test_format_timestamp_round_trips() {
        for s in [0u64, 1, 59, 60, 61, 3599, 3600, 86_399, 86_400, 359_999, 500_000] {
            let formatted = format_timestamp(s);
            let fields: Vec<u64> = formatted.split(':').map(|f| f.parse().unwrap()).collect();
            assert_eq!(fields.len(), 3);
            assert!(fields[1] < 60);
            assert!(fields[2] < 60);
            assert_eq!(fields[0] * 3600 + fields[1] * 60 + fields[2], s);
        }
    }

    #[test]
    fn test_segment_construction() {
        let segment = Segment::new(0.0, 1.5, "こんにちは");
        assert_eq!(segment.start_seconds, 0.0);
        assert_eq!(segment.end_seconds, 1.5);
        assert_eq!(segment.text, "こんにちは");
    }
}
