//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::segments::Segment;

/// Parse and validate a `START:END:LABEL` segment.
pub fn parse_segment(s: &str) -> Result<Segment, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment_valid() {
        let segment = parse_segment("230:282:BulBul").unwrap();
        assert_eq!(segment.label, "BulBul");
        assert_eq!(segment.range.start_seconds, 230.0);
        assert_eq!(segment.range.end_seconds, 282.0);
    }

    #[test]
    fn test_parse_segment_reports_reason() {
        let err = parse_segment("348:290:Lapwing").unwrap_err();
        assert!(err.contains("invalid time range"));

        let err = parse_segment("Lapwing").unwrap_err();
        assert!(err.contains("START:END:LABEL"));
    }

    #[test]
    fn test_parse_segment_negative_start() {
        assert!(parse_segment("-1:2:Koel").is_err());
    }
}
