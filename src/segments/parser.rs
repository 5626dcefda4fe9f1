//! Segment list parsing.
//!
//! Reads CSV segment lists with the columns `Start (s)`, `End (s)`, `Label`.
//! Uses the `csv` crate for quoting and BOM handling.

use std::path::Path;

use serde::Deserialize;

use super::Segment;
use crate::error::{Error, Result};

/// Internal record for CSV deserialization.
#[derive(Debug, Deserialize)]
struct SegmentRecord {
    #[serde(rename = "Start (s)")]
    start: f64,
    #[serde(rename = "End (s)")]
    end: f64,
    #[serde(rename = "Label")]
    label: String,
}

/// Parse a segment list file.
///
/// Returns `Ok(vec![])` for an empty or header-only file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a row cannot be parsed, or a
/// row holds an invalid time window or a blank label.
pub fn parse_segment_file(path: &Path) -> Result<Vec<Segment>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::SegmentParseFailed {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut segments = Vec::new();

    for (line_num, result) in reader.deserialize::<SegmentRecord>().enumerate() {
        let line = line_num + 2;
        let record = result.map_err(|e| Error::InvalidSegmentFormat {
            message: format!("line {line}: {e}"),
        })?;

        let segment = Segment::new(record.label, record.start, record.end).map_err(|e| {
            Error::InvalidSegmentFormat {
                message: format!("line {line}: {e}"),
            }
        })?;

        segments.push(segment);
    }

    Ok(segments)
}
