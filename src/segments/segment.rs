//! Labeled time windows.

use std::str::FromStr;

use crate::audio::TimeRange;
use crate::constants::segments::SPEC_SEPARATOR;
use crate::error::{Error, Result};

/// A labeled time window of the recording.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Label shown as the plot title.
    pub label: String,
    /// Time window in seconds.
    pub range: TimeRange,
}

impl Segment {
    /// Create a segment, validating the time window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for a malformed window and
    /// [`Error::InvalidSegmentFormat`] for a blank label.
    pub fn new(label: impl Into<String>, start_seconds: f64, end_seconds: f64) -> Result<Self> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(Error::InvalidSegmentFormat {
                message: format!("segment {start_seconds}-{end_seconds}s has an empty label"),
            });
        }

        let range = TimeRange::new(start_seconds, end_seconds);
        range.validate()?;

        Ok(Self { label, range })
    }
}

impl FromStr for Segment {
    type Err = Error;

    /// Parse `START:END:LABEL`, e.g. `165:227:Koel`. The label may itself
    /// contain the separator.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, SPEC_SEPARATOR);
        let (Some(start), Some(end), Some(label)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::InvalidSegmentFormat {
                message: format!("'{s}' is not START:END:LABEL"),
            });
        };

        Self::new(label, parse_seconds(start, s)?, parse_seconds(end, s)?)
    }
}

fn parse_seconds(value: &str, spec: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidSegmentFormat {
            message: format!("'{value}' in '{spec}' is not a number of seconds"),
        })
}
