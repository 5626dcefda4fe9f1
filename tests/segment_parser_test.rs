//! Tests for segment list parsing.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::io::Write;

use birdscope::Error;
use birdscope::segments::parse_segment_file;
use tempfile::NamedTempFile;

const HEADER: &str = "Start (s),End (s),Label";

#[test]
fn test_parse_simple_list() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "165,227,Koel").unwrap();
    writeln!(file, "230,282,BulBul").unwrap();
    writeln!(file, "290, 348 , Lapwing").unwrap();
    file.flush().unwrap();

    let segments = parse_segment_file(file.path()).unwrap();

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].label, "Koel");
    assert_eq!(segments[0].range.start_seconds, 165.0);
    assert_eq!(segments[2].label, "Lapwing");
    assert_eq!(segments[2].range.end_seconds, 348.0);
}

#[test]
fn test_parse_quoted_label() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "165,348,\"Koel, BulBul, Lapwing\"").unwrap();
    file.flush().unwrap();

    let segments = parse_segment_file(file.path()).unwrap();
    assert_eq!(segments[0].label, "Koel, BulBul, Lapwing");
}

#[test]
fn test_parse_with_bom() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\xEF\xBB\xBF").unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "1.5,2.5,Koel").unwrap();
    file.flush().unwrap();

    let segments = parse_segment_file(file.path()).unwrap();
    assert_eq!(segments.len(), 1);
}

#[test]
fn test_header_only_returns_empty_vec() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    file.flush().unwrap();

    assert!(parse_segment_file(file.path()).unwrap().is_empty());
}

#[test]
fn test_reversed_row_names_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "1,2,Koel").unwrap();
    writeln!(file, "9,3,BulBul").unwrap();
    file.flush().unwrap();

    let result = parse_segment_file(file.path());
    assert!(
        matches!(result, Err(Error::InvalidSegmentFormat { ref message }) if message.starts_with("line 3"))
    );
}

#[test]
fn test_non_numeric_time_is_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "soon,2,Koel").unwrap();
    file.flush().unwrap();

    assert!(matches!(
        parse_segment_file(file.path()),
        Err(Error::InvalidSegmentFormat { .. })
    ));
}

#[test]
fn test_missing_file_is_error() {
    let result = parse_segment_file(std::path::Path::new("/nonexistent/segments.csv"));
    assert!(matches!(result, Err(Error::SegmentParseFailed { .. })));
}
