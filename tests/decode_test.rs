//! Tests for decoding one channel of an audio file.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::path::Path;

use birdscope::Error;
use birdscope::audio::{decode_audio_file, probe_audio_file};
use hound::{SampleFormat, WavSpec, WavWriter};
use tempfile::TempDir;

/// Write a stereo 16-bit WAV where the left channel ramps up and the right
/// channel holds a constant.
fn write_stereo_wav(path: &Path, frames: usize, sample_rate: u32) {
    let spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for i in 0..frames {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let left = (i % 1_000) as i16;
        writer.write_sample(left).unwrap();
        writer.write_sample(-16_384_i16).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn test_decode_selects_left_channel() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stereo.wav");
    write_stereo_wav(&path, 8_000, 8_000);

    let buffer = decode_audio_file(&path, 0).unwrap();

    assert_eq!(buffer.sample_rate(), 8_000);
    assert_eq!(buffer.len(), 8_000);
    assert_eq!(buffer.samples()[0], 0.0);
    assert_eq!(buffer.samples()[10], 10.0 / 32_768.0);
}

#[test]
fn test_decode_selects_right_channel() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stereo.wav");
    write_stereo_wav(&path, 4_000, 8_000);

    let buffer = decode_audio_file(&path, 1).unwrap();

    assert_eq!(buffer.len(), 4_000);
    assert!(buffer.samples().iter().all(|&s| s == -0.5));
}

#[test]
fn test_decode_channel_out_of_range() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stereo.wav");
    write_stereo_wav(&path, 100, 8_000);

    let result = decode_audio_file(&path, 2);
    assert!(matches!(
        result,
        Err(Error::ChannelOutOfRange {
            channel: 2,
            available: 2,
            ..
        })
    ));
}

#[test]
fn test_decode_float_wav() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("float.wav");
    let spec = WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(&path, spec).unwrap();
    for sample in [0.25_f32, -0.75, 1.0] {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    let buffer = decode_audio_file(&path, 0).unwrap();
    assert_eq!(buffer.samples(), &[0.25, -0.75, 1.0]);
}

#[test]
fn test_decode_missing_file() {
    let result = decode_audio_file(Path::new("/nonexistent/recording.wav"), 0);
    assert!(matches!(result, Err(Error::AudioOpen { .. })));
}

#[test]
fn test_decode_garbage_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("noise.wav");
    std::fs::write(&path, b"definitely not a wav file").unwrap();

    assert!(decode_audio_file(&path, 0).is_err());
}

#[test]
fn test_probe_reports_stream_parameters() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stereo.wav");
    write_stereo_wav(&path, 16_000, 8_000);

    let info = probe_audio_file(&path).unwrap();

    assert_eq!(info.sample_rate, 8_000);
    assert_eq!(info.channels, 2);
    assert_eq!(info.frames, Some(16_000));
    assert_eq!(info.duration_secs, Some(2.0));
}
