//! Audio decoding using symphonia.

use std::fs::File;
use std::path::Path;

use serde::Serialize;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{CODEC_TYPE_NULL, CodecParameters, DecoderOptions};
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

use super::AudioBuffer;
use crate::constants::pcm;
use crate::error::{Error, Result};

/// Stream parameters of an audio file.
#[derive(Debug, Clone, Serialize)]
pub struct AudioInfo {
    /// Codec short name, if known.
    pub codec: Option<String>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: usize,
    /// Total frames, if the container reports it.
    pub frames: Option<u64>,
    /// Duration in seconds, if the frame count is known.
    pub duration_secs: Option<f64>,
}

/// Decode one channel of an audio file into an [`AudioBuffer`].
///
/// Supports WAV, FLAC, MP3, and AAC. `channel` is a 0-based index; integer
/// PCM is normalized to `[-1.0, 1.0]`.
pub fn decode_audio_file(path: &Path, channel: usize) -> Result<AudioBuffer> {
    let mut format = open_format(path)?;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::AudioDecode {
            path: path.to_path_buf(),
            source: "missing sample rate".into(),
        })?;

    if let Some(channels) = track.codec_params.channels {
        check_channel(path, channel, channels.count())?;
    }

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut samples = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                warn!("Skipping corrupt packet in {}: {e}", path.display());
                continue;
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        check_channel(path, channel, decoded.spec().channels.count())?;
        append_channel(&decoded, channel, &mut samples);
    }

    debug!(
        "Decoded {} samples at {sample_rate} Hz from channel {channel} of {}",
        samples.len(),
        path.display()
    );

    AudioBuffer::new(samples, sample_rate)
}

/// Read stream parameters of an audio file without decoding it.
pub fn probe_audio_file(path: &Path) -> Result<AudioInfo> {
    let format = open_format(path)?;

    let params: &CodecParameters = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .map(|t| &t.codec_params)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let sample_rate = params.sample_rate.ok_or_else(|| Error::AudioDecode {
        path: path.to_path_buf(),
        source: "missing sample rate".into(),
    })?;

    let codec = symphonia::default::get_codecs()
        .get_codec(params.codec)
        .map(|descriptor| descriptor.short_name.to_string());

    #[allow(clippy::cast_precision_loss)]
    let duration_secs = params
        .n_frames
        .map(|frames| frames as f64 / f64::from(sample_rate));

    Ok(AudioInfo {
        codec,
        sample_rate,
        channels: params
            .channels
            .map_or(1, symphonia::core::audio::Channels::count),
        frames: params.n_frames,
        duration_secs,
    })
}

fn open_format(path: &Path) -> Result<Box<dyn FormatReader>> {
    let file = File::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::AudioOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    Ok(probed.format)
}

fn check_channel(path: &Path, channel: usize, available: usize) -> Result<()> {
    if channel >= available {
        return Err(Error::ChannelOutOfRange {
            path: path.to_path_buf(),
            channel,
            available,
        });
    }
    Ok(())
}

/// Append one channel of a decoded packet to `output` as f32.
fn append_channel(buffer: &AudioBufferRef, channel: usize, output: &mut Vec<f32>) {
    match buffer {
        AudioBufferRef::F32(buf) => output.extend_from_slice(buf.chan(channel)),
        #[allow(clippy::cast_possible_truncation)]
        AudioBufferRef::F64(buf) => output.extend(buf.chan(channel).iter().map(|&s| s as f32)),
        AudioBufferRef::U8(buf) => output.extend(
            buf.chan(channel)
                .iter()
                .map(|&s| (f32::from(s) - pcm::U8_MID) / pcm::U8_MID),
        ),
        AudioBufferRef::S16(buf) => output.extend(
            buf.chan(channel)
                .iter()
                .map(|&s| f32::from(s) / pcm::I16_NORM),
        ),
        #[allow(clippy::cast_precision_loss)]
        AudioBufferRef::S24(buf) => output.extend(
            buf.chan(channel)
                .iter()
                .map(|s| s.inner() as f32 / pcm::I24_NORM),
        ),
        #[allow(clippy::cast_precision_loss)]
        AudioBufferRef::S32(buf) => output.extend(
            buf.chan(channel)
                .iter()
                .map(|&s| s as f32 / pcm::I32_NORM),
        ),
        _ => {
            // Less common layouts go through symphonia's own conversion.
            let mut converted = symphonia::core::audio::AudioBuffer::<f32>::new(
                buffer.capacity() as u64,
                *buffer.spec(),
            );
            buffer.convert(&mut converted);
            output.extend_from_slice(converted.chan(channel));
        }
    }
}
