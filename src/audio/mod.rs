//! Audio loading, segment extraction, and spectral analysis.

mod buffer;
mod decode;
mod extract;
mod spectrogram;

pub use buffer::{AudioBuffer, SampleRange, TimeRange};
pub use decode::{AudioInfo, decode_audio_file, probe_audio_file};
pub use extract::{extract, sample_range};
pub use spectrogram::{Spectrogram, SpectrogramConfig, compute_spectrogram};
