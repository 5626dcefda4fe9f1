//! Error types for birdscope.

use std::path::PathBuf;

/// Result type alias for birdscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for birdscope.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Time range is negative, non-finite, or reversed.
    #[error("invalid time range: start={start}s, end={end}s")]
    InvalidRange {
        /// Start time in seconds.
        start: f64,
        /// End time in seconds.
        end: f64,
    },

    /// Sampling rate of zero.
    #[error("sampling rate must be greater than zero")]
    InvalidSampleRate,

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to decode audio.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No audio tracks found.
    #[error("no audio tracks found in '{path}'")]
    NoAudioTracks {
        /// Path to the audio file.
        path: PathBuf,
    },

    /// Requested channel does not exist in the source.
    #[error("channel {channel} out of range for '{path}' ({available} channel(s) available)")]
    ChannelOutOfRange {
        /// Path to the audio file.
        path: PathBuf,
        /// Requested channel index.
        channel: usize,
        /// Number of channels in the source.
        available: usize,
    },

    /// Spectrogram window settings are unusable.
    #[error("invalid spectrogram settings: {message}")]
    InvalidSpectrogramConfig {
        /// Description of the problem.
        message: String,
    },

    /// Failed to read a segment list.
    #[error("failed to read segment file '{path}'")]
    SegmentParseFailed {
        /// Path to the segment file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Segment definition is malformed.
    #[error("invalid segment: {message}")]
    InvalidSegmentFormat {
        /// Description of the problem.
        message: String,
    },

    /// No segments were given to plot.
    #[error("no segments specified (use --segment or --segments)")]
    NoSegments,

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a plot file.
    #[error("failed to write plot '{path}'")]
    PlotWrite {
        /// Path to the plot file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Every segment failed to render.
    #[error("none of the {failed} segments could be rendered (last error: {last})")]
    NoPlotsRendered {
        /// Number of segments that failed.
        failed: usize,
        /// Error of the last failed segment.
        last: Box<Error>,
    },

    /// Failed to serialize structured output.
    #[error("failed to serialize output")]
    OutputSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
