//! Error types for WAV output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for WAV operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors that can occur while building or saving a WAV stream.
#[derive(Debug, Error)]
pub enum WavError {
    /// The destination could not be opened for binary write.
    #[error("failed to open '{}' for writing: {source}", .path.display())]
    OpenFailed {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The audio buffer has zero channels.
    #[error("audio buffer has no channels")]
    EmptyBuffer,

    /// A write to the sink failed mid-stream.
    #[error("write failed: {0}")]
    WriteFailed(#[from] io::Error),

    /// Channels of differing lengths were passed to a buffer constructor.
    #[error("channel {channel} has {found} samples, expected {expected}")]
    RaggedChannels {
        /// Index of the offending channel.
        channel: usize,
        /// Length of channel 0.
        expected: usize,
        /// Length of the offending channel.
        found: usize,
    },

    /// The bit depth is not one of 8, 16, 24 or 32.
    #[error("unsupported bit depth: {bits}")]
    UnsupportedBitDepth {
        /// The rejected bit depth.
        bits: u16,
    },

    /// The configured bit depth disagrees with the buffer's sample storage.
    #[error("bit depth {bit_depth} does not match {sample_bits}-bit samples")]
    BitDepthMismatch {
        /// Configured bit depth.
        bit_depth: u16,
        /// Bits per sample of the buffer.
        sample_bits: u16,
    },

    /// A sample does not fit in the declared width.
    #[error("sample {value} (channel {channel}, index {index}) does not fit in {bits} bits")]
    SampleOutOfRange {
        /// Channel index.
        channel: usize,
        /// Sample index within the channel.
        index: usize,
        /// The offending value.
        value: i32,
        /// Declared width in bits.
        bits: u16,
    },

    /// More channels than the fmt chunk can describe.
    #[error("too many channels: {count}")]
    TooManyChannels {
        /// Number of channels in the buffer.
        count: usize,
    },

    /// A derived header field does not fit its on-disk width.
    #[error("{field} of {value} exceeds the range of a WAVE header field")]
    SizeOverflow {
        /// Name of the header field.
        field: &'static str,
        /// The computed value.
        value: u64,
    },
}

impl WavError {
    /// Creates an open error for `path`.
    pub fn open_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OpenFailed {
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            WavError::OpenFailed { .. } => "WAV_001",
            WavError::EmptyBuffer => "WAV_002",
            WavError::WriteFailed(_) => "WAV_003",
            WavError::RaggedChannels { .. } => "WAV_004",
            WavError::UnsupportedBitDepth { .. } => "WAV_005",
            WavError::BitDepthMismatch { .. } => "WAV_006",
            WavError::SampleOutOfRange { .. } => "WAV_007",
            WavError::TooManyChannels { .. } => "WAV_008",
            WavError::SizeOverflow { .. } => "WAV_009",
        }
    }

    /// Error category, shared by every variant.
    pub fn category(&self) -> &'static str {
        "wav"
    }
}
