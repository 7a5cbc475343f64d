//! WAV summary type.

use std::fmt;

use serde::Serialize;

use super::format::WavFormat;

/// Summary of a WAV stream's format and size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavSummary {
    /// Number of channels.
    pub num_channels: u16,
    /// Number of samples per channel.
    pub num_samples_per_channel: u32,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bit_depth: u16,
    /// Bytes per sample per channel.
    pub bytes_per_sample: u16,
    /// Duration in seconds.
    pub length_seconds: f64,
    /// Data chunk payload size in bytes.
    pub data_size: u64,
    /// Total stream size in bytes, header included.
    pub file_size: u64,
}

impl WavSummary {
    /// Creates a summary from format parameters.
    pub fn from_format(format: &WavFormat) -> Self {
        Self {
            num_channels: format.channels,
            num_samples_per_channel: format.samples_per_channel,
            sample_rate: format.sample_rate,
            bit_depth: format.bits_per_sample,
            bytes_per_sample: format.bytes_per_sample(),
            length_seconds: format.length_in_seconds(),
            data_size: format.data_size(),
            file_size: format.file_size(),
        }
    }
}

impl fmt::Display for WavSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|=============WAVE FILE SUMMARY=============|")?;
        writeln!(f, "Num Channels: {}", self.num_channels)?;
        writeln!(f, "Num Samples Per Channel: {}", self.num_samples_per_channel)?;
        writeln!(f, "Sample Rate: {}", self.sample_rate)?;
        writeln!(f, "Bit Depth: {}", self.bit_depth)?;
        writeln!(f, "Length in Seconds: {}", self.length_seconds)?;
        writeln!(f, "Sample size in bytes: {}", self.bytes_per_sample)?;
        write!(f, "|===========================================|")
    }
}
