//! WAV file format parameters.

use crate::buffer::SampleWidth;
use crate::error::{WavError, WavResult};

/// Size of the RIFF/WAVE/fmt/data prelude in bytes.
pub const HEADER_LEN: usize = 44;

/// Bytes counted by the RIFF size field that precede the data payload.
const RIFF_OVERHEAD: u64 = 36;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (8, 16, 24 or 32).
    pub bits_per_sample: u16,
    /// Number of samples in each channel.
    pub samples_per_channel: u32,
}

impl Default for WavFormat {
    fn default() -> Self {
        Self {
            channels: 0,
            sample_rate: 44100,
            bits_per_sample: 16,
            samples_per_channel: 0,
        }
    }
}

impl WavFormat {
    /// Creates a 16-bit mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            ..Self::default()
        }
    }

    /// Creates a 16-bit stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            ..Self::default()
        }
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Size of the data chunk payload, unbounded.
    pub fn data_size(&self) -> u64 {
        u64::from(self.samples_per_channel)
            * u64::from(self.channels)
            * u64::from(self.bytes_per_sample())
    }

    /// Total size of the file this format describes, unbounded.
    pub fn file_size(&self) -> u64 {
        HEADER_LEN as u64 + self.data_size()
    }

    /// Duration in seconds.
    pub fn length_in_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        f64::from(self.samples_per_channel) / f64::from(self.sample_rate)
    }

    /// Computes every derived header field and narrows it to its on-disk width.
    ///
    /// Arithmetic is done in `u64`; a field that does not fit is reported as
    /// `SizeOverflow` instead of wrapping.
    ///
    /// # Returns
    /// The header layout, or `UnsupportedBitDepth` / `SizeOverflow`
    pub fn layout(&self) -> WavResult<HeaderLayout> {
        SampleWidth::from_bit_depth(self.bits_per_sample)?;

        let bytes_per_sample = u64::from(self.bytes_per_sample());
        let block_align = u64::from(self.channels) * bytes_per_sample;
        let byte_rate = u64::from(self.sample_rate) * block_align;
        let data_size = self.data_size();

        let block_align = u16::try_from(block_align).map_err(|_| WavError::SizeOverflow {
            field: "block align",
            value: block_align,
        })?;
        let byte_rate = narrow_u32("byte rate", byte_rate)?;
        let data_size_u32 = narrow_u32("data chunk size", data_size)?;
        let riff_size = narrow_u32("riff chunk size", data_size + RIFF_OVERHEAD)?;

        Ok(HeaderLayout {
            riff_size,
            channels: self.channels,
            sample_rate: self.sample_rate,
            byte_rate,
            block_align,
            bits_per_sample: self.bits_per_sample,
            data_size: data_size_u32,
        })
    }
}

fn narrow_u32(field: &'static str, value: u64) -> WavResult<u32> {
    u32::try_from(value).map_err(|_| WavError::SizeOverflow { field, value })
}

/// Header field values, already validated to fit the WAVE layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// RIFF chunk size: file size minus 8.
    pub riff_size: u32,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Data chunk payload size.
    pub data_size: u32,
}
