//! Channel-major integer sample buffers.
//!
//! An [`AudioBuffer`] is an ordered list of channels, each an ordered list of
//! signed samples. Every constructor checks that all channels have the same
//! length and that every sample fits the declared width, so the serializer
//! never has to.

use crate::error::{WavError, WavResult};

/// Storage width of a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleWidth {
    /// 8-bit signed.
    I8,
    /// 16-bit signed.
    I16,
    /// 24-bit signed, stored in an `i32`.
    I24,
    /// 32-bit signed.
    I32,
}

impl SampleWidth {
    /// Maps a bit depth to its sample width.
    pub fn from_bit_depth(bits: u16) -> WavResult<Self> {
        match bits {
            8 => Ok(Self::I8),
            16 => Ok(Self::I16),
            24 => Ok(Self::I24),
            32 => Ok(Self::I32),
            _ => Err(WavError::UnsupportedBitDepth { bits }),
        }
    }

    /// Bits per sample.
    pub fn bits(self) -> u16 {
        match self {
            Self::I8 => 8,
            Self::I16 => 16,
            Self::I24 => 24,
            Self::I32 => 32,
        }
    }

    /// Bytes per sample on disk.
    pub fn bytes(self) -> usize {
        usize::from(self.bits() / 8)
    }

    /// Smallest representable sample.
    pub fn min_value(self) -> i32 {
        match self {
            Self::I8 => i8::MIN as i32,
            Self::I16 => i16::MIN as i32,
            Self::I24 => -(1 << 23),
            Self::I32 => i32::MIN,
        }
    }

    /// Largest representable sample.
    pub fn max_value(self) -> i32 {
        match self {
            Self::I8 => i8::MAX as i32,
            Self::I16 => i16::MAX as i32,
            Self::I24 => (1 << 23) - 1,
            Self::I32 => i32::MAX,
        }
    }

    fn contains(self, value: i32) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Channels {
    I8(Vec<Vec<i8>>),
    I16(Vec<Vec<i16>>),
    I24(Vec<Vec<i32>>),
    I32(Vec<Vec<i32>>),
}

/// A validated, channel-major sample buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    channels: Channels,
}

impl AudioBuffer {
    /// Builds an 8-bit buffer.
    pub fn from_i8(channels: Vec<Vec<i8>>) -> WavResult<Self> {
        check_rectangular(&channels)?;
        Ok(Self {
            channels: Channels::I8(channels),
        })
    }

    /// Builds a 16-bit buffer.
    pub fn from_i16(channels: Vec<Vec<i16>>) -> WavResult<Self> {
        check_rectangular(&channels)?;
        Ok(Self {
            channels: Channels::I16(channels),
        })
    }

    /// Builds a 24-bit buffer from `i32` storage.
    ///
    /// Every sample must lie in `-8388608..=8388607`.
    pub fn from_i24(channels: Vec<Vec<i32>>) -> WavResult<Self> {
        check_rectangular(&channels)?;
        check_range(&channels, SampleWidth::I24)?;
        Ok(Self {
            channels: Channels::I24(channels),
        })
    }

    /// Builds a 32-bit buffer.
    pub fn from_i32(channels: Vec<Vec<i32>>) -> WavResult<Self> {
        check_rectangular(&channels)?;
        Ok(Self {
            channels: Channels::I32(channels),
        })
    }

    /// Builds a buffer whose width is chosen by `bit_depth`.
    ///
    /// Samples are range-checked against the width and narrowed into its
    /// storage type.
    ///
    /// # Arguments
    /// * `bit_depth` - One of 8, 16, 24 or 32
    /// * `channels` - Channel-major samples
    ///
    /// # Returns
    /// The buffer, or `UnsupportedBitDepth`, `RaggedChannels` or
    /// `SampleOutOfRange`
    pub fn with_bit_depth(bit_depth: u16, channels: Vec<Vec<i32>>) -> WavResult<Self> {
        let width = SampleWidth::from_bit_depth(bit_depth)?;
        check_rectangular(&channels)?;
        check_range(&channels, width)?;

        // Range already checked, the narrowing casts are lossless.
        let channels = match width {
            SampleWidth::I8 => Channels::I8(narrow(channels, |s| s as i8)),
            SampleWidth::I16 => Channels::I16(narrow(channels, |s| s as i16)),
            SampleWidth::I24 => Channels::I24(channels),
            SampleWidth::I32 => Channels::I32(channels),
        };
        Ok(Self { channels })
    }

    /// Sample width of this buffer.
    pub fn width(&self) -> SampleWidth {
        match self.channels {
            Channels::I8(_) => SampleWidth::I8,
            Channels::I16(_) => SampleWidth::I16,
            Channels::I24(_) => SampleWidth::I24,
            Channels::I32(_) => SampleWidth::I32,
        }
    }

    /// Bit depth implied by the sample width.
    pub fn bit_depth(&self) -> u16 {
        self.width().bits()
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        match &self.channels {
            Channels::I8(c) => c.len(),
            Channels::I16(c) => c.len(),
            Channels::I24(c) | Channels::I32(c) => c.len(),
        }
    }

    /// Samples per channel, taken from the first channel (0 if there is none).
    pub fn num_samples_per_channel(&self) -> usize {
        match &self.channels {
            Channels::I8(c) => c.first().map_or(0, Vec::len),
            Channels::I16(c) => c.first().map_or(0, Vec::len),
            Channels::I24(c) | Channels::I32(c) => c.first().map_or(0, Vec::len),
        }
    }

    /// Returns true if the buffer has no channels.
    pub fn is_empty(&self) -> bool {
        self.num_channels() == 0
    }

    /// Returns true for exactly one channel.
    pub fn is_mono(&self) -> bool {
        self.num_channels() == 1
    }

    /// Returns true for exactly two channels.
    pub fn is_stereo(&self) -> bool {
        self.num_channels() == 2
    }

    pub(crate) fn channels(&self) -> &Channels {
        &self.channels
    }
}

fn check_rectangular<T>(channels: &[Vec<T>]) -> WavResult<()> {
    let Some(first) = channels.first() else {
        return Ok(());
    };
    let expected = first.len();
    match channels.iter().position(|c| c.len() != expected) {
        Some(channel) => Err(WavError::RaggedChannels {
            channel,
            expected,
            found: channels[channel].len(),
        }),
        None => Ok(()),
    }
}

fn check_range(channels: &[Vec<i32>], width: SampleWidth) -> WavResult<()> {
    for (channel, samples) in channels.iter().enumerate() {
        if let Some(index) = samples.iter().position(|&s| !width.contains(s)) {
            return Err(WavError::SampleOutOfRange {
                channel,
                index,
                value: samples[index],
                bits: width.bits(),
            });
        }
    }
    Ok(())
}

fn narrow<T>(channels: Vec<Vec<i32>>, cast: impl Fn(i32) -> T + Copy) -> Vec<Vec<T>> {
    channels
        .into_iter()
        .map(|samples| samples.into_iter().map(cast).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_bit_depth() {
        assert_eq!(SampleWidth::from_bit_depth(8).unwrap(), SampleWidth::I8);
        assert_eq!(SampleWidth::from_bit_depth(24).unwrap(), SampleWidth::I24);
        assert_eq!(SampleWidth::I24.bytes(), 3);
        assert!(matches!(
            SampleWidth::from_bit_depth(12),
            Err(WavError::UnsupportedBitDepth { bits: 12 })
        ));
        assert!(SampleWidth::from_bit_depth(0).is_err());
    }

    #[test]
    fn test_i24_bounds() {
        assert_eq!(SampleWidth::I24.min_value(), -8_388_608);
        assert_eq!(SampleWidth::I24.max_value(), 8_388_607);
    }

    #[test]
    fn test_ragged_channels_rejected() {
        let err = AudioBuffer::from_i16(vec![vec![0, 0, 0], vec![0, 0]]).unwrap_err();
        match err {
            WavError::RaggedChannels {
                channel,
                expected,
                found,
            } => {
                assert_eq!(channel, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_buffer_is_constructible() {
        let buffer = AudioBuffer::from_i16(Vec::new()).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.num_samples_per_channel(), 0);
    }

    #[test]
    fn test_i24_out_of_range() {
        let err = AudioBuffer::from_i24(vec![vec![0, 8_388_608]]).unwrap_err();
        assert!(matches!(
            err,
            WavError::SampleOutOfRange {
                channel: 0,
                index: 1,
                value: 8_388_608,
                bits: 24
            }
        ));
    }

    #[test]
    fn test_with_bit_depth_narrows() {
        let buffer = AudioBuffer::with_bit_depth(8, vec![vec![10, 20], vec![30, 40]]).unwrap();
        assert_eq!(buffer.width(), SampleWidth::I8);
        assert!(buffer.is_stereo());
        assert_eq!(buffer.num_samples_per_channel(), 2);
        assert_eq!(
            buffer,
            AudioBuffer::from_i8(vec![vec![10, 20], vec![30, 40]]).unwrap()
        );
    }

    #[test]
    fn test_with_bit_depth_rejects_overflowing_sample() {
        let err = AudioBuffer::with_bit_depth(16, vec![vec![0], vec![40_000]]).unwrap_err();
        assert!(matches!(
            err,
            WavError::SampleOutOfRange {
                channel: 1,
                index: 0,
                bits: 16,
                ..
            }
        ));
    }
}
