//! WAV writer with settable format parameters.

use std::io::Write;
use std::path::Path;

use crate::buffer::AudioBuffer;
use crate::error::{WavError, WavResult};

use super::format::{HeaderLayout, WavFormat, HEADER_LEN};
use super::header::append_header;
use super::result::WavSummary;
use super::sink::Sink;
use super::writer::write_wav;

/// WAV file writer.
///
/// Holds the format parameters used for the header. Channel and sample
/// counts are re-derived from the buffer on every save, so the setters for
/// them only matter to [`WavWriter::build_header`].
#[derive(Debug, Clone, Default)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a writer with 44100 Hz, 16-bit defaults and no channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new WAV writer with mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// Creates a new WAV writer with stereo format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::stereo(sample_rate),
        }
    }

    /// Creates a writer from explicit format parameters.
    pub fn with_format(format: WavFormat) -> Self {
        Self { format }
    }

    /// Sets the sample rate in Hz.
    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        self.format.sample_rate = sample_rate;
    }

    /// Sets the bits per sample.
    pub fn set_bit_depth(&mut self, bit_depth: u16) {
        self.format.bits_per_sample = bit_depth;
    }

    /// Sets the channel count used by [`WavWriter::build_header`].
    pub fn set_num_channels(&mut self, num_channels: u16) {
        self.format.channels = num_channels;
    }

    /// Sets the per-channel sample count used by [`WavWriter::build_header`].
    pub fn set_num_samples_per_channel(&mut self, num_samples: u32) {
        self.format.samples_per_channel = num_samples;
    }

    /// Current format parameters.
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Bits per sample.
    pub fn bit_depth(&self) -> u16 {
        self.format.bits_per_sample
    }

    /// Channel count, updated by every successful save.
    pub fn num_channels(&self) -> u16 {
        self.format.channels
    }

    /// Samples per channel, updated by every successful save.
    pub fn num_samples_per_channel(&self) -> u32 {
        self.format.samples_per_channel
    }

    /// Returns true if the format has exactly one channel.
    pub fn is_mono(&self) -> bool {
        self.format.channels == 1
    }

    /// Returns true if the format has exactly two channels.
    pub fn is_stereo(&self) -> bool {
        self.format.channels == 2
    }

    /// Duration in seconds of the configured sample count.
    pub fn length_in_seconds(&self) -> f64 {
        self.format.length_in_seconds()
    }

    /// Fills `out` with the 44-byte header for the current parameters.
    ///
    /// `out` is cleared first. The header is a pure function of the current
    /// parameters, so repeated calls produce identical bytes.
    ///
    /// # Returns
    /// `UnsupportedBitDepth` or `SizeOverflow` if the parameters cannot be
    /// expressed in a WAVE header; `out` is left empty in that case
    pub fn build_header(&self, out: &mut Vec<u8>) -> WavResult<()> {
        out.clear();
        let layout = self.format.layout()?;
        append_header(out, &layout);
        Ok(())
    }

    /// Saves `buffer` as a WAV file at `path`; `"-"` writes to standard output.
    ///
    /// Channel and sample counts are taken from `buffer` before the header is
    /// built. Every validation runs before the destination is opened, so a
    /// rejected buffer leaves the destination untouched. On a mid-stream
    /// write failure the partial output is left in place.
    ///
    /// # Arguments
    /// * `path` - Destination file path, or `"-"` for standard output
    /// * `buffer` - Samples to write; its width must match the bit depth
    ///
    /// # Returns
    /// `EmptyBuffer`, `BitDepthMismatch`, `TooManyChannels`, `SizeOverflow`,
    /// `OpenFailed` or `WriteFailed` on failure
    pub fn save(&mut self, path: impl AsRef<Path>, buffer: &AudioBuffer) -> WavResult<()> {
        let layout = self.prepare(buffer)?;

        let mut sink = Sink::open(path.as_ref())?;
        write_wav(&mut sink, &layout, buffer)?;
        sink.finish()
    }

    /// Writes the complete WAV stream for `buffer` to `writer`.
    ///
    /// Same validation and byte sequence as [`WavWriter::save`].
    pub fn write_to<W: Write>(&mut self, writer: &mut W, buffer: &AudioBuffer) -> WavResult<()> {
        let layout = self.prepare(buffer)?;
        write_wav(writer, &layout, buffer)?;
        Ok(())
    }

    /// Returns the complete WAV stream for `buffer` as bytes.
    pub fn write_to_vec(&mut self, buffer: &AudioBuffer) -> WavResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(HEADER_LEN);
        self.write_to(&mut bytes, buffer)?;
        Ok(bytes)
    }

    /// Diagnostic summary of the current parameters.
    pub fn summary(&self) -> WavSummary {
        WavSummary::from_format(&self.format)
    }

    /// Adopts the buffer's counts and validates the resulting header.
    fn prepare(&mut self, buffer: &AudioBuffer) -> WavResult<HeaderLayout> {
        if buffer.is_empty() {
            return Err(WavError::EmptyBuffer);
        }
        if buffer.bit_depth() != self.format.bits_per_sample {
            return Err(WavError::BitDepthMismatch {
                bit_depth: self.format.bits_per_sample,
                sample_bits: buffer.bit_depth(),
            });
        }

        let count = buffer.num_channels();
        let channels = u16::try_from(count).map_err(|_| WavError::TooManyChannels { count })?;
        let frames = buffer.num_samples_per_channel();
        let samples_per_channel = u32::try_from(frames).map_err(|_| WavError::SizeOverflow {
            field: "samples per channel",
            value: frames as u64,
        })?;

        self.adopt_counts(channels, samples_per_channel)
    }

    /// Validates the header for the given counts and stores them only if it
    /// can be built.
    pub(super) fn adopt_counts(
        &mut self,
        channels: u16,
        samples_per_channel: u32,
    ) -> WavResult<HeaderLayout> {
        let format = WavFormat {
            channels,
            samples_per_channel,
            ..self.format
        };
        let layout = format.layout()?;
        self.format = format;
        Ok(layout)
    }
}
