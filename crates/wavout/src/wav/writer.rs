//! Core WAV writing: header emission and the interleaved sample payload.

use std::io::{self, Write};

use crate::buffer::{AudioBuffer, Channels};

use super::format::HeaderLayout;
use super::header::header_bytes;

/// Writes a complete WAV stream (header then payload) to a writer.
///
/// The caller is responsible for `layout` describing `buffer`; see
/// [`WavWriter`](super::WavWriter) for the validated entry point.
///
/// # Arguments
/// * `writer` - Output writer
/// * `layout` - Validated header fields
/// * `buffer` - Samples to serialize
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(
    writer: &mut W,
    layout: &HeaderLayout,
    buffer: &AudioBuffer,
) -> io::Result<()> {
    writer.write_all(&header_bytes(layout))?;
    write_samples(writer, buffer)
}

/// Writes the sample payload in frame-major order.
///
/// For each frame `i`, sample `i` of every channel is written in channel
/// order as a little-endian two's-complement integer of the buffer's width.
/// One frame is assembled at a time and handed to the writer in a single
/// `write_all`.
pub fn write_samples<W: Write>(writer: &mut W, buffer: &AudioBuffer) -> io::Result<()> {
    match buffer.channels() {
        Channels::I8(channels) => interleave(writer, channels, i8::to_le_bytes),
        Channels::I16(channels) => interleave(writer, channels, i16::to_le_bytes),
        Channels::I24(channels) => interleave(writer, channels, i24_to_le_bytes),
        Channels::I32(channels) => interleave(writer, channels, i32::to_le_bytes),
    }
}

fn interleave<W, T, F, const N: usize>(
    writer: &mut W,
    channels: &[Vec<T>],
    to_le_bytes: F,
) -> io::Result<()>
where
    W: Write,
    T: Copy,
    F: Fn(T) -> [u8; N],
{
    let frames = channels.first().map_or(0, Vec::len);
    let mut frame = Vec::with_capacity(channels.len() * N);

    for i in 0..frames {
        frame.clear();
        for channel in channels {
            frame.extend_from_slice(&to_le_bytes(channel[i]));
        }
        writer.write_all(&frame)?;
    }

    Ok(())
}

/// Low three bytes of a 24-bit sample held in an `i32`.
fn i24_to_le_bytes(sample: i32) -> [u8; 3] {
    let [b0, b1, b2, _] = sample.to_le_bytes();
    [b0, b1, b2]
}
