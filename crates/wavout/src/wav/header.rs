//! RIFF/WAVE/fmt/data prelude assembly.

use super::encode::{append_tag, append_u16_le, append_u32_le};
use super::format::{HeaderLayout, HEADER_LEN};

/// fmt chunk size for plain PCM.
const PCM_FMT_CHUNK_SIZE: u32 = 16;

/// WAVE format code for uncompressed linear PCM.
const WAVE_FORMAT_PCM: u16 = 1;

/// Appends the 44-byte header described by `layout` to `buf`.
pub fn append_header(buf: &mut Vec<u8>, layout: &HeaderLayout) {
    buf.reserve(HEADER_LEN);

    // RIFF header
    append_tag(buf, b"RIFF");
    append_u32_le(buf, layout.riff_size);
    append_tag(buf, b"WAVE");

    // fmt chunk
    append_tag(buf, b"fmt ");
    append_u32_le(buf, PCM_FMT_CHUNK_SIZE);
    append_u16_le(buf, WAVE_FORMAT_PCM);
    append_u16_le(buf, layout.channels);
    append_u32_le(buf, layout.sample_rate);
    append_u32_le(buf, layout.byte_rate);
    append_u16_le(buf, layout.block_align);
    append_u16_le(buf, layout.bits_per_sample);

    // data chunk
    append_tag(buf, b"data");
    append_u32_le(buf, layout.data_size);
}

/// Returns the header described by `layout` as a fixed-size array.
pub fn header_bytes(layout: &HeaderLayout) -> [u8; HEADER_LEN] {
    let mut buf = Vec::with_capacity(HEADER_LEN);
    append_header(&mut buf, layout);

    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&buf);
    header
}
