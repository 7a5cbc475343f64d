//! Byte-exact WAV writer.
//!
//! This module writes canonical 44-byte RIFF/WAVE/fmt/data headers followed by
//! frame-major interleaved integer PCM, with no metadata chunks. Output is a
//! pure function of the format parameters and the samples.

mod builder;
mod encode;
mod format;
mod header;
mod pcm;
mod result;
mod sink;
mod writer;


// Re-export public API
pub use builder::WavWriter;
pub use encode::{append_tag, append_u16_le, append_u32_le};
pub use format::{HeaderLayout, WavFormat, HEADER_LEN};
pub use header::{append_header, header_bytes};
pub use pcm::pcm_hash;
pub use result::WavSummary;
pub use sink::{is_stdout, Sink, STDOUT_PATH};
pub use writer::{write_samples, write_wav};
