//! wavout
//!
//! Writes uncompressed integer PCM audio in the RIFF/WAVE container.
//!
//! # Overview
//!
//! Given a sample rate, a bit depth and a set of equal-length channels, the
//! writer produces the canonical 44-byte header followed by frame-major
//! interleaved little-endian samples, and sends the stream to a file or to
//! standard output (destination `"-"`).
//!
//! # Example
//!
//! ```no_run
//! use wavout::{AudioBuffer, WavWriter};
//!
//! let buffer = AudioBuffer::from_i16(vec![vec![0, 1000, -1000, 0]])?;
//! let mut writer = WavWriter::mono(44100);
//! writer.save("out.wav", &buffer)?;
//! # Ok::<(), wavout::WavError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`buffer`] - Validated channel-major sample buffers
//! - [`error`] - Error taxonomy
//! - [`wav`] - Header assembly, sample serialization and output sinks

pub mod buffer;
pub mod error;
pub mod wav;

// Re-export main types at crate root
pub use buffer::{AudioBuffer, SampleWidth};
pub use error::{WavError, WavResult};
pub use wav::{pcm_hash, WavFormat, WavSummary, WavWriter};
