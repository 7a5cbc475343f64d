//! PCM payload hashing.

use crate::buffer::AudioBuffer;

use super::writer::write_samples;

/// Computes the BLAKE3 hash of the serialized sample payload.
///
/// The digest covers exactly the data chunk contents (no header), so two
/// buffers hash equal iff they serialize to the same payload bytes.
///
/// # Arguments
/// * `buffer` - Samples to hash
///
/// # Returns
/// Lowercase hex digest (64 characters)
pub fn pcm_hash(buffer: &AudioBuffer) -> String {
    let mut hasher = blake3::Hasher::new();
    write_samples(&mut hasher, buffer).expect("hashing into memory should not fail");
    hasher.finalize().to_hex().to_string()
}
