//! CLI command implementations

pub mod convert;
pub mod header;
pub mod report;
pub mod tone;

use anyhow::{Context, Result};
use wavout::{pcm_hash, AudioBuffer, WavWriter};

use report::{ReportMode, WavReport};

/// Saves `buffer` to `output` and reports the result.
///
/// # Arguments
/// * `output` - Destination path, `-` for stdout
/// * `buffer` - Samples to write
/// * `sample_rate` - Sample rate in Hz
/// * `mode` - How to report the write
pub(crate) fn save_buffer(
    output: &str,
    buffer: &AudioBuffer,
    sample_rate: u32,
    mode: ReportMode,
) -> Result<()> {
    let mut writer = WavWriter::new();
    writer.set_sample_rate(sample_rate);
    writer.set_bit_depth(buffer.bit_depth());

    writer
        .save(output, buffer)
        .with_context(|| format!("Failed to write WAV: {}", output))?;

    let wav_report = WavReport {
        success: true,
        output: output.to_string(),
        summary: writer.summary(),
        pcm_hash: pcm_hash(buffer),
    };
    report::emit(&wav_report, mode)
}
