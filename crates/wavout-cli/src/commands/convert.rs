//! Convert command implementation
//!
//! Reads a JSON sample document and writes it as PCM WAV.
//!
//! The document has the shape
//! `{ "sample_rate": 48000, "bit_depth": 16, "channels": [[0, 1, ...], ...] }`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::process::ExitCode;
use wavout::AudioBuffer;

use super::report::ReportMode;

/// A channel-major sample document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleDocument {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample (8, 16, 24 or 32)
    pub bit_depth: u16,
    /// Samples, one array per channel
    pub channels: Vec<Vec<i32>>,
}

impl SampleDocument {
    /// Parses a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validates the samples and builds the buffer.
    pub fn into_buffer(self) -> Result<(u32, AudioBuffer)> {
        let buffer = AudioBuffer::with_bit_depth(self.bit_depth, self.channels)?;
        Ok((self.sample_rate, buffer))
    }
}

/// Run the convert command
///
/// # Arguments
/// * `input` - Path to the JSON sample document
/// * `output` - Output path, `-` for stdout
/// * `mode` - How to report the write
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, output: &str, mode: ReportMode) -> Result<ExitCode> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read sample document: {}", input))?;
    let document = SampleDocument::from_json(&text)
        .with_context(|| format!("Failed to parse sample document: {}", input))?;
    let (sample_rate, buffer) = document
        .into_buffer()
        .with_context(|| format!("Invalid samples in: {}", input))?;

    super::save_buffer(output, &buffer, sample_rate, mode)?;
    Ok(ExitCode::SUCCESS)
}
