//! Tone command implementation
//!
//! Synthesizes a deterministic sine tone and writes it as PCM WAV.

use anyhow::{Context, Result};
use std::f64::consts::TAU;
use std::process::ExitCode;
use wavout::{AudioBuffer, SampleWidth};

use super::report::ReportMode;

/// Parameters for a sine tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    /// Frequency in Hz
    pub frequency: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bit_depth: u16,
    /// Number of identical channels
    pub channels: u16,
    /// Peak level relative to full scale, 0.0..=1.0
    pub amplitude: f64,
}

/// Run the tone command
///
/// # Arguments
/// * `params` - Tone parameters
/// * `output` - Output path, `-` for stdout
/// * `mode` - How to report the write
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(params: &ToneParams, output: &str, mode: ReportMode) -> Result<ExitCode> {
    let buffer = synthesize(params)?;
    super::save_buffer(output, &buffer, params.sample_rate, mode)?;
    Ok(ExitCode::SUCCESS)
}

/// Renders the tone into a buffer of the requested width.
pub fn synthesize(params: &ToneParams) -> Result<AudioBuffer> {
    let width = SampleWidth::from_bit_depth(params.bit_depth)?;

    if params.sample_rate == 0 {
        anyhow::bail!("Sample rate must be positive");
    }
    if !(params.frequency > 0.0 && params.frequency.is_finite()) {
        anyhow::bail!("Invalid frequency: {} Hz", params.frequency);
    }
    if !(params.duration >= 0.0 && params.duration.is_finite()) {
        anyhow::bail!("Invalid duration: {} seconds", params.duration);
    }
    if !(0.0..=1.0).contains(&params.amplitude) {
        anyhow::bail!("Amplitude must be within 0.0..=1.0, got {}", params.amplitude);
    }
    if params.channels == 0 {
        anyhow::bail!("At least one channel is required");
    }

    let num_samples = frame_count(params, width)?;
    let peak = params.amplitude * f64::from(width.max_value());
    let step = TAU * params.frequency / f64::from(params.sample_rate);

    let samples: Vec<i32> = (0..num_samples)
        .map(|n| (peak * (step * n as f64).sin()).round() as i32)
        .collect();
    let channels = vec![samples; usize::from(params.channels)];

    Ok(AudioBuffer::with_bit_depth(params.bit_depth, channels)?)
}

/// Frames per channel for the requested duration.
///
/// Rejects tones whose payload would not fit the 32-bit RIFF size fields,
/// before anything is allocated.
fn frame_count(params: &ToneParams, width: SampleWidth) -> Result<usize> {
    let frames = (params.duration * f64::from(params.sample_rate)).round();
    if frames > f64::from(u32::MAX) {
        anyhow::bail!(
            "Duration too long: {} seconds at {} Hz exceeds the WAV size limit",
            params.duration,
            params.sample_rate
        );
    }

    let frames = frames as u64;
    let data_size = frames * u64::from(params.channels) * width.bytes() as u64;
    if data_size + 36 > u64::from(u32::MAX) {
        anyhow::bail!("Tone payload of {} bytes exceeds the WAV size limit", data_size);
    }

    usize::try_from(frames).context("Frame count does not fit in memory")
}
