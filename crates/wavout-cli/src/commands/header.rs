//! Header command implementation
//!
//! Prints the 44-byte WAV header for a set of format parameters without
//! writing any samples.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use wavout::{WavFormat, WavSummary, WavWriter};

/// Field boundaries of the canonical header: (offset, width, name).
const FIELDS: [(usize, usize, &str); 13] = [
    (0, 4, "chunk id"),
    (4, 4, "riff chunk size"),
    (8, 4, "form type"),
    (12, 4, "fmt chunk id"),
    (16, 4, "fmt chunk size"),
    (20, 2, "audio format"),
    (22, 2, "channels"),
    (24, 4, "sample rate"),
    (28, 4, "byte rate"),
    (32, 2, "block align"),
    (34, 2, "bits per sample"),
    (36, 4, "data chunk id"),
    (40, 4, "data chunk size"),
];

/// JSON form of the header command's output.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderOutput {
    /// Header bytes as lowercase hex
    pub hex: String,
    /// Parameters the header describes
    pub summary: WavSummary,
}

/// Run the header command
///
/// # Arguments
/// * `format` - Format parameters for the header
/// * `json` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(format: WavFormat, json: bool) -> Result<ExitCode> {
    let writer = WavWriter::with_format(format);
    let mut header = Vec::new();
    writer
        .build_header(&mut header)
        .context("Cannot build header")?;

    if json {
        let output = HeaderOutput {
            hex: to_hex(&header),
            summary: writer.summary(),
        };
        let text = serde_json::to_string_pretty(&output).context("Failed to serialize header")?;
        println!("{}", text);
    } else {
        println!("{}", "WAV header:".cyan().bold());
        for line in annotate(&header) {
            println!("{}", line);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Renders one line per header field: offset, raw bytes, field name.
pub fn annotate(header: &[u8]) -> Vec<String> {
    FIELDS
        .iter()
        .filter(|(offset, width, _)| offset + width <= header.len())
        .map(|&(offset, width, name)| {
            let bytes = header[offset..offset + width]
                .iter()
                .map(|b| format!("{:02X}", b))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{:>4}  {:<12} {}", offset, bytes, name)
        })
        .collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silence_header() -> Vec<u8> {
        let format = WavFormat {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            samples_per_channel: 4,
        };
        let mut header = Vec::new();
        WavWriter::with_format(format)
            .build_header(&mut header)
            .unwrap();
        header
    }

    #[test]
    fn test_annotate_covers_every_field() {
        let lines = annotate(&silence_header());
        assert_eq!(lines.len(), FIELDS.len());
        assert_eq!(lines[0], "   0  52 49 46 46  chunk id");
        assert_eq!(lines[7], "  24  44 AC 00 00  sample rate");
        assert_eq!(lines[12], "  40  08 00 00 00  data chunk size");
    }

    #[test]
    fn test_fields_tile_the_header() {
        let mut next = 0;
        for (offset, width, _) in FIELDS {
            assert_eq!(offset, next);
            next += width;
        }
        assert_eq!(next, wavout::wav::HEADER_LEN);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x52, 0x0a, 0xff]), "520aff");
    }
}
