//! Status reporting shared by the writing commands.
//!
//! Reports always go to stderr: stdout may be carrying the WAV stream itself
//! when the destination is `-`.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use wavout::WavSummary;

/// Machine-readable result of a write command.
#[derive(Debug, Clone, Serialize)]
pub struct WavReport {
    /// Whether the write succeeded
    pub success: bool,
    /// Destination path (`-` for stdout)
    pub output: String,
    /// Format and size of the written stream
    pub summary: WavSummary,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

/// How a command should report what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Colored summary lines
    Human,
    /// Pretty-printed [`WavReport`] JSON
    Json,
    /// No report
    Quiet,
}

impl ReportMode {
    /// Picks the mode from the `--json` and `--quiet` flags; `--json` wins.
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            ReportMode::Json
        } else if quiet {
            ReportMode::Quiet
        } else {
            ReportMode::Human
        }
    }
}

/// Emits `report` to stderr according to `mode`.
pub fn emit(report: &WavReport, mode: ReportMode) -> Result<()> {
    match mode {
        ReportMode::Quiet => {}
        ReportMode::Json => {
            let json =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            eprintln!("{}", json);
        }
        ReportMode::Human => {
            let destination = if report.output == wavout::wav::STDOUT_PATH {
                "<stdout>"
            } else {
                report.output.as_str()
            };
            eprintln!(
                "{} {} ({} bytes)",
                "Wrote".green().bold(),
                destination,
                report.summary.file_size
            );
            eprintln!("{}", report.summary);
            eprintln!("{} {}", "PCM hash:".dimmed(), report.pcm_hash);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_mode_precedence() {
        assert_eq!(ReportMode::from_flags(true, true), ReportMode::Json);
        assert_eq!(ReportMode::from_flags(false, true), ReportMode::Quiet);
        assert_eq!(ReportMode::from_flags(false, false), ReportMode::Human);
    }

    #[test]
    fn test_report_serializes_summary() {
        let report = WavReport {
            success: true,
            output: "out.wav".to_string(),
            summary: wavout::WavWriter::mono(44100).summary(),
            pcm_hash: "abc".to_string(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["summary"]["sample_rate"], 44100);
        assert_eq!(value["summary"]["num_channels"], 1);
    }
}
