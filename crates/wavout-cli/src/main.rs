//! wavout CLI - Command-line interface for writing PCM WAV files
//!
//! Every command that writes audio accepts `-` as the output path to stream
//! the WAV bytes to stdout. Status output always goes to stderr.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavout::WavFormat;
use wavout_cli::commands;
use wavout_cli::commands::report::ReportMode;
use wavout_cli::commands::tone::ToneParams;

/// wavout - Uncompressed PCM WAV writer
#[derive(Parser)]
#[command(name = "wavout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a sine tone and write it as WAV
    Tone {
        /// Output path (`-` for stdout)
        #[arg(short, long)]
        output: String,

        /// Tone frequency in Hz
        #[arg(short, long, default_value_t = 440.0)]
        frequency: f64,

        /// Duration in seconds
        #[arg(short, long, default_value_t = 1.0)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Bits per sample (8, 16, 24 or 32)
        #[arg(long, default_value_t = 16, value_parser = parse_bit_depth)]
        bit_depth: u16,

        /// Number of channels
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        channels: u16,

        /// Peak level relative to full scale (0.0 to 1.0)
        #[arg(short, long, default_value_t = 0.8)]
        amplitude: f64,

        /// Output a machine-readable JSON report
        #[arg(long)]
        json: bool,

        /// Suppress the status report
        #[arg(short, long)]
        quiet: bool,
    },

    /// Convert a JSON sample document to WAV
    Convert {
        /// Path to the JSON sample document
        #[arg(short, long)]
        input: String,

        /// Output path (`-` for stdout)
        #[arg(short, long)]
        output: String,

        /// Output a machine-readable JSON report
        #[arg(long)]
        json: bool,

        /// Suppress the status report
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the 44-byte WAV header for the given parameters
    Header {
        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Bits per sample
        #[arg(long, default_value_t = 16)]
        bit_depth: u16,

        /// Number of channels
        #[arg(short, long, default_value_t = 1)]
        channels: u16,

        /// Samples per channel
        #[arg(short, long, default_value_t = 0)]
        samples: u32,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_bit_depth(s: &str) -> Result<u16, String> {
    let bits: u16 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    wavout::SampleWidth::from_bit_depth(bits)
        .map(|width| width.bits())
        .map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tone {
            output,
            frequency,
            duration,
            sample_rate,
            bit_depth,
            channels,
            amplitude,
            json,
            quiet,
        } => {
            let params = ToneParams {
                frequency,
                duration,
                sample_rate,
                bit_depth,
                channels,
                amplitude,
            };
            commands::tone::run(&params, &output, ReportMode::from_flags(json, quiet))
        }
        Commands::Convert {
            input,
            output,
            json,
            quiet,
        } => commands::convert::run(&input, &output, ReportMode::from_flags(json, quiet)),
        Commands::Header {
            sample_rate,
            bit_depth,
            channels,
            samples,
            json,
        } => commands::header::run(
            WavFormat {
                channels,
                sample_rate,
                bits_per_sample: bit_depth,
                samples_per_channel: samples,
            },
            json,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
