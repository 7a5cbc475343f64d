//! Integration tests that run the `wavout` binary.

use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;

fn wavout() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wavout"))
}

const SILENCE_DOC: &str = r#"{ "sample_rate": 44100, "bit_depth": 16, "channels": [[0, 0, 0, 0]] }"#;

#[test]
fn test_stdout_matches_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("silence.json");
    let file_out = dir.path().join("silence.wav");
    fs::write(&input, SILENCE_DOC).unwrap();

    let status = wavout()
        .args(["convert", "--quiet", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&file_out)
        .status()
        .unwrap();
    assert!(status.success());

    let piped = wavout()
        .args(["convert", "--quiet", "--output", "-", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(piped.status.success());

    let from_file = fs::read(&file_out).unwrap();
    assert_eq!(from_file.len(), 52);
    assert_eq!(piped.stdout, from_file);
}

#[test]
fn test_tone_stdout_matches_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let file_out = dir.path().join("tone.wav");
    let tone_args = [
        "tone",
        "--quiet",
        "--frequency",
        "440",
        "--duration",
        "0.1",
        "--sample-rate",
        "22050",
        "--bit-depth",
        "24",
        "--channels",
        "2",
    ];

    let status = wavout()
        .args(tone_args)
        .arg("--output")
        .arg(&file_out)
        .status()
        .unwrap();
    assert!(status.success());

    let piped = wavout().args(tone_args).args(["--output", "-"]).output().unwrap();
    assert!(piped.status.success());

    let from_file = fs::read(&file_out).unwrap();
    // 2205 frames * 2 channels * 3 bytes
    assert_eq!(from_file.len(), 44 + 2205 * 6);
    assert_eq!(piped.stdout, from_file);
}

#[test]
fn test_report_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("silence.json");
    fs::write(&input, SILENCE_DOC).unwrap();

    let piped = wavout()
        .args(["convert", "--json", "--output", "-", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(piped.status.success());
    assert_eq!(piped.stdout.len(), 52);

    let report: serde_json::Value = serde_json::from_slice(&piped.stderr).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["output"], "-");
    assert_eq!(report["summary"]["file_size"], 52);
}

#[test]
fn test_empty_document_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.json");
    let file_out = dir.path().join("empty.wav");
    fs::write(
        &input,
        r#"{ "sample_rate": 44100, "bit_depth": 16, "channels": [] }"#,
    )
    .unwrap();

    let output = wavout()
        .args(["convert", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&file_out)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no channels"));
    assert!(!file_out.exists());
}

#[test]
fn test_unopenable_destination() {
    let output = wavout()
        .args([
            "tone",
            "--duration",
            "0.01",
            "--output",
            "/nonexistent/dir/x.wav",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to open"));
}

#[test]
fn test_header_json() {
    let output = wavout()
        .args([
            "header",
            "--sample-rate",
            "8000",
            "--bit-depth",
            "8",
            "--channels",
            "2",
            "--samples",
            "2",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let expected = concat!(
        "52494646", "28000000", "57415645", // RIFF, size, WAVE
        "666d7420", "10000000", "0100", "0200", // fmt, 16, PCM, channels
        "401f0000", "803e0000", "0200", "0800", // rate, byte rate, align, bits
        "64617461", "04000000", // data, size
    );
    assert_eq!(value["hex"], expected);
}
