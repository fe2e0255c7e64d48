//! Integration tests for weft CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_weft"))
}

/// Get the path to a file under `test_assets/`.
fn asset(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from weft-cli to crates
    path.pop(); // Go up from crates to repo root
    path.push("test_assets");
    path.push(name);
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn weave() -> String {
    asset("weave.pat").to_str().unwrap().to_string()
}

#[test]
fn render_command_produces_svg() {
    let output = run(&["render", &weave()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains(r#"width="640""#), "Should use the default width");
    assert!(stdout.contains("<line"), "Should have line elements");
    assert!(stdout.contains(r#"stroke-dasharray="8 4""#), "Dashes should be absolute");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn render_command_produces_json() {
    let output = run(&["render", &weave(), "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(value["stats"]["rows"], 2);
    assert_eq!(value["canvas"]["width"], 640);

    let strokes = value["strokes"].as_array().expect("strokes array");
    assert!(!strokes.is_empty());
    assert_eq!(value["stats"]["strokes"], strokes.len());
    assert!(strokes.iter().any(|s| s["lane"] == 1 && s["phase"] == -4.0));
}

#[test]
fn render_reads_stdin() {
    let mut child = Command::new(binary_path())
        .args(["render", "-", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"45, 0,0, 0,20\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["rows"], 1);
    assert!(value["stats"]["strokes"].as_u64().unwrap() > 0);
}

#[test]
fn settings_file_and_flags_override_defaults() {
    let config = asset("settings.yaml");
    let output = run(&[
        "render",
        &weave(),
        "--config",
        config.to_str().unwrap(),
        "--height",
        "150",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"viewBox="0 0 200 150""#), "{}", stdout);
    assert!(stdout.contains(r#"scale(2)"#));
    assert!(stdout.contains(r##"stroke="#336699""##));
}

#[test]
fn render_writes_png() {
    let out = std::env::temp_dir().join(format!("weft-test-{}.png", std::process::id()));
    let output = run(&["render", &weave(), "-o", out.to_str().unwrap(), "--width", "64", "--height", "48"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let bytes = std::fs::read(&out).expect("PNG should be written");
    assert!(bytes.starts_with(b"\x89PNG"), "Should be a PNG file");
    std::fs::remove_file(&out).ok();
}

#[test]
fn png_to_stdout_is_refused() {
    let output = run(&["render", &weave(), "--format", "png"]);
    assert!(!output.status.success());
}

#[test]
fn invalid_color_fails() {
    let output = run(&["render", &weave(), "--color", "not-a-color"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "Should report the error: {}", stderr);
}

#[test]
fn missing_pattern_file_fails() {
    let output = run(&["render", "does/not/exist.pat"]);
    assert!(!output.status.success());
}

#[test]
fn rows_command_lists_accepted_rows() {
    let output = run(&["rows", &weave()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(6, 0)"), "Should list the second row's base");
    assert!(stdout.contains("8 4"));
    assert!(stdout.contains("2 rows"), "Header and comment lines are dropped");
}

#[test]
fn benchmark_command_runs() {
    let output = run(&["benchmark", &weave(), "--iterations", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BENCHMARK"), "Should show benchmark header");
    assert!(stdout.contains("Strokes per pass"));
    assert!(stdout.contains("Time"), "Should show timing");
}

#[test]
fn help_command_shows_usage() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("render"), "Should mention render command");
    assert!(stdout.contains("rows"), "Should mention rows command");
    assert!(stdout.contains("benchmark"), "Should mention benchmark command");
}
