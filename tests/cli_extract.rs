use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn bin_path() -> PathBuf {
    std::env::var("CARGO_BIN_EXE_dex")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("target")
                .join("debug")
                .join(if cfg!(windows) { "dex.exe" } else { "dex" })
        })
}

fn run_cmd(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .expect("run dex command")
}

fn parse_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("output should be valid JSON")
}

fn sample_document() -> String {
    serde_json::json!({
        "document": {
            "type": "DOCUMENT",
            "children": [{
                "type": "FRAME",
                "name": "Welcome back",
                "absoluteBoundingBox": { "x": 0.0, "y": 0.0, "width": 375.0, "height": 812.0 },
                "children": [
                    { "type": "RECTANGLE", "name": "Email input",
                      "absoluteBoundingBox": { "x": 24.0, "y": 200.0, "width": 327.0, "height": 44.0 } }
                ]
            }]
        }
    })
    .to_string()
}

fn write_input(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write input");
    file
}

#[test]
fn extract_from_file_prints_properties_json() {
    let input = write_input(&sample_document());
    let output = run_cmd(&["extract", input.path().to_str().unwrap()]);

    assert!(
        output.status.success(),
        "extract should exit 0, got {:?}",
        output.status.code()
    );

    let value = parse_json(&output.stdout);
    assert_eq!(value["screenType"], "login");
    assert_eq!(value["elements"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["formFields"][0]["type"], "email");
    assert_eq!(value["dimensions"]["width"], 375.0);
}

#[test]
fn extract_reads_stdin_with_dash() {
    let mut child = Command::new(bin_path())
        .args(["extract", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn dex");
    child
        .stdin
        .as_mut()
        .expect("stdin")
        .write_all(sample_document().as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for dex");

    assert!(output.status.success());
    let value = parse_json(&output.stdout);
    assert_eq!(value["screenType"], "login");
}

#[test]
fn extract_writes_output_file_when_requested() {
    let input = write_input(&sample_document());
    let dir = tempfile::tempdir().expect("temp dir");
    let out_path = dir.path().join("report.json");

    let output = run_cmd(&[
        "extract",
        input.path().to_str().unwrap(),
        "--output",
        out_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let written = std::fs::read_to_string(&out_path).expect("read report");
    let value: serde_json::Value = serde_json::from_str(&written).expect("report JSON");
    assert_eq!(value["screenType"], "login");
}

#[test]
fn pretty_format_to_file_is_indented_json() {
    let input = write_input(&sample_document());
    let dir = tempfile::tempdir().expect("temp dir");
    let out_path = dir.path().join("report.json");

    let output = run_cmd(&[
        "extract",
        input.path().to_str().unwrap(),
        "--format",
        "pretty",
        "--output",
        out_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let written = std::fs::read_to_string(&out_path).expect("read report");
    assert!(written.contains("\n  "), "file output should be indented");
}

#[test]
fn malformed_input_reports_input_error_and_exit_2() {
    let input = write_input("this is not json");
    let output = run_cmd(&["extract", input.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let value = parse_json(&output.stdout);
    assert_eq!(value["error"]["category"], "input");
    assert!(value["error"]["remediation"].is_string());
}

#[test]
fn missing_input_file_reports_io_error() {
    let output = run_cmd(&["extract", "/nonexistent/design.json"]);

    assert_eq!(output.status.code(), Some(2));
    let value = parse_json(&output.stdout);
    assert_eq!(value["error"]["category"], "io");
}

#[test]
fn invalid_config_reports_config_error() {
    let input = write_input(&sample_document());
    let config = write_input("spacing-threshold = -5.0");

    let output = run_cmd(&[
        "--config",
        config.path().to_str().unwrap(),
        "extract",
        input.path().to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let value = parse_json(&output.stdout);
    assert_eq!(value["error"]["category"], "config");
    assert!(value["error"]["message"]
        .as_str()
        .unwrap()
        .contains("spacing-threshold"));
}
