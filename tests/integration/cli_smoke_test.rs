//! CLI Smoke Test
//!
//! Runs the release-buckets binary against request files and checks each
//! output format end to end.

use std::path::Path;
use std::process::{Command, Output};

const REQUEST_JSON: &str = r#"{
    "minTime": "2024-01-01T00:00:00Z",
    "maxTime": "2024-01-01T00:00:12.235Z",
    "finalTime": "2024-01-01T00:01:12.235Z",
    "releases": [
        {"version": "1.0.0", "date": "2024-01-01T00:00:00Z"},
        {"version": "1.0.1", "date": 1704067201223},
        {"version": "0.9.9", "date": "2023-12-31T23:59:59Z"},
        {"version": "1.1.0", "date": "2024-01-01T00:00:30Z"}
    ],
    "flags": [
        {"id": 1, "flag": "new-nav", "createdAt": "2024-01-01T00:00:05Z", "action": "created"}
    ]
}"#;

fn write_request(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("timeline.json");
    std::fs::write(&path, content).unwrap();
    path
}

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_release-buckets"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("BUCKETS_PLOTS_DIR", dir.join("plots"))
        .output()
        .expect("failed to run release-buckets binary")
}

#[test]
fn test_bucket_console_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST_JSON);

    let output = run_cli(dir.path(), &["bucket", "--input", input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Release Timeline Buckets"));
    assert!(stdout.contains("1 release: 1.0.0"));
    assert!(stdout.contains("1 release: 1.0.1"));
    assert!(stdout.contains("1 release: 1.1.0"));
    assert!(stdout.contains("1 flag change: new-nav"));
    assert!(!stdout.contains("0.9.9"));
}

#[test]
fn test_bucket_json_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST_JSON);
    let out_path = dir.path().join("report.json");

    let output = run_cli(
        dir.path(),
        &[
            "bucket",
            "--input",
            input.to_str().unwrap(),
            "--format",
            "json",
            "--output",
            out_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    let buckets = report["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 10);
    assert_eq!(buckets[0]["releases"][0]["version"], "1.0.0");
    // 1223ms is the first boundary: belongs to bucket 1
    assert_eq!(buckets[1]["releases"][0]["version"], "1.0.1");
    assert_eq!(buckets[9]["releases"][0]["version"], "1.1.0");
    assert_eq!(buckets[9]["final"], 1_704_067_272_235_i64);
    assert_eq!(report["placedReleases"], 3);
}

#[test]
fn test_bucket_csv_defaults_to_plots_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST_JSON);

    let output = run_cli(
        dir.path(),
        &["bucket", "--input", input.to_str().unwrap(), "--format", "csv", "--buckets", "4"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let csv = std::fs::read_to_string(dir.path().join("plots/release_buckets.csv")).unwrap();
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.lines().next().unwrap().starts_with("index,start,end,final"));
}

#[test]
fn test_cli_time_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST_JSON);
    let out_path = dir.path().join("report.json");

    let output = run_cli(
        dir.path(),
        &[
            "bucket",
            "--input",
            input.to_str().unwrap(),
            "--min-time",
            "2024-01-01T00:00:10Z",
            "--format",
            "json",
            "--output",
            out_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(report["range"]["minTime"], 1_704_067_210_000_i64);
    // Only the release after max time remains in range
    assert_eq!(report["placedReleases"], 1);
}

#[test]
fn test_degenerate_range_reports_no_buckets() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(
        dir.path(),
        r#"{"minTime": 1704067200000, "maxTime": 1704067200000, "finalTime": 1704067300000}"#,
    );

    let output = run_cli(dir.path(), &["bucket", "--input", input.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("No buckets"));
}

#[test]
fn test_zero_buckets_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST_JSON);

    let output = run_cli(
        dir.path(),
        &["bucket", "--input", input.to_str().unwrap(), "--buckets", "0"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Invalid bucket count: 0"));
}

#[test]
fn test_oversized_bucket_count_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(
        dir.path(),
        r#"{"minTime": 1704067200000, "maxTime": 1704067212235, "finalTime": 1704067272235,
            "desiredBuckets": 100000000000000}"#,
    );

    let output = run_cli(dir.path(), &["bucket", "--input", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Invalid bucket count: 100000000000000"));
}

#[test]
fn test_unrepresentable_release_date_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(
        dir.path(),
        r#"{"releases": [{"version": "1.0.0", "date": 9000000000000000}]}"#,
    );

    let output = run_cli(dir.path(), &["bucket", "--input", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Invalid timestamp: 9000000000000000"));
}

#[test]
fn test_malformed_request_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(
        dir.path(),
        r#"{"releases": [{"version": "1.0.0", "date": "yesterday"}]}"#,
    );

    let output = run_cli(dir.path(), &["bucket", "--input", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("Invalid data"));
}

#[test]
fn test_ranges_command() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_cli(
        dir.path(),
        &[
            "ranges",
            "--min-time",
            "1704067200000",
            "--max-time",
            "1704067212235",
            "--final-time",
            "2024-01-01T00:01:00Z",
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].contains("2024-01-01T00:00:00.000Z  2024-01-01T00:00:01.223Z"));
    assert!(lines[9].ends_with("final 2024-01-01T00:01:00.000Z"));
}
