use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write input");
    path
}

fn run(config_home: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("dialbook")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run command")
}

fn run_ok(config_home: &Path, args: &[&str]) -> String {
    let output = run(config_home, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn cli_prints_valid_records_sorted() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "numbers.txt",
        "Alice\t4045551234\nBob\tinvalid\nCarol\t(212) 555-0199\nDana\t1-800-FLOWERS\n",
    );

    let stdout = run_ok(temp.path(), &[input.to_str().expect("path")]);
    assert_eq!(
        stdout,
        "(212) 555-0199\tCarol\n(404) 555-1234\tAlice\n(800) 356-9377\tDana\n"
    );
}

#[test]
fn cli_keeps_file_order_for_duplicate_numbers() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "numbers.txt",
        "Zed\t404-555-1234\nAmy\t(404) 555-1234\n",
    );

    let stdout = run_ok(temp.path(), &[input.to_str().expect("path")]);
    assert_eq!(stdout, "(404) 555-1234\tZed\n(404) 555-1234\tAmy\n");
}

#[test]
fn cli_splits_carriage_return_only_lines() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "numbers.txt",
        "Alice\t4045551234\rBob\t4041234567\rCarol\t2125550199\r",
    );

    let stdout = run_ok(temp.path(), &[input.to_str().expect("path")]);
    assert_eq!(stdout, "(212) 555-0199\tCarol\n(404) 555-1234\tAlice\n");
}

#[test]
fn cli_prints_nothing_when_no_record_validates() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "numbers.txt", "Bob\tinvalid\n\nLonely\n");

    let stdout = run_ok(temp.path(), &[input.to_str().expect("path")]);
    assert!(stdout.is_empty());
}

#[test]
fn cli_json_output_lists_records() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "numbers.txt",
        "Alice\t4045551234\nCarol\t(212) 555-0199\n",
    );

    let stdout = run_ok(temp.path(), &["--json", input.to_str().expect("path")]);
    let value: Value = serde_json::from_str(&stdout).expect("parse json");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Carol");
    assert_eq!(items[0]["number"], "(212) 555-0199");
    assert_eq!(items[0]["digits"], "2125550199");
    assert_eq!(items[1]["name"], "Alice");
}

#[test]
fn cli_reads_json_input() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        temp.path(),
        "numbers.json",
        r#"[
            {"name": "Alice", "number": 4045551234},
            {"name": "Bob", "number": 12.5},
            {"name": "Carol", "number": "(212) 555-0199"}
        ]"#,
    );

    let stdout = run_ok(
        temp.path(),
        &["--format", "json", input.to_str().expect("path")],
    );
    assert_eq!(stdout, "(212) 555-0199\tCarol\n(404) 555-1234\tAlice\n");
}

#[test]
fn cli_rejects_malformed_json_document() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "numbers.json", "{\"name\": \"Alice\"}");

    let output = run(
        temp.path(),
        &["--format", "json", input.to_str().expect("path")],
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_fails_on_missing_file() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.txt");

    let output = run(temp.path(), &[missing.to_str().expect("path")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("error: read input file"), "stderr: {stderr}");
}

#[test]
fn cli_applies_config_file_defaults() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("dialbook");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(config_dir.join("config.toml"), "output_format = \"json\"\n").expect("config");
    let input = write_input(temp.path(), "numbers.txt", "Carol\t2125550199\n");

    let stdout = run_ok(temp.path(), &[input.to_str().expect("path")]);
    let value: Value = serde_json::from_str(&stdout).expect("parse json");
    assert_eq!(value[0]["name"], "Carol");
}

#[test]
fn cli_rejects_missing_explicit_config() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "numbers.txt", "Carol\t2125550199\n");
    let config = temp.path().join("nope.toml");

    let output = run(
        temp.path(),
        &[
            "--config",
            config.to_str().expect("path"),
            input.to_str().expect("path"),
        ],
    );
    assert_eq!(output.status.code(), Some(3));
}
