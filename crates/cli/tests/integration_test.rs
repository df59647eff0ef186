//! End-to-end tests for the `occurs` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn occurs() -> Command {
    Command::new(env!("CARGO_BIN_EXE_occurs"))
}

/// Parses `count line` output into a map, ignoring order.
fn parse_plain(stdout: &[u8]) -> HashMap<String, u64> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|row| {
            let (count, line) = row.split_once(' ').unwrap();
            (line.to_string(), count.parse().unwrap())
        })
        .collect()
}

fn sample_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("one.txt"), "this\nis\na\ntest").unwrap();
    fs::write(dir.path().join("two.txt"), "so\n\nIs\nthis").unwrap();
    dir
}

fn expected_sample() -> HashMap<String, u64> {
    [("this", 2), ("is", 2), ("a", 1), ("test", 1), ("so", 1)]
        .into_iter()
        .map(|(l, c)| (l.to_string(), c))
        .collect()
}

#[test]
fn shows_help() {
    occurs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("occurs"))
        .stdout(predicate::str::contains("--trim-space"));
}

#[test]
fn counts_sample_concurrently() {
    let dir = sample_dir();
    let output = occurs()
        .current_dir(dir.path())
        .args(["--ts", "--ic", "--se", "one.txt", "two.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parse_plain(&output), expected_sample());
}

#[test]
fn counts_sample_sequentially() {
    let dir = sample_dir();
    let output = occurs()
        .current_dir(dir.path())
        .args(["--seq", "--trim-space", "--ignore-case", "--skip-empty", "one.txt", "two.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parse_plain(&output), expected_sample());
}

#[test]
fn reads_stdin_without_paths() {
    occurs()
        .args(["--sort"])
        .write_stdin("b\na\nb\n")
        .assert()
        .success()
        .stdout("2 b\n1 a\n");
}

#[test]
fn dash_reads_stdin_alongside_files() {
    let dir = sample_dir();
    let output = occurs()
        .current_dir(dir.path())
        .args(["--seq", "one.txt", "-"])
        .write_stdin("this\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let counts = parse_plain(&output);
    assert_eq!(counts.get("this"), Some(&2));
    assert_eq!(counts.get("test"), Some(&1));
}

#[test]
fn missing_file_is_skipped() {
    let dir = sample_dir();
    occurs()
        .current_dir(dir.path())
        .args(["--sort", "missing.txt", "one.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping \"missing.txt\""))
        .stdout(predicate::str::contains("1 test"));
}

#[test]
fn strict_fails_on_missing_file() {
    let dir = sample_dir();
    occurs()
        .current_dir(dir.path())
        .args(["--strict", "one.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn columns_are_aligned() {
    let mut input = String::new();
    for _ in 0..10 {
        input.push_str("many\n");
    }
    input.push_str("once\n");

    occurs()
        .args(["--cols", "--sort"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("10 many\n 1 once\n");
}

#[test]
fn json_output_is_an_object() {
    let output = occurs()
        .args(["--format", "json", "--ic"])
        .write_stdin("A\na\nb")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["a"], 2);
    assert_eq!(value["b"], 1);
}

#[test]
fn whitespace_line_kept_without_trim() {
    occurs()
        .args(["--se", "--format", "json"])
        .write_stdin("  \n\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"  \": 1"))
        .stdout(predicate::str::contains("\"\":").not());
}

#[test]
fn empty_input_prints_nothing() {
    occurs().write_stdin("").assert().success().stdout("");
}

#[test]
fn rejects_zero_channel_capacity() {
    occurs()
        .args(["--channel-capacity", "0"])
        .assert()
        .failure()
        .code(2);
}
