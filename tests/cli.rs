//! End-to-end tests for the calplan binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

const SAMPLE: &str = "\
Start: 2020-03-09
End: 2020-03-13
Weekdays: Mon, Fri
---
First day
---
Second day
";

const SAMPLE_RST: &str = "\
2020-03-09 (Mon)
----------------

First day

2020-03-13 (Fri)
----------------

Second day
";

/// A calplan command with HOME pointed at a scratch dir, so the user's
/// real config never leaks into tests.
fn calplan(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("calplan").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

fn sample_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn render_writes_rst_to_stdout() {
    let home = TempDir::new().unwrap();
    let file = sample_file(SAMPLE);

    calplan(&home)
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .stdout(SAMPLE_RST);
}

#[test]
fn render_markdown_target() {
    let home = TempDir::new().unwrap();
    let file = sample_file(SAMPLE);

    calplan(&home)
        .arg("render")
        .arg(file.path())
        .args(["--to", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2020-03-09 (Mon)"));
}

#[test]
fn render_to_output_file() {
    let home = TempDir::new().unwrap();
    let file = sample_file(SAMPLE);
    let out = home.path().join("calendar.rst");

    calplan(&home)
        .arg("render")
        .arg(file.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(std::fs::read_to_string(out).unwrap(), SAMPLE_RST);
}

#[test]
fn render_reads_stdin_for_dash() {
    let home = TempDir::new().unwrap();

    calplan(&home)
        .args(["render", "-"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(SAMPLE_RST);
}

#[test]
fn render_is_deterministic() {
    let home = TempDir::new().unwrap();
    let file = sample_file(SAMPLE);

    let first = calplan(&home)
        .arg("render")
        .arg(file.path())
        .output()
        .unwrap();
    let second = calplan(&home)
        .arg("render")
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn check_valid_schedule_exits_zero() {
    let home = TempDir::new().unwrap();
    let file = sample_file(SAMPLE);

    calplan(&home)
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("schedule is valid"));
}

#[test]
fn check_unrecognized_weekday_fails() {
    let home = TempDir::new().unwrap();
    let file = sample_file("Start: 2020-03-09\nEnd: 2020-03-13\nWeekdays: Xyz\n---\nx\n");

    calplan(&home)
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("unrecognized weekday name 'Xyz'"));
}

#[test]
fn check_skip_out_of_range_fails() {
    let home = TempDir::new().unwrap();
    let file = sample_file(
        "Start: 2020-03-02\nEnd: 2020-04-01\nWeekdays: Mon\nSkip:\n- 2020-04-10: away\n---\nx\n",
    );

    calplan(&home)
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2020-04-10"));
}

#[test]
fn check_block_count_mismatch_fails() {
    let home = TempDir::new().unwrap();
    let file = sample_file("Start: 2020-03-09\nEnd: 2020-03-13\nWeekdays: Mon, Fri\n---\nonly\n");

    calplan(&home)
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("block count mismatch"));
}

#[test]
fn info_reports_summary_json() {
    let home = TempDir::new().unwrap();
    let file = sample_file(SAMPLE);

    let output = calplan(&home)
        .arg("info")
        .arg(file.path())
        .args(["--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["start"], "2020-03-09");
    assert_eq!(value["real_end"], "2020-03-13");
    assert_eq!(value["active_days"], 2);
    assert_eq!(value["skip_days"], 0);
}

#[test]
fn missing_input_file_fails() {
    let home = TempDir::new().unwrap();

    calplan(&home)
        .args(["check", "/no/such/schedule.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/no/such/schedule.txt"));
}

#[test]
fn completions_bash_prints_script() {
    let home = TempDir::new().unwrap();

    calplan(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("calplan"));
}

#[test]
fn config_default_target_is_honored() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".calplan");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.yaml"),
        "general:\n  default_target: markdown\n",
    )
    .unwrap();

    let file = sample_file(SAMPLE);
    calplan(&home)
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2020-03-09 (Mon)"));
}
