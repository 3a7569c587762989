// Runs the ferrite-classify binary on temporary model and batch files.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const MODEL_JSON: &str = r#"{
    "w1": { "rows": 2, "cols": 3, "data": [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] },
    "w2": { "rows": 2, "cols": 3, "data": [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] },
    "metadata": { "description": "identity 2-2-2", "output_labels": ["left", "right"] }
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

fn run(model: &NamedTempFile, input: &NamedTempFile, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ferrite-classify"))
        .arg("--model")
        .arg(model.path())
        .arg("--input")
        .arg(input.path())
        .args(extra)
        .output()
        .expect("failed to run ferrite-classify")
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout).lines().map(str::to_owned).collect()
}

#[test]
fn prints_one_numeric_label_per_row() {
    let model = write_temp(MODEL_JSON);
    let input = write_temp("f1,f2\n10,-10\n-10,10\n0,3\n");

    let out = run(&model, &input, &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout_lines(&out), vec!["1", "2", "2"]);
}

#[test]
fn every_strategy_prints_the_same_labels() {
    let model = write_temp(MODEL_JSON);
    let input = write_temp("10,-10\n-10,10\n");

    for strategy in ["row-wise", "parallel", "batched"] {
        let out = run(&model, &input, &["--strategy", strategy]);
        assert!(out.status.success(), "{strategy}");
        assert_eq!(stdout_lines(&out), vec!["1", "2"], "{strategy}");
    }
}

#[test]
fn names_flag_prints_metadata_label_names() {
    let model = write_temp(MODEL_JSON);
    let input = write_temp("10,-10\n-10,10\n");

    let out = run(&model, &input, &["--names"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec!["left", "right"]);
}

#[test]
fn unknown_strategy_is_rejected() {
    let model = write_temp(MODEL_JSON);
    let input = write_temp("10,-10\n");

    let out = run(&model, &input, &["--strategy", "gpu"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn mismatched_batch_exits_with_error_and_no_output() {
    let model = write_temp(MODEL_JSON);
    let input = write_temp("1,2,3\n4,5,6\n");

    let out = run(&model, &input, &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("dimension mismatch"));
}

#[test]
fn typo_in_first_row_exits_with_error() {
    let model = write_temp(MODEL_JSON);
    let input = write_temp("1,oops\n3,4\n");

    let out = run(&model, &input, &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("CSV line 1"));
}

#[test]
fn debug_events_follow_rust_log() {
    let model = write_temp(MODEL_JSON);
    let input = write_temp("10,-10\n");

    let out = Command::new(env!("CARGO_BIN_EXE_ferrite-classify"))
        .env("RUST_LOG", "ferrite_classify=debug")
        .arg("--model")
        .arg(model.path())
        .arg("--input")
        .arg(input.path())
        .output()
        .expect("failed to run ferrite-classify");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("predicting batch"));
}
