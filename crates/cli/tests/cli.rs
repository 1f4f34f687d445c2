// ABOUTME: Integration tests for the run-parsers binary.
// ABOUTME: Uses shell scripts standing in for the parser executables.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn run_parsers() -> Command {
    Command::cargo_bin("run-parsers").unwrap()
}

#[test]
fn unknown_step_is_rejected() {
    let temp = TempDir::new().unwrap();
    run_parsers()
        .arg("--bin-dir")
        .arg(temp.path())
        .args(["--only", "jokes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown step"));
}

#[test]
fn empty_bin_dir_reports_missing_parsers() {
    let temp = TempDir::new().unwrap();
    run_parsers()
        .env_remove("RUST_LOG")
        .arg("--bin-dir")
        .arg(temp.path())
        .arg("--data-dir")
        .arg(temp.path().join("data"))
        .args(["--pause-ms", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not found: parse-names"))
        .stdout(predicate::str::contains("not found: parse-words"))
        .stdout(predicate::str::contains("total: 0 bytes"))
        .stderr(predicate::str::contains("parser not found"));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn fake_parser(dir: &Path, name: &str) {
        let path = dir.join(name);
        let body = r#"#!/bin/sh
out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "--output" ]; then out="$2"; fi
  shift
done
mkdir -p "$(dirname "$out")"
printf '{"totalWords":0}' > "$out"
echo "saved $out"
"#;
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn only_selected_step_runs_and_succeeds() {
        let bins = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        fake_parser(bins.path(), "parse-words");

        run_parsers()
            .arg("--bin-dir")
            .arg(bins.path())
            .arg("--data-dir")
            .arg(data.path())
            .args(["--only", "words", "--pause-ms", "0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: Russian words"))
            .stdout(predicate::str::contains("parsed_words.json - 16 bytes"))
            .stdout(predicate::str::contains("parse-names").not());

        assert!(data.path().join("parsed_words.json").is_file());
    }

    #[test]
    fn json_summary_lists_steps_and_files() {
        let bins = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        fake_parser(bins.path(), "parse-names");
        fake_parser(bins.path(), "parse-quotes");

        let output = run_parsers()
            .arg("--bin-dir")
            .arg(bins.path())
            .arg("--data-dir")
            .arg(data.path())
            .args(["--pause-ms", "0", "--json"])
            .assert()
            .code(1)
            .get_output()
            .stdout
            .clone();

        let summary: Value = serde_json::from_slice(&output).unwrap();
        let statuses: Vec<&str> = summary["steps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["status"].as_str().unwrap())
            .collect();
        assert_eq!(statuses, vec!["succeeded", "succeeded", "missing"]);
        assert_eq!(summary["files"][0]["size"], 16);
        assert!(summary["files"][2]["size"].is_null());
        assert_eq!(summary["total_bytes"], 32);
    }
}
