use assert_cmd::prelude::*;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::process::Command;

fn check_cmd() -> Command {
    let mut cmd = Command::cargo_bin("json-array-check").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn fixture(dir: &TempDir, name: &str, content: &str) -> assert_fs::fixture::ChildPath {
    let file = dir.child(name);
    file.write_str(content).unwrap();
    file
}

#[test]
fn valid_file_reports_count() {
    let dir = TempDir::new().unwrap();
    let file = fixture(
        &dir,
        "stoptimes.json",
        "[\n  {\"trip_id\": \"1\", \"stop_id\": \"A\"},\n  {\"trip_id\": \"1\", \"stop_id\": \"B\"}\n]\n",
    );

    check_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("🔍 Validating file:"))
        .stdout(predicate::str::contains(
            "✅ Valid JSON array. 2 objects read successfully.",
        ));
}

#[test]
fn relative_path_is_resolved_against_current_dir() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "feed.json", "[{}]");

    check_cmd()
        .current_dir(dir.path())
        .arg("feed.json")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"🔍 Validating file: /.*feed\.json").unwrap())
        .stdout(predicate::str::contains("1 objects read successfully."));
}

#[test]
fn missing_file_is_reported_with_exit_zero() {
    let dir = TempDir::new().unwrap();
    let missing = dir.child("nope.json");

    check_cmd()
        .arg(missing.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ file does not exist"));
}

#[test]
fn bare_object_fails_opening_check() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "object.json", r#"{"a":1}"#);

    check_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ file does not start with '['"));
}

#[test]
fn trailing_garbage_fails_closing_check() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "garbage.json", r#"[{"a":1}]x"#);

    check_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ file does not end with ']'"));
}

#[test]
fn scalar_item_reports_index() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "mixed.json", r#"[{"a":1},{"b":2},3,{"c":4}]"#);

    check_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "❌ element at index 2 is not a JSON object",
        ))
        .stdout(predicate::str::contains("objects read successfully").not());
}

#[test]
fn syntax_error_is_reported_without_panic() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "broken.json", r#"[{"a":1},{"b" 2}]"#);

    check_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ error while reading or parsing:"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn empty_and_whitespace_files_fail() {
    let dir = TempDir::new().unwrap();
    for (name, content) in [("empty.json", ""), ("blank.json", " \n\t\n")] {
        let file = fixture(&dir, name, content);
        check_cmd()
            .arg(file.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("❌"))
            .stdout(predicate::str::contains("✅").not());
    }
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "data.json", r#"[{"a":1}]"#);

    check_cmd()
        .arg(file.path())
        .args(["second.json", "third.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 objects read successfully."));
}

#[test]
fn no_arguments_uses_default_path() {
    check_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("ℹ️ No path given, using default:"))
        .stdout(predicate::str::contains("data/stoptimes.json"))
        .stdout(predicate::str::contains("🔍 Validating file:"))
        // target/<profile>/../data/stoptimes.json is not part of the build tree
        .stdout(predicate::str::contains("❌ file does not exist"));
}

#[test]
fn strict_mode_exits_non_zero_on_failure() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "bad.json", "[1]");

    check_cmd()
        .arg("--strict")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ element at index 0"));
}

#[test]
fn strict_mode_exits_zero_on_success() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "good.json", "[]");

    check_cmd()
        .arg("--strict")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 objects read successfully."));
}

#[test]
fn json_format_for_success() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file = fixture(&dir, "good.json", r#"[{"a":1},{"b":2}]"#);

    let output = check_cmd()
        .args(["--format", "json"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output)?;
    assert_eq!(report["valid"], Value::Bool(true));
    assert_eq!(report["item_count"], 2);
    assert!(report.get("kind").is_none());
    Ok(())
}

#[test]
fn json_format_for_failure() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file = fixture(&dir, "bad.json", r#"[{"a":1},"x"]"#);

    let output = check_cmd()
        .args(["--format", "json"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output)?;
    assert_eq!(report["valid"], Value::Bool(false));
    assert_eq!(report["kind"], "invalid_item");
    assert_eq!(report["index"], 1);
    assert!(report["detail"].as_str().unwrap().contains("found a string"));
    Ok(())
}

#[test]
fn verbose_renders_diagnostic_on_stderr() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "object.json", r#"{"a":1}"#);

    check_cmd()
        .arg("-v")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("json_array_check::malformed_boundary"));
}
