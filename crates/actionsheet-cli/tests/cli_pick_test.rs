#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_pick_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.args(["pick", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--event"))
        .stdout(predicate::str::contains("--destructive-index"));
}

#[test]
fn test_pick_scripted_tap() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["pick", "Copy", "Move", "--event", "tap:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session #1 rows: [Copy, Move]"))
        .stdout(predicate::str::contains("Request #1 result: 1"));
}

#[test]
fn test_pick_scripted_cancel_row() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["pick", "Copy", "--cancel", "Cancel", "--event", "cancel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Request #1 result: -1"));
}

#[test]
fn test_pick_invalid_tint_uses_default_color() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .args([
            "pick",
            "Copy",
            "--cancel",
            "Cancel",
            "--tint-color",
            "not-a-color",
            "--event",
            "dismiss",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session #1 cancel: Cancel (#222222)"))
        .stdout(predicate::str::contains("Request #1 result: -1"));
}

#[test]
fn test_pick_request_file_filters_non_strings() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let request = write(&dir, "request.json", r#"{"options":["A",42,"B"]}"#);

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["pick", "--request", &request, "--event", "tap:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session #1 rows: [A, B]"))
        .stdout(predicate::str::contains("Request #1 result: 1"));
}

#[test]
fn test_pick_batch_ignores_while_busy() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let request = write(&dir, "batch.json", r#"[{"options":["A"]},{"options":["B"]}]"#);

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["pick", "--request", &request, "--event", "tap:0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Request #1 result: 0"))
        .stdout(predicate::str::contains("Request #2 ignored (dialog busy)"));
}

#[test]
fn test_pick_batch_reject_policy() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let request = write(&dir, "batch.json", r#"[{"options":["A"]},{"options":["B"]}]"#);

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .args([
            "pick",
            "--request",
            &request,
            "--policy",
            "reject",
            "--event",
            "dismiss",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Request #1 result: -1"))
        .stdout(predicate::str::contains("Request #2 rejected"));
}

#[test]
fn test_pick_batch_queue_policy_from_config() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "config.toml", "[controller]\nbusy_policy = \"queue\"\n");
    let request = write(&dir, "batch.json", r#"[{"options":["A"]},{"options":["B","C"]}]"#);

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .args([
            "pick",
            "--request",
            &request,
            "--event",
            "tap:0",
            "--event",
            "tap:1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session #2 rows: [B, C]"))
        .stdout(predicate::str::contains("Request #1 result: 0"))
        .stdout(predicate::str::contains("Request #2 result: 1"));
}

#[test]
fn test_pick_unfinished_script_reports_unsettled() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["pick", "A", "--event", "tap:5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Request #1 not settled"));
}

#[test]
fn test_pick_invalid_event() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.args(["pick", "A", "--event", "select"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid event"));
}

#[test]
fn test_pick_invalid_policy() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.args(["pick", "A", "--policy", "wait", "--event", "dismiss"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant `wait`"));
}

#[test]
fn test_pick_missing_request_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .arg("pick")
        .arg("--request")
        .arg(&missing)
        .args(["--event", "dismiss"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_config_shows_defaults() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("actionsheet");
    cmd.arg("--dir")
        .arg(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("busy_policy = \"ignore\""));
}
