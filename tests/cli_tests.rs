use assert_cmd::Command;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn scamscan(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scamscan"));
    cmd.current_dir(dir.path())
        .env_remove("SCAMSCAN_DEBUG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_scan_json_output() {
    let dir = TempDir::new().unwrap();
    let assert = scamscan(&dir)
        .args([
            "scan",
            "--format",
            "json",
            "URGENT: verify your account now, click http://bit.ly/xyz",
        ])
        .assert()
        .success();

    let body = stdout_json(assert.get_output());
    assert_eq!(body["threatLevel"], "High");
    assert_eq!(body["result"], "Likely Scam");
}

#[test]
fn test_scan_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let assert = scamscan(&dir)
        .args(["scan", "--format", "json"])
        .write_stdin("Hi, just checking in on the project status.")
        .assert()
        .success();

    let body = stdout_json(assert.get_output());
    assert_eq!(body["score"], 0);
    assert_eq!(body["threatLevel"], "Low");
}

#[test]
fn test_scan_reads_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("msg.txt"), "claim your prize").unwrap();
    let assert = scamscan(&dir)
        .args(["scan", "--format", "json", "--file", "msg.txt"])
        .assert()
        .success();

    assert_eq!(stdout_json(assert.get_output())["score"], 4);
}

#[test]
fn test_scan_empty_text_exits_2() {
    let dir = TempDir::new().unwrap();
    scamscan(&dir).args(["scan", "   "]).assert().code(2);
}

#[test]
fn test_request_exit_codes() {
    let dir = TempDir::new().unwrap();
    let ok = scamscan(&dir)
        .arg("request")
        .write_stdin(r#"{"text":"see you at lunch"}"#)
        .assert()
        .success();
    assert_eq!(stdout_json(ok.get_output())["result"], "Likely Safe");

    let bad = scamscan(&dir)
        .arg("request")
        .write_stdin(r#"{"text": 12}"#)
        .assert()
        .code(2);
    assert_eq!(stdout_json(bad.get_output())["error"], "invalid_input");
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    scamscan(&dir).arg("init").assert().success();
    let written = std::fs::read_to_string(dir.path().join(".scamscan.toml")).unwrap();
    assert!(written.contains("[thresholds]"));

    scamscan(&dir).arg("init").assert().failure();
    scamscan(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_config_file_changes_tiers() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".scamscan.toml"),
        "[thresholds]\nhigh = 3\nmedium = 2\nlow = 1\n",
    )
    .unwrap();

    let assert = scamscan(&dir)
        .args(["scan", "--format", "json", "claim your prize"])
        .assert()
        .success();
    assert_eq!(stdout_json(assert.get_output())["threatLevel"], "High");
}

#[test]
fn test_invalid_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("bad.toml"),
        "[thresholds]\nhigh = 1\nmedium = 5\nlow = 0\n",
    )
    .unwrap();

    let assert = scamscan(&dir)
        .args(["scan", "--config", "bad.toml", "hello"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("bad.toml"), "{stderr}");
    assert!(stderr.contains("[E022]"), "{stderr}");
    assert!(stderr.contains("thresholds.high"), "{stderr}");
}

#[test]
fn test_categories_lists_defaults() {
    let dir = TempDir::new().unwrap();
    let assert = scamscan(&dir)
        .env("NO_COLOR", "1")
        .arg("categories")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in ["urgency", "authentication", "financial", "personal_info", "action"] {
        assert!(stdout.contains(name), "missing {name}");
    }
}
