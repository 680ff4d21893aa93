use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn alogger(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_alogger"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn alogger");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn message_words_go_to_stderr_with_tags() {
    let dir = TempDir::new().unwrap();
    let out = alogger(&dir)
        .args(["-s", "error", "-t", "alpha", "--tag", "beta"])
        .args(["bad", "thing", "happened"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("[lcl] ERROR:[alpha][beta] bad thing happened\n"));
}

#[test]
fn missing_config_file_is_reported_on_stderr() {
    let dir = TempDir::new().unwrap();
    let out = alogger(&dir).arg("hello").output().unwrap();

    assert!(out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("configuration file not found; using defaults"));
    assert!(stderr.contains("alogger.yaml"));
    assert!(stderr.contains("[lcl] INFO: hello\n"));
}

#[test]
fn present_config_file_is_not_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("alogger.yaml"), "tags: [svc]\n").unwrap();
    let out = alogger(&dir).arg("hello").output().unwrap();

    assert!(out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(!stderr.contains("configuration file not found"));
    assert!(stderr.contains("INFO:[svc] hello\n"));
}

#[test]
fn stdin_lines_are_emitted_one_per_line() {
    let dir = TempDir::new().unwrap();
    let mut cmd = alogger(&dir);
    cmd.args(["--severity", "warning", "--utc"]);

    let out = run_with_stdin(cmd, "first\nsecond\n");

    assert!(out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("[utc] WARNING: first\n"));
    assert!(stderr.contains("[utc] WARNING: second\n"));
}

#[test]
fn fatal_writes_line_then_exits_with_status_one() {
    let dir = TempDir::new().unwrap();
    let out = alogger(&dir)
        .args(["-s", "fatal", "-t", "core", "going", "down"])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("FATAL:[core] going down\n"));
}

#[test]
fn fatal_stops_after_first_stdin_line() {
    let dir = TempDir::new().unwrap();
    let mut cmd = alogger(&dir);
    cmd.args(["-s", "fatal"]);

    let out = run_with_stdin(cmd, "one\ntwo\n");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("FATAL: one\n"));
    assert!(!stderr.contains("FATAL: two"));
}

#[test]
fn config_labels_and_output_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.yaml");
    std::fs::write(
        &config,
        "local_time: false\n\
         labels: { info: INK, debug: DOT, warning: WHY, error: EEL, fatal: FUN }\n\
         time_labels: { local: \"<here>\", utc: \"<zulu>\" }\n\
         tags: [svc]\n",
    )
    .unwrap();
    let output = dir.path().join("out.log");

    for word in ["one", "two"] {
        let status = alogger(&dir)
            .arg("--config")
            .arg(&config)
            .arg("--output")
            .arg(&output)
            .args(["-t", "api", word])
            .status()
            .unwrap();
        assert!(status.success());
    }

    let written = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("<zulu> INK:[svc][api] one"));
    assert!(lines[1].ends_with("<zulu> INK:[svc][api] two"));
    assert!(!written.contains("INFO"));
}

#[test]
fn empty_label_in_config_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("alogger.yaml"), "labels:\n  debug: \"\"\n").unwrap();
    let output = dir.path().join("out.log");

    let out = alogger(&dir)
        .arg("--output")
        .arg(&output)
        .arg("ignored")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid debug label specified"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn unknown_severity_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let out = alogger(&dir).args(["-s", "trace", "x"]).output().unwrap();

    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown severity"));
}
