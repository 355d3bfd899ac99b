mod common;

use common::BotbookProcess;

// ============================================================================
// version command
// ============================================================================

#[test]
fn version_human() {
    let output = BotbookProcess::spawn_command(&["version"]);
    assert!(
        output.status.success(),
        "version should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("botbook"),
        "version output should contain 'botbook': {stdout}"
    );
    assert!(
        stdout.contains('.'),
        "version output should contain a version number: {stdout}"
    );
}

#[test]
fn version_json() {
    let output = BotbookProcess::spawn_command(&["version", "--format", "json"]);
    assert!(
        output.status.success(),
        "version --format json should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("version JSON should be valid");
    assert_eq!(parsed.get("name").and_then(|v| v.as_str()), Some("botbook"));
    assert!(
        parsed.get("version").is_some(),
        "JSON should have 'version' key: {stdout}"
    );
}

// ============================================================================
// completions command
// ============================================================================

#[test]
fn completions_bash() {
    let output = BotbookProcess::spawn_command(&["completions", "bash"]);
    assert!(
        output.status.success(),
        "completions bash should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completions bash should produce output");
    assert!(
        stdout.contains("botbook"),
        "bash completions should reference botbook: {stdout}"
    );
}

#[test]
fn completions_zsh() {
    let output = BotbookProcess::spawn_command(&["completions", "zsh"]);
    assert!(
        output.status.success(),
        "completions zsh should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completions zsh should produce output");
}

// ============================================================================
// render command
// ============================================================================

#[test]
fn render_to_stdout() {
    let output = BotbookProcess::spawn_command(&["render"]);
    assert!(
        output.status.success(),
        "render should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<!DOCTYPE html>"));
    assert!(stdout.contains("Build, launch, and scale a Telegram bot with confidence."));
    assert!(stdout.contains("Six-Step Playbook"));
}

#[test]
fn render_is_deterministic_across_runs() {
    let first = BotbookProcess::spawn_command(&["render"]);
    let second = BotbookProcess::spawn_command(&["render"]);
    assert!(first.status.success() && second.status.success());
    assert_eq!(
        first.stdout, second.stdout,
        "two renders should be byte-identical"
    );
}

#[test]
fn render_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("playbook.html");

    let output = BotbookProcess::spawn_command(&["render", "--output", path.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "render --output should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = std::fs::read_to_string(&path).expect("output file should exist");
    assert!(written.starts_with("<!DOCTYPE html>"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("wrote"),
        "render --output should report bytes written: {stderr}"
    );
}

#[test]
fn render_to_unwritable_path_fails() {
    let output = BotbookProcess::spawn_command(&["render", "--output", "/nonexistent/dir/x.html"]);
    assert!(!output.status.success(), "render to bad path should fail");
    assert_eq!(output.status.code(), Some(3), "I/O failures exit 3");
}

// ============================================================================
// check command
// ============================================================================

#[test]
fn check_passes_on_shipped_content() {
    let output = BotbookProcess::spawn_command(&["check"]);
    assert!(
        output.status.success(),
        "check should exit 0 on shipped content: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("content check passed"), "got: {stderr}");
}

#[test]
fn check_json_report_is_clean() {
    let output = BotbookProcess::spawn_command(&["check", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("check JSON should be valid");
    for key in [
        "duplicate_step_titles",
        "duplicate_tip_titles",
        "empty_lists",
        "invalid_links",
    ] {
        let issues = parsed
            .get(key)
            .and_then(|v| v.as_array())
            .unwrap_or_else(|| panic!("JSON report should have array '{key}': {stdout}"));
        assert!(issues.is_empty(), "'{key}' should be empty: {stdout}");
    }
}
