mod common;

use std::io::Write;

use common::TestEnv;

fn write_transcript(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create transcript file");
    write!(file, "{}", content).expect("write transcript");
    file
}

fn plausible_transcript() -> String {
    "John: welcome to the planning meeting, let's walk through the roadmap together.\n".repeat(3)
}

#[test]
fn analyze_subcommand_is_available() {
    let output = TestEnv::new().run(&["analyze", "--help"]);

    assert!(
        output.status.success(),
        "analyze --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn analyze_reports_missing_file() {
    let output = TestEnv::new().run(&["analyze", "/does/not/exist.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read transcript"),
        "expected missing file error, got:\n{}",
        stderr
    );
}

#[test]
fn analyze_requires_api_key() {
    let transcript = write_transcript(&plausible_transcript());
    let output = TestEnv::new().run(&["analyze", transcript.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No API key configured"),
        "expected credential error, got:\n{}",
        stderr
    );
    assert!(
        stderr.contains("DEBRIEF_GEMINI_API_KEY"),
        "expected env var suggestion, got:\n{}",
        stderr
    );
}

#[test]
fn analyze_rejects_empty_transcript() {
    let transcript = write_transcript("   \n\n  ");
    let output = TestEnv::new().run_env(
        &["analyze", transcript.path().to_str().unwrap()],
        &[("DEBRIEF_GEMINI_API_KEY", "test-key")],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Transcript is empty"),
        "expected empty transcript error, got:\n{}",
        stderr
    );
    assert!(
        stderr.contains("[chunking 1/5]"),
        "expected stage position in message, got:\n{}",
        stderr
    );
}

#[test]
fn analyze_rejects_short_transcript() {
    let transcript = write_transcript("John: hi");
    let output = TestEnv::new().run_env(
        &["analyze", transcript.path().to_str().unwrap()],
        &[("DEBRIEF_GEMINI_API_KEY", "test-key")],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("too short"),
        "expected short transcript error, got:\n{}",
        stderr
    );
}
