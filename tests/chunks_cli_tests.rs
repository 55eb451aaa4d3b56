mod common;

use std::io::Write;

use common::TestEnv;

fn write_transcript(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create transcript file");
    write!(file, "{}", content).expect("write transcript");
    file
}

#[test]
fn chunks_shows_single_chunk_for_short_transcript() {
    let transcript = write_transcript("John: short meeting\nSarah: agreed, wrap it up");
    let output = TestEnv::new().run(&["chunks", transcript.path().to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "chunks should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("1 chunk(s)"), "got:\n{}", stdout);
    assert!(stdout.contains("John"), "got:\n{}", stdout);
    assert!(stdout.contains("Sarah"), "got:\n{}", stdout);
}

#[test]
fn chunks_splits_long_transcript() {
    let long: String = (0..300)
        .map(|i| format!("Speaker{}: this is line {} of a very long meeting\n", i % 5, i))
        .collect();
    let transcript = write_transcript(&long);
    let output = TestEnv::new().run(&["chunks", transcript.path().to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let count: usize = stdout
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .expect("first token should be the chunk count");
    assert!(count > 1, "expected multiple chunks, got:\n{}", stdout);
}

#[test]
fn chunks_reports_missing_file() {
    let output = TestEnv::new().run(&["chunks", "/does/not/exist.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read transcript"),
        "expected missing file error, got:\n{}",
        stderr
    );
}
