//! Transcript text normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize raw transcript text before chunking: unify CRLF and lone CR to
/// LF, collapse runs of blank lines to a single blank line, and trim
/// surrounding whitespace. Idempotent.
pub fn normalize(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");
    BLANK_RUNS.replace_all(&unified, "\n\n").trim().to_string()
}
