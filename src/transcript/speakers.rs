//! Speaker detection for transcript lines.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches `[optional timestamp] Name[, title]: utterance` at the start of a
// line. Names may contain letters, spaces, periods, hyphens, and apostrophes
// ("Dr. Smith", "Mary-Jane Watson", "O'Brien").
static SPEAKER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:\[[^\]\n]{1,24}\][ \t]*|\(?\d{1,2}:\d{2}(?::\d{2})?(?:[ \t]?[AaPp][Mm])?\)?[ \t]+)?([A-Za-z][A-Za-z .'\-]{0,60}?)(?:,[^:\n]{1,40})?:(?:[ \t]|$)",
    )
    .expect("speaker pattern is valid")
});

/// Detect speaker names in `text`, deduplicated preserving first-seen order.
pub fn detect_speakers(text: &str) -> Vec<String> {
    let mut speakers: Vec<String> = Vec::new();
    for captures in SPEAKER_LINE.captures_iter(text) {
        let name = captures[1].trim().to_string();
        if !plausible_name(&name) {
            continue;
        }
        if !speakers.iter().any(|seen| seen == &name) {
            speakers.push(name);
        }
    }
    speakers
}

// Single letters and non-alphabetic matches are noise, not names.
fn plausible_name(name: &str) -> bool {
    name.chars().count() >= 2 && name.chars().any(|c| c.is_alphabetic())
}
