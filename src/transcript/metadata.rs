//! Best-effort transcript metadata heuristics.
//!
//! Everything here degrades to "not found" instead of failing; validation of
//! the transcript itself happens upstream.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::transcript::speakers::detect_speakers;

static TITLE_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());
static TITLE_MEETING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^meeting:[ \t]*(.+)$").unwrap());

static DATE_MDY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap());
static DATE_MONTH_DY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(January|February|March|April|May|June|July|August|September|October|November|December)[ \t]+(\d{1,2}),[ \t]*(\d{4})\b",
    )
    .unwrap()
});
static DATE_ISO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Metadata detected from a transcript. `source` is filled by the caller
/// (the transcript text itself carries no provenance).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptMetadata {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub attendees: Vec<String>,
    pub source: Option<String>,
}

/// Extract title, date, and attendees from a transcript. Never fails; absent
/// metadata is simply `None`/empty.
pub fn extract_metadata(transcript: &str) -> TranscriptMetadata {
    TranscriptMetadata {
        title: detect_title(transcript),
        date: detect_date(transcript),
        attendees: detect_speakers(transcript),
        source: None,
    }
}

// First Markdown H1, else text following a `Meeting:` prefix.
fn detect_title(transcript: &str) -> Option<String> {
    TITLE_H1
        .captures(transcript)
        .or_else(|| TITLE_MEETING.captures(transcript))
        .map(|captures| captures[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

// MM/DD/YYYY, then `Month DD, YYYY`, then ISO YYYY-MM-DD. Matches that do
// not form a real calendar date are skipped.
fn detect_date(transcript: &str) -> Option<NaiveDate> {
    for captures in DATE_MDY.captures_iter(transcript) {
        let (month, day, year) = (parse(&captures[1]), parse(&captures[2]), parse(&captures[3]));
        if let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, day) {
            return Some(date);
        }
    }

    for captures in DATE_MONTH_DY.captures_iter(transcript) {
        let month = month_number(&captures[1]);
        let (day, year) = (parse(&captures[2]), parse(&captures[3]));
        if let Some(date) = month.and_then(|m| NaiveDate::from_ymd_opt(year as i32, m, day)) {
            return Some(date);
        }
    }

    for captures in DATE_ISO.captures_iter(transcript) {
        let (year, month, day) = (parse(&captures[1]), parse(&captures[2]), parse(&captures[3]));
        if let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, day) {
            return Some(date);
        }
    }

    None
}

fn parse(digits: &str) -> u32 {
    digits.parse().unwrap_or(0)
}

fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|index| index as u32 + 1)
}
