//! Intonation snippet for semidouble feasts, where only the opening phrase
//! of the antiphon is sung before the psalm.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ScrapeError};

/// Clef (`c`/`f`, optional `b` flat, line digit) then at least two
/// characters up to the first `*`, anchored at the start of the line.
#[allow(clippy::expect_used)]
static RE_INTONATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([cf]b?\d\).{2,}?\*").expect("valid regex: RE_INTONATION")
});

/// Appended to the matched phrase to close it with a final bar.
pub const INTONATION_CADENCE: &str = "(::)";

pub const PSALM_VERSE_PLACEHOLDER: &str = "%%TODO psalm verse";

/// Builds the intonation content from the first line of escaped content.
pub fn extract_intonation(content: &[String]) -> Result<Vec<String>> {
    let first = content.first().map(String::as_str).unwrap_or("");
    let found = RE_INTONATION
        .find(first)
        .ok_or_else(|| ScrapeError::IntonationNotFound {
            line: first.to_string(),
        })?;
    Ok(vec![
        format!("{}{}", found.as_str(), INTONATION_CADENCE),
        PSALM_VERSE_PLACEHOLDER.to_string(),
    ])
}
