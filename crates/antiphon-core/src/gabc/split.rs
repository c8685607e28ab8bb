use super::HEADER_END_MARKER;
use crate::error::{Result, ScrapeError};

/// Splits after the first `%%` line. The marker stays at the end of the
/// header; later `%%` lines are ordinary content.
pub fn split_header_and_content(lines: &[String]) -> Result<(Vec<String>, Vec<String>)> {
    let marker = lines
        .iter()
        .position(|l| l == HEADER_END_MARKER)
        .ok_or_else(|| {
            ScrapeError::MalformedInput(format!(
                "no `{}` line separating header from content",
                HEADER_END_MARKER
            ))
        })?;
    let (header, content) = lines.split_at(marker + 1);
    Ok((header.to_vec(), content.to_vec()))
}
