use super::HEADER_END_MARKER;
use crate::error::{Result, ScrapeError};

/// `% <url>` comment recording where the chant came from.
pub fn provenance_line(chant_page_url: &str) -> String {
    format!("% {}", chant_page_url)
}

/// Header field carrying the psalm tone.
pub fn annotation_line(tone: &str) -> String {
    format!("annotation:{};", tone)
}

/// Builds the output header: provenance comment, the original fields, the
/// tone annotation, then the end marker.
///
/// The original header's last line is replaced, so it must be `%%`; anything
/// else is rejected instead of being spliced into the middle of the header.
pub fn rewrite_header(old_header: &[String], chant_page_url: &str, tone: &str) -> Result<Vec<String>> {
    let (last, fields) = old_header.split_last().ok_or_else(|| {
        ScrapeError::MalformedInput("header block is empty".to_string())
    })?;
    if last != HEADER_END_MARKER {
        return Err(ScrapeError::MalformedInput(format!(
            "header block ends with {:?} instead of `{}`",
            last, HEADER_END_MARKER
        )));
    }

    let mut header = Vec::with_capacity(fields.len() + 3);
    header.push(provenance_line(chant_page_url));
    header.extend(fields.iter().cloned());
    header.push(annotation_line(tone));
    header.push(HEADER_END_MARKER.to_string());
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::Archive;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn degenerate_header() {
        let url = Archive::default().chant_page_url("42");
        let header = rewrite_header(&lines(&["%%"]), &url, "1").unwrap();
        assert_eq!(
            header,
            lines(&[
                "% https://gregobase.selapa.net/chant.php?id=42",
                "annotation:1;",
                "%%"
            ])
        );
    }

    #[test]
    fn keeps_original_fields_in_order() {
        let url = Archive::default().chant_page_url("2801");
        let old = lines(&["name:Ecce nomen;", "office-part:Antiphona;", "mode:8;", "%%"]);
        let header = rewrite_header(&old, &url, "8G").unwrap();
        assert_eq!(
            header,
            lines(&[
                "% https://gregobase.selapa.net/chant.php?id=2801",
                "name:Ecce nomen;",
                "office-part:Antiphona;",
                "mode:8;",
                "annotation:8G;",
                "%%"
            ])
        );
    }

    #[test]
    fn exactly_one_annotation_and_ends_with_marker() {
        let old = lines(&["name:X;", "%%"]);
        for tone in ["1", "VIII g", "", "tone;with;semicolons"] {
            let header = rewrite_header(&old, "u", tone).unwrap();
            assert_eq!(header.last().map(String::as_str), Some("%%"));
            let expected = format!("annotation:{};", tone);
            assert_eq!(header.iter().filter(|l| **l == expected).count(), 1);
        }
    }

    #[test]
    fn header_without_marker_is_rejected() {
        let err = rewrite_header(&lines(&["name:X;"]), "u", "1").unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedInput(_)));
    }

    #[test]
    fn empty_header_is_rejected() {
        assert!(matches!(
            rewrite_header(&[], "u", "1"),
            Err(ScrapeError::MalformedInput(_))
        ));
    }
}
