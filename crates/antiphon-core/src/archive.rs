//! URLs of the GregoBase chant archive.
//!
//! The download URL is built with `url` so the chant id is query-encoded; the
//! chant page URL is written into output headers verbatim.

use url::Url;

pub const DEFAULT_ARCHIVE_BASE_URL: &str = "https://gregobase.selapa.net";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    base_url: String,
}

impl Default for Archive {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHIVE_BASE_URL)
    }
}

impl Archive {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `<base>/download.php?id=<id>&format=gabc`
    pub fn download_url(&self, chant_id: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &format!("{}/download.php", self.base_url),
            &[("id", chant_id), ("format", "gabc")],
        )
    }

    /// Human-facing chant page, used for the provenance comment.
    pub fn chant_page_url(&self, chant_id: &str) -> String {
        format!("{}/chant.php?id={}", self.base_url, chant_id)
    }
}
