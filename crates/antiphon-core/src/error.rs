//! Errors that abort a scrape run.
//!
//! Every variant is fatal: nothing is retried and the CLI prints the chain
//! and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The archive answered with something other than HTTP 200.
    #[error("GET {url} returned HTTP {status}")]
    RemoteFetch { url: String, status: u32 },

    /// libcurl failed before a status was available (DNS, connect, timeout).
    #[error("GET request failed")]
    Transport(#[from] curl::Error),

    /// The configured archive base URL could not be turned into a download URL.
    #[error("invalid archive URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The GABC body does not have the expected header/content layout.
    #[error("malformed GABC input: {0}")]
    MalformedInput(String),

    /// The first content line has no recognizable opening phrase.
    #[error("can't find intonation of antiphon: {line}")]
    IntonationNotFound { line: String },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
