//! Writing reworked GABC files next to the chosen output base name.

use crate::error::{Result, ScrapeError};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Which content block a file holds; also its filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Antiphon,
    Intonation,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Antiphon => "antiphon",
            Variant::Intonation => "intonation",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<base>-<variant>.gabc`. `base` may include directories.
pub fn output_path(base: &str, variant: Variant) -> PathBuf {
    PathBuf::from(format!("{}-{}.gabc", base, variant))
}

/// Header and content joined by `\n`, with no trailing newline.
pub fn render(header: &[String], content: &[String]) -> String {
    format!("{}\n{}", header.join("\n"), content.join("\n"))
}

/// Writes one variant, replacing any existing file. Returns the path written.
pub fn write_variant(
    base: &str,
    variant: Variant,
    header: &[String],
    content: &[String],
) -> Result<PathBuf> {
    let path = output_path(base, variant);
    fs::write(&path, render(header, content)).map_err(|source| ScrapeError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(variant = %variant, "wrote {}", path.display());
    Ok(path)
}
