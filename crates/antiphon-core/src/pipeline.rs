//! One scrape run: fetch, rework, write.

use crate::config::AntiphonConfig;
use crate::error::Result;
use crate::fetch;
use crate::gabc::{self, ContentOptions};
use crate::output::{self, Variant};
use std::path::PathBuf;

/// What to fetch and how to rework it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    /// GregoBase chant id.
    pub chant_id: String,
    /// Psalm tone recorded in the `annotation` header field.
    pub tone: String,
    /// Output files are `<output_base>-antiphon.gabc` and `<output_base>-intonation.gabc`.
    pub output_base: String,
    /// Also write the intonation file.
    pub semidouble: bool,
    /// Strip episemas (`'` and `_`) from the notation.
    pub remove_episemas: bool,
}

/// Files written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeReport {
    pub antiphon_path: PathBuf,
    pub intonation_path: Option<PathBuf>,
}

/// The archive-independent part of a run: header rewrite and content
/// transformation of already-fetched lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reworked {
    pub header: Vec<String>,
    pub content: Vec<String>,
}

pub fn rework(cfg: &AntiphonConfig, req: &ScrapeRequest, lines: &[String]) -> Result<Reworked> {
    let (old_header, content) = gabc::split_header_and_content(lines)?;
    tracing::debug!(
        header_lines = old_header.len(),
        content_lines = content.len(),
        "split gabc"
    );
    let page_url = cfg.archive().chant_page_url(&req.chant_id);
    let header = gabc::rewrite_header(&old_header, &page_url, &req.tone)?;
    let content = gabc::transform_content(
        &content,
        ContentOptions {
            remove_episemas: req.remove_episemas,
        },
    );
    Ok(Reworked { header, content })
}

/// Runs the whole pipeline. The antiphon file is written before the
/// intonation is looked for, so it stays on disk if that step fails.
pub fn run(cfg: &AntiphonConfig, req: &ScrapeRequest) -> Result<ScrapeReport> {
    tracing::info!(chant_id = %req.chant_id, tone = %req.tone, "scraping chant");
    let lines = fetch::fetch_gabc(cfg, &req.chant_id)?;
    let reworked = rework(cfg, req, &lines)?;

    let antiphon_path = output::write_variant(
        &req.output_base,
        Variant::Antiphon,
        &reworked.header,
        &reworked.content,
    )?;

    let intonation_path = if req.semidouble {
        let intonation = gabc::extract_intonation(&reworked.content)?;
        Some(output::write_variant(
            &req.output_base,
            Variant::Intonation,
            &reworked.header,
            &intonation,
        )?)
    } else {
        None
    };

    Ok(ScrapeReport {
        antiphon_path,
        intonation_path,
    })
}
