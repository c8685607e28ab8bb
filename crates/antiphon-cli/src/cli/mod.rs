//! CLI for fetching and reworking GregoBase antiphons.

use anyhow::Result;
use antiphon_core::config;
use antiphon_core::pipeline::{self, ScrapeRequest};
use clap::Parser;

/// Download a chant from GregoBase and write it as an antiphon GABC file.
#[derive(Debug, Parser)]
#[command(name = "antiphon")]
#[command(about = "Fetch a GregoBase chant and rework it for antiphon use", long_about = None)]
pub struct Cli {
    /// GregoBase chant id.
    pub chant_id: String,

    /// Psalm tone, written to the `annotation` header field.
    pub tone: String,

    /// Output base name; files are `<name>-antiphon.gabc` and `<name>-intonation.gabc`.
    pub output_name: String,

    /// Also write the intonation file (semidouble feasts).
    #[arg(short, long)]
    pub semidouble: bool,

    /// Remove episemas (`'` and `_`) from the notation.
    #[arg(short, long = "g-and-a")]
    pub g_and_a: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let report = pipeline::run(&cfg, &cli.into_request())?;
        println!("{}", report.antiphon_path.display());
        if let Some(path) = report.intonation_path {
            println!("{}", path.display());
        }
        Ok(())
    }

    pub fn into_request(self) -> ScrapeRequest {
        ScrapeRequest {
            chant_id: self.chant_id,
            tone: self.tone,
            output_base: self.output_name,
            semidouble: self.semidouble,
            remove_episemas: self.g_and_a,
        }
    }
}
