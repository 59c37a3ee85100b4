//! Demos command - review demo pages listed in a sheet

use std::path::PathBuf;

use clap::Args;
use review_core::{load_urls, Config, DemoSequence};

use super::{report_sink, run_interactive};

/// Arguments for the demos command
#[derive(Args, Debug)]
pub struct DemosArgs {
    /// Sheet with demo URLs (.xlsx, .xls, .csv, .tsv or .txt)
    #[arg(short, long)]
    pub file: PathBuf,

    /// List the extracted URLs and exit without reviewing
    #[arg(long)]
    pub dry_run: bool,
}

impl DemosArgs {
    /// Execute the demos command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let extraction = load_urls(&self.file, config.intake.max_items)?;

        if verbose {
            tracing::info!(
                file = %self.file.display(),
                urls = extraction.urls.len(),
                "Loaded demo URLs"
            );
        }

        println!("Found {} demo URLs in {}", extraction.urls.len(), self.file.display());
        if let Some(found) = extraction.truncated_from {
            println!(
                "Warning: {} URLs found; for performance reasons only the first {} will be reviewed",
                found,
                extraction.urls.len()
            );
        }
        println!();

        if self.dry_run {
            for url in &extraction.urls {
                println!("  {}", url);
            }
            return Ok(());
        }

        let sink = report_sink(config);
        run_interactive(DemoSequence::demos(extraction.urls), sink.as_ref())
    }
}
