//! Slides command - review a presentation slide by slide

use clap::Args;
use review_core::{parse_slide_count, Config, SlideSequence};

use super::{report_sink, run_interactive};

/// Arguments for the slides command
#[derive(Args, Debug)]
pub struct SlidesArgs {
    /// How many slides are you going to review?
    #[arg(short = 'n', long)]
    pub count: String,
}

impl SlidesArgs {
    /// Execute the slides command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let count = parse_slide_count(&self.count, config.intake.max_items)?;

        if verbose {
            tracing::info!(count, "Starting slide review");
        }

        let sink = report_sink(config);
        run_interactive(SlideSequence::slides(count), sink.as_ref())
    }
}
