//! CLI command implementations

pub mod demos;
pub mod session;
pub mod slides;

pub use demos::DemosArgs;
pub use session::{ReviewSession, SessionOutcome};
pub use slides::SlidesArgs;

use review_core::{Config, Content, ExportSink, FileSink, ItemSequence, StdoutSink};

/// Pick the report destination from configuration
pub fn report_sink(config: &Config) -> Box<dyn ExportSink> {
    if config.export.stdout {
        Box::new(StdoutSink)
    } else {
        Box::new(FileSink::new(config.export.output_dir.clone()))
    }
}

/// Run a review session on the terminal
pub fn run_interactive<C: Content>(
    sequence: ItemSequence<C>,
    sink: &dyn ExportSink,
) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ReviewSession::new(sequence, sink, stdin.lock(), stdout.lock());

    let outcome = session.run()?;
    let reviewed = session.sequence().reviewed_count();
    let total = session.sequence().total_count();

    match outcome {
        SessionOutcome::ReportDelivered => {
            tracing::info!(reviewed, total, "Review session completed")
        }
        SessionOutcome::Quit => tracing::info!(reviewed, total, "Review session abandoned"),
        SessionOutcome::InputClosed => {
            tracing::warn!(reviewed, total, "Input closed before the review was finished")
        }
    }

    Ok(())
}

