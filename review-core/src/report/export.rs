//! Delivery of generated reports
//!
//! Delivery is fire-and-forget: a sink reports failures through the log and
//! never back to the caller.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::Report;

/// Destination for a finished report
pub trait ExportSink {
    /// Hand over the report text under the suggested filename
    fn deliver(&self, content: &str, suggested_name: &str);
}

impl Report {
    /// Deliver this report through the given sink
    pub fn deliver_to(&self, sink: &dyn ExportSink) {
        info!(
            kind = ?self.kind,
            filename = %self.filename,
            bytes = self.content.len(),
            "Delivering review report"
        );
        sink.deliver(&self.content, &self.filename);
    }
}

/// Writes reports into a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
}

impl FileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Full path a report with the given name would be written to
    ///
    /// Only the final path component of `suggested_name` is used.
    pub fn target_path(&self, suggested_name: &str) -> PathBuf {
        let name = Path::new(suggested_name)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "review-report.txt".into());
        self.output_dir.join(name)
    }
}

impl ExportSink for FileSink {
    fn deliver(&self, content: &str, suggested_name: &str) {
        let path = self.target_path(suggested_name);

        let result = std::fs::create_dir_all(&self.output_dir)
            .and_then(|_| std::fs::write(&path, content));

        match result {
            Ok(()) => info!(path = %path.display(), "Report written"),
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to write report"),
        }
    }
}

/// Prints reports to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ExportSink for StdoutSink {
    fn deliver(&self, content: &str, suggested_name: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", content).and_then(|_| handle.flush()) {
            warn!(filename = %suggested_name, error = %e, "Failed to print report");
        }
    }
}
