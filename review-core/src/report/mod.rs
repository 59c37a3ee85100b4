//! Report generation and export
//!
//! The generator turns a finished sequence into the plain-text report; export
//! sinks hand it to whatever hosts the review (a file, the terminal).

pub mod export;
pub mod generator;

pub use export::{ExportSink, FileSink, StdoutSink};
pub use generator::{generate_report, Report, REPORT_MIME_TYPE};
