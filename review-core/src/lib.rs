//! Review Core - Core library for sequential slide and demo reviews
//!
//! This crate tracks a fixed list of items (slides or demo URLs) reviewed one
//! at a time, keeps remarks and progress for each, and renders the final
//! plain-text report once everything has been reviewed.

pub mod config;
pub mod error;
pub mod intake;
pub mod report;
pub mod sequence;

pub use config::Config;
pub use error::{Error, Result};
pub use intake::{
    collect_urls, load_urls, parse_slide_count, SheetFormat, UrlExtraction, DEFAULT_MAX_ITEMS,
};
pub use report::{generate_report, ExportSink, FileSink, Report, StdoutSink, REPORT_MIME_TYPE};
pub use sequence::{
    Content, DemoSequence, ItemSequence, ProgressSnapshot, ReviewItem, ReviewKind, ReviewStatus,
    SlideSequence,
};
