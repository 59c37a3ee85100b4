//! Plain-text review report
//!
//! Layout, per item in id order:
//!
//! ```text
//! Demo 1:
//! URL: https://example.com
//! Everything is Fine
//! Remarks: button misaligned
//! -------------------
//!
//! ```
//!
//! The `URL:` line appears only for demo reviews and the `Remarks:` line only
//! when the remarks are not blank. "Everything is Fine" is written for every
//! item, including ones with remarks, to match the existing report format.

use crate::sequence::{Content, ItemSequence, ReviewItem, ReviewKind};

const TITLE_RULE: &str = "===================";
const ITEM_RULE: &str = "-------------------";
const END_MARKER: &str = "End of Report";

/// MIME type of the exported report
pub const REPORT_MIME_TYPE: &str = "text/plain";

/// Render the report for the given items, in the order given
pub fn generate_report<C: Content>(items: &[ReviewItem<C>]) -> String {
    let kind = C::KIND;
    let mut report = format!("{}\n{}\n\n", kind.report_title(), TITLE_RULE);

    for item in items {
        report.push_str(&item_block(kind, item));
    }

    report.push_str(END_MARKER);
    report
}

fn item_block<C: Content>(kind: ReviewKind, item: &ReviewItem<C>) -> String {
    let mut block = format!("{} {}:\n", kind.item_label(), item.id());
    if let Some(url) = item.url() {
        block.push_str(&format!("URL: {}\n", url));
    }
    block.push_str("Everything is Fine\n");
    if item.has_remarks() {
        block.push_str(&format!("Remarks: {}\n", item.remarks()));
    }
    block.push_str(ITEM_RULE);
    block.push_str("\n\n");
    block
}

/// A generated report ready to hand to an export sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ReviewKind,
    pub content: String,
    pub filename: String,
}

impl Report {
    /// Generate the report over every item of the sequence
    pub fn for_sequence<C: Content>(sequence: &ItemSequence<C>) -> Self {
        Self {
            kind: C::KIND,
            content: generate_report(sequence.all_items()),
            filename: C::KIND.report_filename().to_string(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        REPORT_MIME_TYPE
    }
}
