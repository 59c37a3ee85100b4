//! Review items and the two review variants

use serde::{Deserialize, Serialize};

/// Which kind of material is being reviewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    /// Presentation slides, identified only by position
    Slide,
    /// Demo pages, each carrying a URL
    Demo,
}

impl ReviewKind {
    /// Label used for a single item ("Slide 3", "Demo 7")
    pub fn item_label(&self) -> &'static str {
        match self {
            ReviewKind::Slide => "Slide",
            ReviewKind::Demo => "Demo",
        }
    }

    /// Plural noun for progress lines
    pub fn plural(&self) -> &'static str {
        match self {
            ReviewKind::Slide => "slides",
            ReviewKind::Demo => "demos",
        }
    }

    /// First line of the generated report
    pub fn report_title(&self) -> &'static str {
        match self {
            ReviewKind::Slide => "SLIDE REVIEW REPORT",
            ReviewKind::Demo => "DEMO REVIEW REPORT",
        }
    }

    /// Suggested filename for the exported report
    pub fn report_filename(&self) -> &'static str {
        match self {
            ReviewKind::Slide => "slide-review-report.txt",
            ReviewKind::Demo => "demo-review-report.txt",
        }
    }
}

impl std::fmt::Display for ReviewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewKind::Slide => write!(f, "Slide Review"),
            ReviewKind::Demo => write!(f, "Demo Review"),
        }
    }
}

/// Immutable payload attached to each item
///
/// Slides carry nothing (`()`); demos carry their URL (`String`).
pub trait Content: Clone + std::fmt::Debug {
    /// The review variant this payload belongs to
    const KIND: ReviewKind;

    /// URL shown for the item, if the variant has one
    fn url(&self) -> Option<&str>;
}

impl Content for () {
    const KIND: ReviewKind = ReviewKind::Slide;

    fn url(&self) -> Option<&str> {
        None
    }
}

impl Content for String {
    const KIND: ReviewKind = ReviewKind::Demo;

    fn url(&self) -> Option<&str> {
        Some(self)
    }
}

/// A single item under review
///
/// Only [`ItemSequence`](super::ItemSequence) can change remarks or the
/// reviewed flag, so the reviewed count always matches the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewItem<C> {
    id: usize,
    content: C,
    remarks: String,
    reviewed: bool,
}

impl<C: Content> ReviewItem<C> {
    pub(crate) fn new(id: usize, content: C) -> Self {
        Self {
            id,
            content,
            remarks: String::new(),
            reviewed: false,
        }
    }

    /// 1-based position in the sequence
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// URL for demo items, `None` for slides
    pub fn url(&self) -> Option<&str> {
        self.content.url()
    }

    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    pub fn is_reviewed(&self) -> bool {
        self.reviewed
    }

    /// Whether the remarks contain anything besides whitespace
    pub fn has_remarks(&self) -> bool {
        !self.remarks.trim().is_empty()
    }

    /// Record remarks and mark reviewed
    ///
    /// Returns true if this call moved the item from unreviewed to reviewed.
    pub(crate) fn record(&mut self, remarks: String) -> bool {
        let newly_reviewed = !self.reviewed;
        self.remarks = remarks;
        self.reviewed = true;
        newly_reviewed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(ReviewKind::Slide.item_label(), "Slide");
        assert_eq!(ReviewKind::Demo.item_label(), "Demo");
        assert_eq!(ReviewKind::Slide.report_title(), "SLIDE REVIEW REPORT");
        assert_eq!(ReviewKind::Demo.report_title(), "DEMO REVIEW REPORT");
        assert_eq!(
            ReviewKind::Slide.report_filename(),
            "slide-review-report.txt"
        );
        assert_eq!(ReviewKind::Demo.report_filename(), "demo-review-report.txt");
    }

    #[test]
    fn test_content_kind() {
        assert_eq!(<() as Content>::KIND, ReviewKind::Slide);
        assert_eq!(<String as Content>::KIND, ReviewKind::Demo);
    }

    #[test]
    fn test_new_item_unreviewed() {
        let item = ReviewItem::new(1, "https://a.com".to_string());
        assert_eq!(item.id(), 1);
        assert_eq!(item.url(), Some("https://a.com"));
        assert_eq!(item.remarks(), "");
        assert!(!item.is_reviewed());
        assert!(!item.has_remarks());
    }

    #[test]
    fn test_record_only_first_time_is_new() {
        let mut item = ReviewItem::new(4, ());
        assert!(item.record("typo".to_string()));
        assert!(!item.record(String::new()));
        assert!(item.is_reviewed());
        assert_eq!(item.remarks(), "");
        assert_eq!(item.url(), None);
    }

    #[test]
    fn test_whitespace_remarks_are_not_remarks() {
        let mut item = ReviewItem::new(1, ());
        item.record("   \n".to_string());
        assert!(!item.has_remarks());
    }
}
