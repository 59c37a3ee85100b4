//! Ordered review items with a traversal cursor
//!
//! An [`ItemSequence`] owns every item of a review session in a contiguous
//! vector. The cursor is an index into that vector, so "previous" and "next"
//! are neighbouring positions and anything read through the cursor or through
//! [`ItemSequence::all_items`] sees the same live item.

pub mod item;

pub use item::{Content, ReviewItem, ReviewKind};

use serde::Serialize;
use tracing::{debug, info};

use crate::Result;

/// Slide review: items carry no payload
pub type SlideSequence = ItemSequence<()>;

/// Demo review: items carry their URL
pub type DemoSequence = ItemSequence<String>;

/// Derived state of a whole review session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Some items are still unreviewed
    InProgress,
    /// Every item has been reviewed
    Complete,
}

/// The items of one review session plus cursor and progress counters
#[derive(Debug, Clone)]
pub struct ItemSequence<C> {
    items: Vec<ReviewItem<C>>,
    current: Option<usize>,
    reviewed_count: usize,
}

impl SlideSequence {
    /// Create a slide review with `count` slides numbered from 1
    pub fn slides(count: usize) -> Self {
        Self::from_contents(std::iter::repeat(()).take(count))
    }
}

impl DemoSequence {
    /// Create a demo review with one item per URL, in the given order
    pub fn demos(urls: Vec<String>) -> Self {
        Self::from_contents(urls)
    }
}

impl<C: Content> ItemSequence<C> {
    /// Build a sequence with ids `1..=n` from the given payloads
    ///
    /// An empty input produces an empty sequence with no current item.
    pub fn from_contents(contents: impl IntoIterator<Item = C>) -> Self {
        let items: Vec<_> = contents
            .into_iter()
            .enumerate()
            .map(|(idx, content)| ReviewItem::new(idx + 1, content))
            .collect();

        let current = if items.is_empty() { None } else { Some(0) };

        debug!(kind = ?C::KIND, total = items.len(), "Review sequence created");

        Self {
            items,
            current,
            reviewed_count: 0,
        }
    }

    /// The review variant of this sequence
    pub fn kind(&self) -> ReviewKind {
        C::KIND
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn reviewed_count(&self) -> usize {
        self.reviewed_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item under the cursor, `None` only for an empty sequence
    pub fn current(&self) -> Option<&ReviewItem<C>> {
        self.current.map(|idx| &self.items[idx])
    }

    /// Look up an item by its 1-based id
    pub fn get(&self, id: usize) -> Option<&ReviewItem<C>> {
        id.checked_sub(1).and_then(|idx| self.items.get(idx))
    }

    /// The item before `id`, `None` at the head or for an unknown id
    pub fn prev_of(&self, id: usize) -> Option<&ReviewItem<C>> {
        self.get(id)?;
        id.checked_sub(1).and_then(|prev| self.get(prev))
    }

    /// The item after `id`, `None` at the tail or for an unknown id
    pub fn next_of(&self, id: usize) -> Option<&ReviewItem<C>> {
        self.get(id)?;
        self.get(id + 1)
    }

    /// True when the cursor has no predecessor (or there is no cursor)
    pub fn is_at_start(&self) -> bool {
        self.current.map_or(true, |idx| idx == 0)
    }

    /// True when the cursor has no successor (or there is no cursor)
    pub fn is_at_end(&self) -> bool {
        self.current.map_or(true, |idx| idx + 1 == self.items.len())
    }

    /// Advance the cursor
    ///
    /// Returns the new current item, or `None` if already at the tail. The
    /// cursor does not move in that case.
    pub fn move_next(&mut self) -> Option<&ReviewItem<C>> {
        let idx = self.current?;
        if idx + 1 >= self.items.len() {
            debug!(id = idx + 1, "Already at last item");
            return None;
        }

        self.current = Some(idx + 1);
        debug!(id = idx + 2, "Moved to next item");
        self.items.get(idx + 1)
    }

    /// Step the cursor back
    ///
    /// Returns the new current item, or `None` if already at the head.
    pub fn move_prev(&mut self) -> Option<&ReviewItem<C>> {
        let idx = self.current?;
        if idx == 0 {
            debug!(id = 1, "Already at first item");
            return None;
        }

        self.current = Some(idx - 1);
        debug!(id = idx, "Moved to previous item");
        self.items.get(idx - 1)
    }

    /// Record remarks for the current item and mark it reviewed
    ///
    /// The remarks are stored verbatim; an empty string means "no issues".
    /// The reviewed count grows only the first time an item is saved.
    /// Returns `None` without changing anything when there is no current item.
    pub fn update_current(&mut self, remarks: impl Into<String>) -> Option<&ReviewItem<C>> {
        let idx = self.current?;
        let id = idx + 1;

        if self.items[idx].record(remarks.into()) {
            self.reviewed_count += 1;
            info!(
                id,
                reviewed = self.reviewed_count,
                total = self.items.len(),
                "Item reviewed"
            );
        } else {
            debug!(id, "Remarks updated on reviewed item");
        }

        Some(&self.items[idx])
    }

    /// Number of items not yet reviewed
    pub fn remaining(&self) -> usize {
        self.items.len() - self.reviewed_count
    }

    /// Reviewed share in percent, from 0.0 to 100.0
    ///
    /// An empty sequence is vacuously complete and reports 100.0.
    pub fn completion_percentage(&self) -> f64 {
        if self.items.is_empty() {
            return 100.0;
        }
        (self.reviewed_count as f64 / self.items.len() as f64) * 100.0
    }

    /// All items from head to tail, reflecting their current state
    pub fn all_items(&self) -> &[ReviewItem<C>] {
        &self.items
    }

    pub fn is_complete(&self) -> bool {
        self.reviewed_count == self.items.len()
    }

    pub fn status(&self) -> ReviewStatus {
        if self.is_complete() {
            ReviewStatus::Complete
        } else {
            ReviewStatus::InProgress
        }
    }

    /// Point-in-time progress figures for display or JSON output
    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            kind: C::KIND,
            total: self.total_count(),
            reviewed: self.reviewed_count,
            remaining: self.remaining(),
            percentage: self.completion_percentage(),
            current: self.current().map(ReviewItem::id),
            status: self.status(),
        }
    }
}

/// Progress figures of a sequence at one moment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub kind: ReviewKind,
    pub total: usize,
    pub reviewed: usize,
    pub remaining: usize,
    pub percentage: f64,
    /// Id of the current item
    pub current: Option<usize>,
    pub status: ReviewStatus,
}

impl ProgressSnapshot {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
