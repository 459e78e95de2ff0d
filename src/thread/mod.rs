//! # Thread
//!
//! An ordered, never-empty, bounded sequence of [`Segment`]s with the edit
//! operations used while composing a thread.
//!
//! Edits never fail. Each returns an [`EditOutcome`] and, applied or not,
//! pushes the current ordered contents to every subscribed
//! [`ThreadObserver`] before returning.
//!
//! ```rust
//! use thread_reflow::thread::Thread;
//!
//! let mut thread = Thread::from_text("Opening.\n\n1/ More detail.");
//! assert_eq!(thread.len(), 2);
//!
//! thread.insert_after(1);
//! let id = thread.segments()[2].id;
//! thread.set_content(id, "2/ Closing.");
//! thread.move_to(2, 0);
//! assert_eq!(thread.contents()[0], "2/ Closing.");
//! ```

mod split;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ThreadConfig;
use crate::error::{ThreadError, ThreadResult};
use crate::format;
use crate::observer::{ObserverSet, ThreadObserver};
use crate::segmenter;
use crate::types::{Segment, SegmentId, SegmentStatus};

pub use split::{split_content, split_point};

/// Why an edit left the thread unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// No segment has the given id
    UnknownSegment,
    /// The thread already holds `max_segments` segments
    AtCapacity,
    /// The thread would become empty
    LastSegment,
    /// Split requested on a segment that fits the budget
    WithinLimit,
}

/// Result of an edit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

/// The segment store and editor.
#[derive(Debug)]
pub struct Thread {
    segments: Vec<Segment>,
    config: ThreadConfig,
    observers: ObserverSet,
}

/// `createThread(initialText?, maxSegments)` with the default budget.
pub fn create_thread(initial_text: Option<&str>, max_segments: usize) -> Thread {
    Thread::new(
        initial_text,
        ThreadConfig::default().with_max_segments(max_segments),
    )
}

// ─── Construction ───────────────────────────────────────────────────────────

impl Thread {
    /// Build a thread by segmenting `initial_text` (or one empty segment).
    ///
    /// If segmentation yields more parts than `max_segments`, the surplus is
    /// appended to the last allowed segment so no text is lost.
    pub fn new(initial_text: Option<&str>, config: ThreadConfig) -> Self {
        let config = config.sanitized();
        let parts = segmenter::segment(initial_text.unwrap_or(""), config.max_segment_length);
        Self::from_parts(parts, config)
    }

    /// Segment `text` with the default config.
    pub fn from_text(text: &str) -> Self {
        Self::new(Some(text), ThreadConfig::default())
    }

    /// One empty segment, default config.
    pub fn empty() -> Self {
        Self::new(None, ThreadConfig::default())
    }

    /// Rebuild a thread from previously saved contents, one segment each.
    pub fn from_contents<I, S>(contents: I, config: ThreadConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = contents.into_iter().map(Into::into).collect();
        Self::from_parts(parts, config.sanitized())
    }

    fn from_parts(mut parts: Vec<String>, config: ThreadConfig) -> Self {
        if parts.is_empty() {
            parts.push(String::new());
        }
        if parts.len() > config.max_segments {
            tracing::debug!(
                parts = parts.len(),
                max_segments = config.max_segments,
                "merging surplus parts into last segment"
            );
            let surplus = parts.split_off(config.max_segments);
            if let Some(last) = parts.last_mut() {
                for part in surplus {
                    last.push_str("\n\n");
                    last.push_str(&part);
                }
            }
        }

        Self {
            segments: parts.into_iter().map(Segment::new).collect(),
            config,
            observers: ObserverSet::new(),
        }
    }

    /// Register an observer notified after every edit call.
    pub fn subscribe(&mut self, observer: Arc<dyn ThreadObserver>) {
        self.observers.add(observer);
    }
}

// ─── Edits ──────────────────────────────────────────────────────────────────

impl Thread {
    /// Replace the content of segment `id`.
    pub fn set_content(&mut self, id: SegmentId, content: impl Into<String>) -> EditOutcome {
        let outcome = match self.segments.iter_mut().find(|s| s.id == id) {
            Some(segment) => {
                segment.content = content.into();
                EditOutcome::Applied
            }
            None => EditOutcome::Ignored(IgnoreReason::UnknownSegment),
        };
        self.finish("set_content", outcome)
    }

    /// Insert an empty segment right after position `index` (clamped).
    pub fn insert_after(&mut self, index: usize) -> EditOutcome {
        let outcome = if self.can_insert() {
            let at = self.clamp(index) + 1;
            self.segments.insert(at, Segment::empty());
            EditOutcome::Applied
        } else {
            EditOutcome::Ignored(IgnoreReason::AtCapacity)
        };
        self.finish("insert_after", outcome)
    }

    /// Delete segment `id` unless it is the only one.
    pub fn remove(&mut self, id: SegmentId) -> EditOutcome {
        let outcome = if !self.can_remove() {
            EditOutcome::Ignored(IgnoreReason::LastSegment)
        } else {
            match self.position(id) {
                Some(index) => {
                    self.segments.remove(index);
                    EditOutcome::Applied
                }
                None => EditOutcome::Ignored(IgnoreReason::UnknownSegment),
            }
        };
        self.finish("remove", outcome)
    }

    /// Move the segment at `from` so that it ends up at `to`.
    ///
    /// One splice per call, both indices clamped to the last position.
    /// During a drag, call it again for every hovered position; each call
    /// is independent of the previous ones.
    pub fn move_to(&mut self, from: usize, to: usize) -> EditOutcome {
        let from = self.clamp(from);
        let to = self.clamp(to);
        if from != to {
            let segment = self.segments.remove(from);
            self.segments.insert(to, segment);
        }
        self.finish("move_to", EditOutcome::Applied)
    }

    /// Cut an over-limit segment in two at the sentence boundary nearest
    /// its middle.
    ///
    /// The segment keeps its id and the first half; the second half goes
    /// into a new segment right after it. A half that is still over the
    /// limit needs another `split`.
    pub fn split(&mut self, id: SegmentId) -> EditOutcome {
        let outcome = match self.position(id) {
            None => EditOutcome::Ignored(IgnoreReason::UnknownSegment),
            Some(index) if !self.is_over_limit_at(index) => {
                EditOutcome::Ignored(IgnoreReason::WithinLimit)
            }
            Some(_) if !self.can_insert() => EditOutcome::Ignored(IgnoreReason::AtCapacity),
            Some(index) => {
                let (head, tail) = split_content(&self.segments[index].content);
                self.segments[index].content = head;
                self.segments.insert(index + 1, Segment::new(tail));
                EditOutcome::Applied
            }
        };
        self.finish("split", outcome)
    }

    fn finish(&self, op: &'static str, outcome: EditOutcome) -> EditOutcome {
        match outcome {
            EditOutcome::Applied => {
                tracing::trace!(op, segments = self.segments.len(), "edit applied")
            }
            EditOutcome::Ignored(reason) => tracing::debug!(op, ?reason, "edit ignored"),
        }
        if !self.observers.is_empty() {
            self.observers.notify(&self.contents());
        }
        outcome
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.segments.len().saturating_sub(1))
    }

    fn is_over_limit_at(&self, index: usize) -> bool {
        self.segments[index].len() > self.config.max_segment_length
    }
}

// ─── Queries ────────────────────────────────────────────────────────────────

impl Thread {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Ordered contents, as pushed to observers
    pub fn contents(&self) -> Vec<String> {
        self.segments.iter().map(|s| s.content.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a thread holds at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn config(&self) -> &ThreadConfig {
        &self.config
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: SegmentId) -> Option<usize> {
        self.segments.iter().position(|s| s.id == id)
    }

    pub fn can_insert(&self) -> bool {
        self.segments.len() < self.config.max_segments
    }

    pub fn can_remove(&self) -> bool {
        self.segments.len() > 1
    }

    pub fn total_characters(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    pub fn over_limit_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.len() > self.config.max_segment_length)
            .count()
    }

    pub fn status(&self, id: SegmentId) -> Option<SegmentStatus> {
        self.get(id)
            .map(|s| s.status(self.config.max_segment_length))
    }

    /// Status of every segment, in thread order
    pub fn statuses(&self) -> Vec<(SegmentId, SegmentStatus)> {
        self.segments
            .iter()
            .map(|s| (s.id, s.status(self.config.max_segment_length)))
            .collect()
    }

    /// Gate for finalizing: every segment fits and there is some content.
    pub fn ensure_postable(&self) -> ThreadResult<()> {
        let count = self.over_limit_count();
        if count > 0 {
            return Err(ThreadError::OverLimit {
                count,
                limit: self.config.max_segment_length,
            });
        }
        if self.segments.iter().all(Segment::is_blank) {
            return Err(ThreadError::Empty);
        }
        Ok(())
    }

    pub fn format_for_posting(&self) -> String {
        format::format_for_posting(&self.contents())
    }

    pub fn estimate_read_minutes(&self) -> usize {
        format::estimate_read_minutes(&self.contents())
    }
}

impl Default for Thread {
    fn default() -> Self {
        Self::empty()
    }
}
