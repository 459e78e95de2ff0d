use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard character budget of a single post.
pub const MAX_SEGMENT_LENGTH: usize = 280;

/// Default upper bound on the number of posts in a thread.
pub const DEFAULT_MAX_SEGMENTS: usize = 25;

/// Length of a piece of text in characters (Unicode scalar values).
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

// ─── Segment Id ─────────────────────────────────────────────────────────────

/// Opaque identifier of a segment, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(Uuid);

impl SegmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Segment ────────────────────────────────────────────────────────────────

/// One post of a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub content: String,
}

impl Segment {
    /// Create a segment with a fresh id
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: SegmentId::new(),
            content: content.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        char_len(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Blank means empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn status(&self, limit: usize) -> SegmentStatus {
        SegmentStatus::measure(&self.content, limit)
    }
}

// ─── Segment Status ─────────────────────────────────────────────────────────

/// Per-segment progress against the character budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentStatus {
    pub length: usize,
    pub limit: usize,
    pub is_over_limit: bool,
    /// `min(length / limit, 1.0)`
    pub percentage_of_limit: f64,
}

impl SegmentStatus {
    pub fn measure(content: &str, limit: usize) -> Self {
        let length = char_len(content);
        let percentage_of_limit = if limit == 0 {
            1.0
        } else {
            (length as f64 / limit as f64).min(1.0)
        };
        Self {
            length,
            limit,
            is_over_limit: length > limit,
            percentage_of_limit,
        }
    }

    /// Characters left before the budget is hit (0 when over)
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.length)
    }
}
