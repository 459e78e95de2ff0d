//! # thread-reflow
//!
//! Thread segmentation and reflow engine: turns a block of free-form text into
//! an ordered sequence of length-bounded posts, keeps each post under a hard
//! character budget, and edits that sequence in place.
//!
//! ## Quick Start
//!
//! ```rust
//! use thread_reflow::{format_for_posting, Thread};
//!
//! let mut thread = Thread::from_text("Big news.\n\n1/ Here is why.\n\n2/ And what's next.");
//! assert_eq!(thread.len(), 3);
//!
//! // Edits never fail; they report whether they applied
//! let first = thread.segments()[0].id;
//! assert!(thread.set_content(first, "Big news!").is_applied());
//! thread.move_to(2, 1);
//!
//! assert!(thread.ensure_postable().is_ok());
//! let rendered = format_for_posting(&thread.contents());
//! assert!(rendered.starts_with("1/3\n\nBig news!"));
//! ```
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`segmenter`] | Initial split: explicit markers, then sentence packing under the budget |
//! | [`thread`] | Segment store and editor: set, insert, remove, move, split, statistics |
//! | [`observer`] | Synchronous change notification pushed after every edit call |
//! | [`format`] | Posting rendering and reading-time estimate |
//! | [`platform`] | Per-platform character limits and word-wrapped thread previews |
//! | [`config`] | `ThreadConfig`: budget and segment cap, JSON loadable |
//! | [`types`] | `Segment`, `SegmentId`, `SegmentStatus`, limits |
//! | [`error`] | Error types with thiserror: OverLimit, Empty, UnknownPlatform, config |
//!
//! ## Invariants
//!
//! - A thread is never empty; removing the last segment is ignored
//! - A thread never holds more than `max_segments` segments
//! - Segment ids are assigned once and survive edits and reordering
//!
//! A thread is owned by a single editing session. Callers sharing one across
//! threads must serialize access themselves.

pub mod config;
pub mod error;
pub mod format;
pub mod observer;
pub mod platform;
pub mod segmenter;
pub mod thread;
pub mod types;

pub use config::ThreadConfig;
pub use error::{ThreadError, ThreadResult};
pub use format::{estimate_read_minutes, format_for_posting};
pub use observer::{CallbackObserver, RecordingObserver, ThreadObserver};
pub use platform::{Platform, PlatformLimit, PlatformPreview};
pub use thread::{create_thread, EditOutcome, IgnoreReason, Thread};
pub use types::*;
