//! Explicit thread markers.
//!
//! A source text is cut at:
//!
//! - a run of two or more newlines, optionally with spaces or tabs on the
//!   blank lines (`\r?\n([ \t]*\r?\n)+`); the run itself is dropped;
//! - the start of a line whose first non-blank text is a list index
//!   (`\d+` then `.`, `/` or `)`), a bracketed index (`[3]`) or the word
//!   `thread:` in any case. The marker stays at the head of its part.
//!
//! A marker at the very start of a block does not cut. Any line that opens
//! with such a pattern cuts, even mid-paragraph (`1. million` on a wrapped
//! line included).

use std::sync::LazyLock;

use regex::Regex;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("valid paragraph regex"));

static LINE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*(?:\d+[./)]|\[\d+\]|thread:)").expect("valid line marker regex")
});

/// Split text on explicit markers. Parts are trimmed, empty parts dropped.
pub fn split_on_markers(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut push = |part: &str| {
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    };

    for block in PARAGRAPH_BREAK.split(text) {
        let mut start = 0;
        for m in LINE_MARKER.find_iter(block) {
            if m.start() > start {
                push(&block[start..m.start()]);
                start = m.start();
            }
        }
        push(&block[start..]);
    }

    parts
}
