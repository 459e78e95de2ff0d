//! # Segmenter
//!
//! Turns a source text into the initial ordered parts of a thread.
//! Strategies are tried in priority order:
//!
//! 1. **Empty**: blank input gives one empty part
//! 2. **Markers**: explicit boundaries (blank lines, `1/`, `[2]`, `Thread:`)
//!    when they yield at least two parts
//! 3. **Sentences**: greedy sentence packing under the character budget
//! 4. **Fallback**: the whole source as one part
//!
//! The result is never empty.

mod markers;
mod sentences;

use serde::{Deserialize, Serialize};

pub use markers::split_on_markers;
pub use sentences::{pack_sentences, split_sentences};

/// Which rule produced a segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Empty,
    Markers,
    Sentences,
    Fallback,
}

/// Output of [`segment_with_strategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub strategy: Strategy,
    pub parts: Vec<String>,
}

/// Segment `source` into parts of at most `max_segment_length` characters
/// where sentence boundaries allow it.
pub fn segment(source: &str, max_segment_length: usize) -> Vec<String> {
    segment_with_strategy(source, max_segment_length).parts
}

/// Like [`segment`], also reporting which strategy applied.
pub fn segment_with_strategy(source: &str, max_segment_length: usize) -> Segmentation {
    let segmentation = run_strategies(source, max_segment_length);
    tracing::debug!(
        strategy = ?segmentation.strategy,
        parts = segmentation.parts.len(),
        "segmented source text"
    );
    segmentation
}

fn run_strategies(source: &str, max_segment_length: usize) -> Segmentation {
    if source.trim().is_empty() {
        return Segmentation {
            strategy: Strategy::Empty,
            parts: vec![String::new()],
        };
    }

    let parts = split_on_markers(source);
    if parts.len() >= 2 {
        return Segmentation {
            strategy: Strategy::Markers,
            parts,
        };
    }

    let parts = pack_sentences(&split_sentences(source), max_segment_length);
    if !parts.is_empty() {
        return Segmentation {
            strategy: Strategy::Sentences,
            parts,
        };
    }

    Segmentation {
        strategy: Strategy::Fallback,
        parts: vec![source.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{char_len, MAX_SEGMENT_LENGTH};

    #[test]
    fn empty_input_gives_one_empty_part() {
        let result = segment_with_strategy("", MAX_SEGMENT_LENGTH);
        assert_eq!(result.strategy, Strategy::Empty);
        assert_eq!(result.parts, vec![String::new()]);
    }

    #[test]
    fn whitespace_only_is_empty() {
        let result = segment_with_strategy(" \n\t \n\n ", MAX_SEGMENT_LENGTH);
        assert_eq!(result.strategy, Strategy::Empty);
        assert_eq!(result.parts, vec![String::new()]);
    }

    #[test]
    fn numbered_markers() {
        let result = segment_with_strategy(
            "First part.\n\n1/ Second part.\n\n2/ Third part.",
            MAX_SEGMENT_LENGTH,
        );
        assert_eq!(result.strategy, Strategy::Markers);
        assert_eq!(
            result.parts,
            vec!["First part.", "1/ Second part.", "2/ Third part."]
        );
    }

    #[test]
    fn marker_parts_are_not_repacked() {
        let long = "word ".repeat(80);
        let text = format!("{long}\n\nshort");
        let parts = segment(&text, MAX_SEGMENT_LENGTH);
        assert_eq!(parts.len(), 2);
        assert!(char_len(&parts[0]) > MAX_SEGMENT_LENGTH);
    }

    #[test]
    fn single_marker_part_falls_through_to_sentences() {
        let result = segment_with_strategy("Just one line. Two sentences.", MAX_SEGMENT_LENGTH);
        assert_eq!(result.strategy, Strategy::Sentences);
        assert_eq!(result.parts, vec!["Just one line. Two sentences."]);
    }

    #[test]
    fn sentences_pack_under_budget() {
        let sentence = "This sentence is exactly fifty characters long ok.";
        assert_eq!(char_len(sentence), 50);
        let text = vec![sentence; 12].join(" ");
        let parts = segment(&text, MAX_SEGMENT_LENGTH);
        assert!(parts.len() > 1);
        for part in &parts {
            assert!(char_len(part) <= MAX_SEGMENT_LENGTH);
        }
        assert_eq!(parts.join(" "), text);
    }

    #[test]
    fn long_sentence_stays_whole() {
        let text = format!("{} end.", "a".repeat(400));
        let parts = segment(&text, MAX_SEGMENT_LENGTH);
        assert_eq!(parts, vec![text]);
    }

    #[test]
    fn no_terminators_is_one_part() {
        let parts = segment("no punctuation at all", MAX_SEGMENT_LENGTH);
        assert_eq!(parts, vec!["no punctuation at all"]);
    }

    #[test]
    fn terminators_only() {
        let parts = segment("?!...", MAX_SEGMENT_LENGTH);
        assert_eq!(parts, vec!["?!..."]);
    }

    #[test]
    fn never_empty() {
        for input in ["", " ", ".", "\n\n", "a", "1.", "[1]\n\n[2]"] {
            assert!(!segment(input, MAX_SEGMENT_LENGTH).is_empty(), "input {input:?}");
        }
    }
}
