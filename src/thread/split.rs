//! Choosing where to cut an over-long segment.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::char_len;

/// A terminator followed by a whitespace run.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary regex"));

/// Byte offset at which `content` should be cut in two.
///
/// Candidates sit right after each terminator + whitespace run that leaves
/// something to its right. The candidate closest to the middle (in
/// characters) wins, the earliest on ties. Without candidates the middle
/// character itself is used.
///
/// A boundary that ends the content is skipped on purpose, even though it
/// matches: taking it would leave an empty second segment, so such content
/// is cut at its middle instead.
pub fn split_point(content: &str) -> usize {
    let midpoint = char_len(content) / 2;

    SENTENCE_BOUNDARY
        .find_iter(content)
        .map(|m| m.end())
        .filter(|&end| end < content.len())
        .min_by_key(|&end| char_len(&content[..end]).abs_diff(midpoint))
        .unwrap_or_else(|| byte_offset(content, midpoint))
}

/// Cut `content` at [`split_point`], trimming both halves.
pub fn split_content(content: &str) -> (String, String) {
    let at = split_point(content);
    let (head, tail) = content.split_at(at);
    (head.trim().to_string(), tail.trim().to_string())
}

fn byte_offset(content: &str, char_index: usize) -> usize {
    content
        .char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_boundary_nearest_middle() {
        // boundaries after "aaaa. " (6) and "aaaa. bbbbbbbb. " (16); middle is 13
        let content = "aaaa. bbbbbbbb. cccccccccc";
        assert_eq!(char_len(content), 26);
        assert_eq!(split_point(content), 16);
    }

    #[test]
    fn ties_go_to_the_earlier_boundary() {
        // len 16, middle 8; candidates at 4 and 12
        let content = "aa. bbbbbb. cccc";
        assert_eq!(split_point(content), 4);
    }

    #[test]
    fn consumes_whole_whitespace_run() {
        let content = "First part!   Second part";
        let (head, tail) = split_content(content);
        assert_eq!(head, "First part!");
        assert_eq!(tail, "Second part");
    }

    #[test]
    fn falls_back_to_midpoint() {
        let content = "abcdefghij";
        assert_eq!(split_point(content), 5);
        let (head, tail) = split_content(content);
        assert_eq!(head, "abcde");
        assert_eq!(tail, "fghij");
    }

    #[test]
    fn trailing_boundary_is_not_a_candidate() {
        let content = "no boundary inside here. ";
        let at = split_point(content);
        assert!(at < content.len());
    }

    #[test]
    fn boundary_at_end_falls_back_to_midpoint() {
        let content = format!("{}. ", "a".repeat(300));
        assert_eq!(split_point(&content), 151);
        let (head, tail) = split_content(&content);
        assert_eq!(char_len(&head), 151);
        assert_eq!(tail, format!("{}.", "a".repeat(149)));
        assert!(!tail.is_empty());
    }

    #[test]
    fn midpoint_respects_char_boundaries() {
        let content = "ééééééé";
        let (head, tail) = split_content(content);
        assert_eq!(head, "ééé");
        assert_eq!(tail, "éééé");
    }
}
