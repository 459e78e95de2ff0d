//! Sentence tokenizing and greedy packing under a character budget.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::char_len;

/// Non-terminators followed by a run of `.`, `!` or `?`.
static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("valid sentence regex"));

/// Split text into sentences, keeping every byte of the input.
///
/// Each sentence carries the whitespace that preceded it, so concatenating
/// the result gives back `text`. Text after the last terminator becomes a
/// trailing sentence; text with no terminator is a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut end = 0;

    for m in SENTENCE.find_iter(text) {
        sentences.push(&text[end..m.end()]);
        end = m.end();
    }

    let rest = &text[end..];
    if !rest.trim().is_empty() {
        sentences.push(rest);
    } else if let Some(last) = sentences.last_mut() {
        // fold trailing whitespace into the last sentence
        *last = &text[end - last.len()..];
    }

    if sentences.is_empty() && !text.is_empty() {
        sentences.push(text);
    }

    sentences
}

/// Greedily pack sentences into buffers of at most `limit` characters.
///
/// A buffer is closed when the next sentence would push it over the limit.
/// A single sentence longer than the limit becomes its own over-limit part.
/// Closed buffers are trimmed; blank buffers are dropped.
pub fn pack_sentences(sentences: &[&str], limit: usize) -> Vec<String> {
    let mut packed = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0;

    let mut close = |buffer: &str| {
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            packed.push(trimmed.to_string());
        }
    };

    for sentence in sentences {
        let sentence_len = char_len(sentence);
        if buffer_len + sentence_len > limit && !buffer.trim().is_empty() {
            close(&buffer);
            buffer.clear();
            buffer_len = 0;
        }
        buffer.push_str(sentence);
        buffer_len += sentence_len;
    }
    close(&buffer);

    packed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_basic() {
        let sentences = split_sentences("Hello world. How are you? I am fine!");
        assert_eq!(sentences, vec!["Hello world.", " How are you?", " I am fine!"]);
    }

    #[test]
    fn split_keeps_terminator_runs() {
        let sentences = split_sentences("Wait... What?! Ok.");
        assert_eq!(sentences, vec!["Wait...", " What?!", " Ok."]);
    }

    #[test]
    fn split_keeps_unterminated_tail() {
        let sentences = split_sentences("Done. Not done");
        assert_eq!(sentences, vec!["Done.", " Not done"]);
    }

    #[test]
    fn split_without_terminators() {
        let sentences = split_sentences("no terminators here");
        assert_eq!(sentences, vec!["no terminators here"]);
    }

    #[test]
    fn split_leading_terminators_attach_forward() {
        let sentences = split_sentences("...and then. End.");
        assert_eq!(sentences, vec!["...and then.", " End."]);
    }

    #[test]
    fn split_is_lossless() {
        let text = "  One.  Two!\nThree? four  ";
        assert_eq!(split_sentences(text).concat(), text);
    }

    #[test]
    fn split_trailing_whitespace_folds_into_last() {
        let sentences = split_sentences("One. Two.   ");
        assert_eq!(sentences, vec!["One.", " Two.   "]);
    }

    #[test]
    fn split_empty() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn pack_fits_in_one() {
        let packed = pack_sentences(&["One.", " Two.", " Three."], 280);
        assert_eq!(packed, vec!["One. Two. Three."]);
    }

    #[test]
    fn pack_closes_before_overflow() {
        let packed = pack_sentences(&["aaaa.", " bbbb.", " cccc."], 11);
        assert_eq!(packed, vec!["aaaa. bbbb.", "cccc."]);
    }

    #[test]
    fn pack_keeps_long_sentence_whole() {
        let long = format!("{}.", "x".repeat(300));
        let packed = pack_sentences(&["Short.", &format!(" {long}"), " Tail."], 280);
        assert_eq!(packed.len(), 3);
        assert_eq!(packed[0], "Short.");
        assert_eq!(packed[1], long);
        assert_eq!(packed[2], "Tail.");
    }

    #[test]
    fn pack_counts_chars_not_bytes() {
        // 5 chars, 10+ bytes each
        let packed = pack_sentences(&["éééé.", "éééé."], 10);
        assert_eq!(packed, vec!["éééé.éééé."]);
    }

    #[test]
    fn pack_drops_blank() {
        assert!(pack_sentences(&["   "], 280).is_empty());
    }
}
