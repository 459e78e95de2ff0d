//! Pure renderings of a finished thread.

/// Reading speed used by [`estimate_read_minutes`].
pub const WORDS_PER_MINUTE: usize = 200;

/// Separator placed between rendered posts.
pub const POST_SEPARATOR: &str = "\n\n---\n\n";

/// Render every segment as `"{i}/{n}\n\n{segment}"` and join them with
/// [`POST_SEPARATOR`].
pub fn format_for_posting<S: AsRef<str>>(segments: &[S]) -> String {
    let total = segments.len();
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| format!("{}/{total}\n\n{}", i + 1, segment.as_ref()))
        .collect::<Vec<_>>()
        .join(POST_SEPARATOR)
}

/// Prefix every segment with inline numbering, `"{i}/{n} {segment}"`.
pub fn number_segments<S: AsRef<str>>(segments: &[S]) -> Vec<String> {
    let total = segments.len();
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| format!("{}/{total} {}", i + 1, segment.as_ref()))
        .collect()
}

/// Whole minutes needed to read the thread at [`WORDS_PER_MINUTE`],
/// rounded up. Zero when there are no words.
pub fn estimate_read_minutes<S: AsRef<str>>(segments: &[S]) -> usize {
    let words: usize = segments
        .iter()
        .map(|s| s.as_ref().split_whitespace().count())
        .sum();
    words.div_ceil(WORDS_PER_MINUTE)
}
