// Search-indexing adapter: segment, then keep only tokens long enough to
// be useful as index terms.

use crate::Segmenter;

/// Minimum token length (in characters) kept for indexing. Single
/// characters are too ambiguous to index in Chinese text.
pub const MIN_INDEX_CHARS: usize = 2;

/// Whether a token qualifies as an index term.
pub fn keep_for_index(token: &str) -> bool {
    token.chars().count() >= MIN_INDEX_CHARS
}

/// Segment `text` and keep only index-worthy tokens.
///
/// The length filter is this consumer's policy, not the engine's:
/// [`Segmenter::segment`] always returns every token.
pub fn index_terms(segmenter: &Segmenter, text: &str) -> Vec<String> {
    segmenter
        .segment(text)
        .into_iter()
        .filter(|t| keep_for_index(t))
        .collect()
}
