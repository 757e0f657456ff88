// Fallback splitter for spans the dictionary could not match.
//
// Three steps: drop separators, keep alphanumeric runs whole, and split
// whatever remains into overlapping two-character windows so that every
// adjacent character pair survives in at least one token.

use hanseg_core::{is_separator, is_token_char};

/// Split an unrecognized span into tokens, in left-to-right order.
///
/// Pure and stateless: the same span always yields the same tokens.
/// Separator punctuation and whitespace are dropped, maximal runs of
/// `[0-9A-Za-z\-\+#@_.]` pass through unsplit, and the remaining
/// fragments fall back to [`bigram_split`].
pub fn process(span: &str) -> Vec<String> {
    let chars: Vec<char> = span.chars().collect();
    process_chars(&chars)
}

/// Character-slice variant of [`process`], used directly by the scan.
pub fn process_chars(span: &[char]) -> Vec<String> {
    let mut tokens = Vec::new();
    for piece in span.split(|&c| is_separator(c) || c.is_whitespace()) {
        if piece.is_empty() {
            continue;
        }
        split_piece(piece, &mut tokens);
    }
    tokens
}

/// Split one separator-free piece: alphanumeric runs survive whole, the
/// fragments between them are bigram-split.
fn split_piece(piece: &[char], tokens: &mut Vec<String>) {
    let mut rest = piece;
    while !rest.is_empty() {
        let run_len = rest.iter().take_while(|&&c| is_token_char(c)).count();
        if run_len > 0 {
            tokens.push(rest[..run_len].iter().collect());
            rest = &rest[run_len..];
            continue;
        }
        let frag_len = rest.iter().take_while(|&&c| !is_token_char(c)).count();
        bigram_split(&rest[..frag_len], tokens);
        rest = &rest[frag_len..];
    }
}

/// Emit the overlapping two-character windows of a fragment.
///
/// A single character is emitted as-is; a fragment of n >= 2 characters
/// yields its n-1 adjacent pairs, sliding by one. This guarantees that
/// every adjacent character pair of the fragment appears together in at
/// least one token even though no dictionary entry matched.
pub fn bigram_split(fragment: &[char], tokens: &mut Vec<String>) {
    match fragment.len() {
        0 => {}
        1 => tokens.push(fragment[0].to_string()),
        n => {
            for window in 0..n - 1 {
                tokens.push(fragment[window..window + 2].iter().collect());
            }
        }
    }
}
