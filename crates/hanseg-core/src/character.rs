// Character classification for mixed CJK/ASCII text.

/// Check whether a character is a separator.
///
/// Separators are dropped from segmentation output; they delimit
/// unrecognized spans but never form tokens themselves. The set covers the
/// common CJK punctuation marks, their ASCII counterparts and the
/// ideographic space. Plain ASCII whitespace is handled separately by the
/// callers via [`char::is_whitespace`].
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\u{3002}' // 。 ideographic full stop
            | '\u{FF0C}' // ， fullwidth comma
            | ','
            | '\u{FF01}' // ！ fullwidth exclamation mark
            | '\u{2026}' // … horizontal ellipsis
            | '!'
            | '\u{300A}' // 《 left double angle bracket
            | '\u{300B}' // 》 right double angle bracket
            | '<'
            | '>'
            | '"'
            | '\''
            | ':'
            | '\u{FF1A}' // ： fullwidth colon
            | '\u{FF1F}' // ？ fullwidth question mark
            | '?'
            | '\u{3001}' // 、 ideographic comma
            | '|'
            | '\u{201C}' // “ left double quotation mark
            | '\u{201D}' // ” right double quotation mark
            | '\u{2018}' // ‘ left single quotation mark
            | '\u{2019}' // ’ right single quotation mark
            | '\u{FF1B}' // ； fullwidth semicolon
            | '\u{2014}' // — em dash
            | '\u{FF08}' // （ fullwidth left parenthesis
            | '\u{FF09}' // ） fullwidth right parenthesis
            | '\u{00B7}' // · middle dot
            | '('
            | ')'
            | '\u{3000}' // ideographic space
    )
}

/// Check whether a character may appear in an alphanumeric token.
///
/// Maximal runs of these characters survive segmentation as single
/// unsplit tokens: identifiers, numbers, version strings, tags and
/// email-like text such as `abc123`, `c++`, `#tag` or `foo@bar.com`.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '#' | '@' | '_' | '.')
}

/// Check whether a character is word-like: an alphanumeric character, an
/// underscore, or a CJK character (U+2E80..=U+9FFF, covering the radicals,
/// kana and the unified ideographs).
///
/// Used by the scan to decide whether a dead-end position is still inside
/// running text, as opposed to punctuation or other symbols.
pub fn is_word_like(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || ('\u{2E80}'..='\u{9FFF}').contains(&c)
}

/// Fold a character for dictionary comparison.
///
/// Dictionary matching is case-insensitive for ASCII letters only; all
/// other characters compare verbatim.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_ascii_lowercase()
}
