// The segmentation engine: a single right-to-left scan over the
// reversed-suffix trie with two-slot heuristic backtracking.

use hanseg_core::is_word_like;
use hanseg_trie::loader::{words_from_bytes, words_from_reader};
use hanseg_trie::{DictError, SpecialWordSet, SuffixTrie};
use std::io::BufRead;

use crate::unregistered;

/// A dictionary hit of at most this many characters is tentative: it is
/// remembered in a backtracking register instead of being committed, so a
/// longer match ending further left can still win.
const SHORT_MATCH_LEN: usize = 2;

/// A deferred candidate may be revived only while the scan's dead end is
/// fewer than this many characters away from it.
///
/// Both bounds are empirically tuned; see DESIGN.md.
const RETRACT_WINDOW: usize = 5;

/// Error type for fallible engine construction.
#[derive(Debug, thiserror::Error)]
pub enum SegmenterError {
    #[error("failed to load dictionary: {0}")]
    Dict(#[from] DictError),
}

/// A confirmed short match the scan may fall back to (the primary
/// backtracking register).
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    /// Scan cursor at the time of the match (right edge of the match).
    cursor: usize,
    /// Match length in characters.
    matched: usize,
    /// Right boundary of the unresolved span at the time of the match.
    span_end: usize,
}

/// A short match deferred because it ends in a special word (the
/// secondary backtracking register). Reviving it rewinds the output.
#[derive(Debug, Clone, Copy)]
struct Deferred {
    cursor: usize,
    matched: usize,
    span_end: usize,
    /// Output length at deferral time; tokens emitted past this point are
    /// discarded when the candidate is revived.
    out_mark: usize,
}

/// The segmentation engine.
///
/// Holds the compiled dictionary trie and the special-word set, both built
/// once at construction and read-only afterwards. A single instance may
/// serve concurrent [`segment`](Segmenter::segment) calls; each call keeps
/// its scan state on its own stack.
#[derive(Debug, Clone)]
pub struct Segmenter {
    trie: SuffixTrie,
    special: SpecialWordSet,
}

impl Segmenter {
    /// Build an engine from in-memory word lists.
    ///
    /// `words` feeds the dictionary trie (entries longer than four
    /// characters are dropped there); `special_words` feeds the
    /// special-word set used during ambiguity resolution.
    pub fn new<I, S, J, T>(words: I, special_words: J) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        J: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            trie: SuffixTrie::from_words(words),
            special: SpecialWordSet::from_words(special_words),
        }
    }

    /// Build an engine from raw word-list file contents (one word per
    /// line). Decoding is lossy, so this never fails.
    pub fn from_bytes(main: &[u8], suffix: Option<&[u8]>) -> Self {
        Self::new(
            words_from_bytes(main),
            suffix.map(words_from_bytes).unwrap_or_default(),
        )
    }

    /// Build an engine from buffered readers over the two word lists.
    pub fn from_readers<R, S>(main: R, suffix: Option<S>) -> Result<Self, SegmenterError>
    where
        R: BufRead,
        S: BufRead,
    {
        let words = words_from_reader(main)?;
        let special = match suffix {
            Some(r) => words_from_reader(r)?,
            None => Vec::new(),
        };
        Ok(Self::new(words, special))
    }

    /// The number of dictionary words accepted into the trie.
    pub fn dictionary_len(&self) -> usize {
        self.trie.len()
    }

    /// The number of special words loaded.
    pub fn special_len(&self) -> usize {
        self.special.len()
    }

    /// Segment raw bytes, decoding them lossily first. Host interfaces
    /// that carry undecoded text never get an error from this.
    pub fn segment_bytes(&self, data: &[u8]) -> Vec<String> {
        self.segment(&String::from_utf8_lossy(data))
    }

    /// Segment `text` into word-like tokens, in left-to-right reading
    /// order.
    ///
    /// The scan itself runs right to left: `i` is the right edge of the
    /// not-yet-consumed region, `j` the length of the tentative dictionary
    /// match ending at `i`, and `z` the right boundary of the current
    /// unresolved span. Characters the trie cannot anchor accumulate
    /// between the cursor and `z` until the next confirmed boundary hands
    /// them to the fallback splitter. Tokens are gathered in scan order
    /// and reversed once at the end.
    ///
    /// Never fails; the empty string yields an empty vector. Separator
    /// punctuation never appears in the output.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut out: Vec<String> = Vec::new();

        let mut i = len;
        let mut j = 0usize;
        let mut z = len;
        let mut node = self.trie.root();
        let mut primary: Option<Checkpoint> = None;
        let mut secondary: Option<Deferred> = None;

        while i - j > 0 {
            let c = chars[i - j - 1];
            let Some(child) = node.step(c) else {
                if primary.is_none() && secondary.is_none() {
                    // Nothing to fall back to: the character stays in the
                    // unresolved span and the scan restarts one step left.
                    j = 0;
                    i -= 1;
                    node = self.trie.root();
                    continue;
                }
                if let Some(cp) = primary.take() {
                    // Retract to the last confirmed short match. A pending
                    // deferred candidate survives a primary retraction.
                    i = cp.cursor;
                    j = cp.matched;
                    z = cp.span_end;
                } else if let Some(d) = secondary.take() {
                    // The deferred candidate is revived only while the
                    // dead end is close, still inside running text, and
                    // the current left boundary is not itself a special
                    // word. Either way the register is spent.
                    if d.cursor - i < RETRACT_WINDOW
                        && is_word_like(c)
                        && !self.special.contains_char(chars[i - j])
                    {
                        i = d.cursor;
                        j = d.matched;
                        z = d.span_end;
                        out.truncate(d.out_mark);
                    }
                }
                node = self.trie.root();
                close_boundary(&chars, &mut out, i, j, z);
                i -= j;
                z = i;
                j = 0;
                continue;
            };

            node = child;
            j += 1;
            if !node.has_word_end() {
                continue;
            }

            // A complete dictionary word ends at the cursor.
            if j <= SHORT_MATCH_LEN {
                primary = Some(Checkpoint {
                    cursor: i,
                    matched: j,
                    span_end: z,
                });
                // A short match directly abutting the unresolved text and
                // ending in a special word is deferred instead: the scan
                // restarts one character left, and only a dead end nearby
                // can bring the candidate back. An already pending
                // candidate one character away keeps priority.
                let nearer_pending = secondary.is_some_and(|d| d.cursor - i <= 1);
                if z - i < 2 && self.special.contains_char(chars[i - 1]) && !nearer_pending {
                    primary = None;
                    secondary = Some(Deferred {
                        cursor: i,
                        matched: j,
                        span_end: z,
                        out_mark: out.len(),
                    });
                    node = self.trie.root();
                    i -= 1;
                    j = 0;
                }
                continue;
            }

            // Longer matches are committed on the spot.
            node = self.trie.root();
            close_boundary(&chars, &mut out, i, j, z);
            i -= j;
            z = i;
            j = 0;
            primary = None;
            secondary = None;
        }

        if let Some(cp) = primary {
            // Flush the pending match as the final confirmed boundary,
            // then sweep whatever is left of the prefix.
            close_boundary(&chars, &mut out, cp.cursor, cp.matched, cp.span_end);
            let rest = cp.cursor - cp.matched;
            if rest > 0 {
                push_reversed(&mut out, unregistered::process_chars(&chars[..rest]));
            }
        } else {
            push_reversed(&mut out, unregistered::process_chars(&chars[..z]));
        }

        out.reverse();
        out
    }
}

/// Close a confirmed boundary: hand the unresolved span right of the match
/// to the fallback splitter, then emit the matched word itself. Tokens go
/// into `out` in scan order (right to left).
fn close_boundary(chars: &[char], out: &mut Vec<String>, i: usize, j: usize, z: usize) {
    if i < z {
        push_reversed(out, unregistered::process_chars(&chars[i..z]));
    }
    if j > 0 {
        out.push(chars[i - j..i].iter().collect());
    }
}

fn push_reversed(out: &mut Vec<String>, tokens: Vec<String>) {
    out.extend(tokens.into_iter().rev());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(words: &[&str], special: &[&str]) -> Segmenter {
        Segmenter::new(words.iter().copied(), special.iter().copied())
    }

    // -- Basic scenarios ------------------------------------------------------

    #[test]
    fn adjacent_dictionary_words() {
        let seg = engine(&["北京", "大学"], &[]);
        assert_eq!(seg.segment("北京大学"), vec!["北京", "大学"]);
    }

    #[test]
    fn separator_splits_and_is_dropped() {
        let seg = engine(&["北京", "大学"], &[]);
        assert_eq!(seg.segment("北京大学,你好"), vec!["北京", "大学", "你好"]);
    }

    #[test]
    fn alnum_run_before_dictionary_word() {
        let seg = engine(&["北京", "大学"], &[]);
        assert_eq!(seg.segment("abc123北京"), vec!["abc123", "北京"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let seg = engine(&["北京", "大学"], &[]);
        assert_eq!(seg.segment(""), Vec::<String>::new());
    }

    #[test]
    fn single_unknown_char_passes_through() {
        let seg = engine(&["北京", "大学"], &[]);
        assert_eq!(seg.segment("中"), vec!["中"]);
    }

    #[test]
    fn whitespace_only_input() {
        let seg = engine(&["北京"], &[]);
        assert_eq!(seg.segment("  \t\n"), Vec::<String>::new());
    }

    // -- Dictionary matching --------------------------------------------------

    #[test]
    fn unknown_prefix_becomes_bigrams() {
        let seg = engine(&["北京"], &[]);
        assert_eq!(seg.segment("我在北京"), vec!["我在", "北京"]);
    }

    #[test]
    fn longest_match_wins() {
        let seg = engine(&["大学", "中大学"], &[]);
        assert_eq!(seg.segment("中大学"), vec!["中大学"]);
    }

    #[test]
    fn ascii_words_match_case_insensitively() {
        let seg = engine(&["Rust"], &[]);
        // The token keeps the original casing; only matching folds.
        assert_eq!(seg.segment("RUST人"), vec!["RUST", "人"]);
    }

    #[test]
    fn word_at_text_end_is_found() {
        let seg = engine(&["大学"], &[]);
        assert_eq!(seg.segment("大学"), vec!["大学"]);
    }

    #[test]
    fn empty_dictionary_falls_back_entirely() {
        let seg = engine(&[], &[]);
        assert_eq!(seg.segment("你好"), vec!["你好"]);
        assert_eq!(seg.segment("abc"), vec!["abc"]);
        assert_eq!(seg.segment("我爱中国"), vec!["我爱", "爱中", "中国"]);
    }

    #[test]
    fn mixed_text_with_email_and_dictionary_word() {
        let seg = engine(&["北京", "大学"], &[]);
        assert_eq!(
            seg.segment("email: foo@bar.com 北京欢迎你"),
            vec!["email", "foo@bar.com", "北京", "欢迎", "迎你"]
        );
    }

    // -- Special-word deferral ------------------------------------------------

    #[test]
    fn special_word_flips_ambiguous_parse() {
        // Without bias the rightmost short match wins; with 生 marked as
        // a suffix trigger, the match is deferred and 大学 takes over.
        let plain = engine(&["学生", "大学"], &[]);
        assert_eq!(plain.segment("大学生"), vec!["大", "学生"]);

        let biased = engine(&["学生", "大学"], &["生"]);
        assert_eq!(biased.segment("大学生"), vec!["大学", "生"]);
    }

    #[test]
    fn revived_candidate_rewinds_output() {
        // 大学 is deferred (ends in the special word 学); the scan then
        // commits 中大 via the primary register, dead-ends on 孔, and
        // revives the deferred candidate, discarding the interim tokens.
        let seg = engine(&["大学", "中大"], &["学"]);
        assert_eq!(seg.segment("孔中大学"), vec!["孔中", "大学"]);
    }

    #[test]
    fn revival_during_partial_descent() {
        let seg = engine(&["大学", "一中大"], &["学"]);
        assert_eq!(seg.segment("口中大学"), vec!["口中", "大学"]);
    }

    #[test]
    fn revival_blocked_by_special_boundary() {
        // The dead end sits right after the special word itself, so the
        // deferred 大学 stays dead and the span falls back to bigrams.
        let seg = engine(&["大学"], &["学"]);
        assert_eq!(seg.segment("我大学"), vec!["我大", "学"]);
    }

    #[test]
    fn deferral_without_rematch_degrades_to_fallback() {
        // Deferring an exact match that nothing overrides costs the match:
        // a known hazard of the suffix heuristic, kept as-is.
        let seg = engine(&["大学"], &["学"]);
        assert_eq!(seg.segment("大学"), vec!["大", "学"]);
    }

    // -- Properties -----------------------------------------------------------

    #[test]
    fn no_separator_tokens_in_output() {
        let seg = engine(&["北京", "大学"], &[]);
        let tokens = seg.segment("北京，大学！你好？（测试）……");
        for t in &tokens {
            assert!(
                !t.chars().all(|c| hanseg_core::is_separator(c) || c.is_whitespace()),
                "separator token {t:?} leaked into output"
            );
        }
    }

    #[test]
    fn every_character_survives_in_order() {
        // Concatenated output must contain the non-separator input
        // characters as a subsequence; bigram windows may duplicate
        // characters but never drop or reorder them.
        let seg = engine(&["北京", "大学", "Rust"], &[]);
        let inputs = [
            "北京大学",
            "我在北京学Rust，非常开心！",
            "abc123，《测试》一二三四五",
            "文大学", // pending-match flush with a leftover prefix
        ];
        for input in inputs {
            let tokens = seg.segment(input);
            let concat: Vec<char> = tokens.concat().chars().collect();
            let wanted: Vec<char> = input
                .chars()
                .filter(|&c| !hanseg_core::is_separator(c) && !c.is_whitespace())
                .collect();
            let mut pos = 0;
            for &c in &wanted {
                match concat[pos..].iter().position(|&x| x == c) {
                    Some(off) => pos += off + 1,
                    None => panic!("character {c:?} of {input:?} lost in {tokens:?}"),
                }
            }
        }
    }

    #[test]
    fn pending_match_flush_keeps_prefix() {
        // 文大学: the scan consumes the whole text while 大学 is still
        // only a pending candidate; the flush must not drop 文.
        let seg = engine(&["大学", "人文大学"], &[]);
        assert_eq!(seg.segment("文大学"), vec!["文", "大学"]);
    }

    // -- Byte and reader construction -----------------------------------------

    #[test]
    fn from_bytes_builds_both_lists() {
        let seg = Segmenter::from_bytes("北京\n大学\n".as_bytes(), Some("学\n".as_bytes()));
        assert_eq!(seg.dictionary_len(), 2);
        assert_eq!(seg.special_len(), 1);
        assert_eq!(seg.segment("北京"), vec!["北京"]);
    }

    #[test]
    fn from_readers_propagates_io() {
        let seg = Segmenter::from_readers("北京\n".as_bytes(), None::<&[u8]>)
            .expect("in-memory readers cannot fail");
        assert_eq!(seg.dictionary_len(), 1);
    }

    #[test]
    fn segment_bytes_decodes_lossily() {
        let seg = engine(&["北京"], &[]);
        let mut data = "北京".as_bytes().to_vec();
        data.push(0xFF);
        let tokens = seg.segment_bytes(&data);
        assert_eq!(tokens[0], "北京");
    }
}
