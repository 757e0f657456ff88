//! Chinese text segmentation for hanseg.
//!
//! The engine splits raw mixed-script text into a left-to-right sequence
//! of word-like string tokens using a compiled dictionary:
//!
//! - [`segmenter`] -- the engine itself: a single right-to-left scan over
//!   the reversed-suffix trie with two-slot heuristic backtracking
//! - [`unregistered`] -- the fallback splitter for spans the dictionary
//!   cannot match (separator stripping, alphanumeric-run preservation,
//!   overlapping-bigram fallback)
//! - [`indexing`] -- the search-indexing adapter that keeps only tokens
//!   long enough to be useful as index terms
//!
//! ```
//! use hanseg_zh::Segmenter;
//!
//! let seg = Segmenter::new(["北京", "大学"], std::iter::empty::<&str>());
//! assert_eq!(seg.segment("北京大学"), vec!["北京", "大学"]);
//! ```

pub mod indexing;
pub mod segmenter;
pub mod unregistered;

pub use segmenter::{Segmenter, SegmenterError};
