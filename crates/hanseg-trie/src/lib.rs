//! Dictionary data structures for hanseg.
//!
//! This crate holds everything the segmentation engine consults at match
//! time, built once and read-only afterwards:
//!
//! - [`trie`] -- the reversed-suffix trie keyed by single characters
//! - [`special`] -- the flat special-word set biasing ambiguity resolution
//! - [`loader`] -- plain-text word-list reading (one word per line)

pub mod loader;
pub mod special;
pub mod trie;

pub use special::SpecialWordSet;
pub use trie::{Node, SuffixTrie};

/// Error type for word-list loading.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}
