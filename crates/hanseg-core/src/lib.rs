//! Shared character classification for the hanseg workspace.
//!
//! The segmentation engine, the dictionary trie and the fallback splitter
//! all agree on four questions about a character: is it a separator, does
//! it belong to an alphanumeric token, is it word-like at all, and how is
//! it folded for dictionary comparison. Those answers live here so that
//! every crate classifies text identically.

pub mod character;

pub use character::{fold_char, is_separator, is_token_char, is_word_like};
