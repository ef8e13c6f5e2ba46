//! Data structures for the Mele text toolkit.
//!
//! This module contains the phrase trie at the heart of the toolkit. The
//! implementation adheres to the project requirements:
//! - No unsafe code
//! - Deterministic traversal order everywhere
//! - Query results are fresh caller-owned values, never shared scratch state

pub mod mele_trie;

// Re-export the trie surface
pub use mele_trie::{MeleTrie, MeleTrieConfig, MeleTrieError, MeleTrieResult, PhraseNode};
