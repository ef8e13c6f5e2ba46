// Copyright (c) 2025 Mele Text Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Mele phrase trie.
//!
//! All query operations on the trie are total; only the insertion boundary
//! can fail, and only on caller contract violations.

/// Errors that can occur at the Mele trie insertion boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeleTrieError {
    /// An empty-string token was supplied inside a phrase.
    #[error("Empty token at position {position} in phrase")]
    EmptyToken {
        /// Zero-based index of the offending token.
        position: usize,
    },

    /// A phrase is longer than the configured depth cap.
    #[error("Phrase of {depth} tokens exceeds maximum trie depth of {max_depth}")]
    PhraseTooDeep {
        /// Number of tokens in the rejected phrase.
        depth: usize,
        /// The configured depth cap.
        max_depth: usize,
    },
}
