//! Mele Phrase Trie implementation.
//!
//! This module provides an ordered multiway trie mapping token sequences
//! (phrases) to nested token sets. It supports phrase insertion, exact-path
//! lookup returning a sub-trie reference, full enumeration of the complete
//! paths below a sub-trie, and chained prefix matching over the direct child
//! tokens of a node.

mod error;
mod node;

use std::borrow::Cow;

pub use error::MeleTrieError;
pub use node::PhraseNode;

/// Result type for Mele Trie operations.
pub type MeleTrieResult<T> = Result<T, MeleTrieError>;

/// Configuration options for the Mele Phrase Trie.
#[derive(Debug, Clone)]
pub struct MeleTrieConfig {
    /// Whether tokens are lowercased on insertion and lookup
    pub fold_case: bool,

    /// Maximum phrase length allowed in the trie (bounds recursion depth)
    pub max_depth: usize,
}

impl Default for MeleTrieConfig {
    fn default() -> Self {
        Self {
            fold_case: false,
            max_depth: 64,
        }
    }
}

/// Mele Phrase Trie: an ordered multiway tree keyed by token.
///
/// Key features:
/// * Deterministic traversal order (children sorted lexicographically)
/// * Phrases sharing a prefix merge into a single path
/// * Sub-trie lookup aliases the owning tree, no copying
/// * Enumeration and prefix results are fresh caller-owned values per call
///
/// The trie is a plain single-threaded structure: mutation takes `&mut self`
/// and reads take `&self`. Callers that need concurrent access must wrap it
/// in their own synchronization.
#[derive(Debug)]
pub struct MeleTrie {
    /// The root node of the trie
    root: PhraseNode,

    /// Configuration options
    config: MeleTrieConfig,
}

impl MeleTrie {
    /// Creates a new empty `MeleTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(MeleTrieConfig::default())
    }

    /// Creates a new empty `MeleTrie` with the specified configuration.
    pub fn with_config(config: MeleTrieConfig) -> Self {
        Self {
            root: PhraseNode::new(),
            config,
        }
    }

    fn fold<'a>(&self, token: &'a str) -> Cow<'a, str> {
        if self.config.fold_case {
            Cow::Owned(token.to_lowercase())
        } else {
            Cow::Borrowed(token)
        }
    }

    /// Inserts a phrase, creating the missing nodes along its path.
    ///
    /// An empty phrase is accepted and leaves the trie untouched. Inserting a
    /// phrase that is a prefix of, or shares a prefix with, an earlier phrase
    /// is legal and merges paths.
    ///
    /// # Errors
    ///
    /// * [`MeleTrieError::EmptyToken`] if a token is the empty string.
    /// * [`MeleTrieError::PhraseTooDeep`] if the phrase has more tokens than
    ///   the configured `max_depth`.
    pub fn insert<I>(&mut self, phrase: I) -> MeleTrieResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tokens = Vec::new();
        for (position, token) in phrase.into_iter().enumerate() {
            let token = token.as_ref();
            if token.is_empty() {
                return Err(MeleTrieError::EmptyToken { position });
            }
            tokens.push(self.fold(token).into_owned());
        }

        if tokens.len() > self.config.max_depth {
            return Err(MeleTrieError::PhraseTooDeep {
                depth: tokens.len(),
                max_depth: self.config.max_depth,
            });
        }

        tracing::trace!(tokens = tokens.len(), "inserting phrase");

        let mut node = &mut self.root;
        for token in tokens {
            node = node.child_entry(token);
        }

        Ok(())
    }

    /// Follows `path` one child lookup per token and returns the sub-trie
    /// reached.
    ///
    /// Returns `None` as soon as a token has no matching child. An empty path
    /// returns the root, i.e. the whole trie. The returned reference aliases
    /// the owning tree and cannot outlive it.
    pub fn search<I>(&self, path: I) -> Option<&PhraseNode>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut node = &self.root;
        for token in path {
            node = node.child(self.fold(token.as_ref()).as_ref())?;
        }
        Some(node)
    }

    /// Enumerates every complete phrase stored below the root.
    ///
    /// See [`PhraseNode::phrases`] for the traversal discipline.
    pub fn phrases(&self) -> Vec<Vec<String>> {
        self.root.phrases()
    }

    /// Chained prefix matching over the root's direct child tokens.
    ///
    /// See [`PhraseNode::find_prefix`] for the chaining discipline.
    pub fn find_prefix(&self, prefix: &str) -> Vec<String> {
        self.root.find_prefix(self.fold(prefix).as_ref())
    }

    /// The root node of the trie.
    pub fn root(&self) -> &PhraseNode {
        &self.root
    }

    /// Number of complete phrases stored in the trie.
    ///
    /// This counts terminal nodes, so it traverses the entire tree: O(n).
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.root.terminal_count()
        }
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_terminal()
    }

    /// Removes every phrase from the trie.
    pub fn clear(&mut self) {
        self.root = PhraseNode::new();
    }
}

impl Default for MeleTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus_trie() -> MeleTrie {
        let mut trie = MeleTrie::new();
        trie.insert(["all", "you", "need", "is", "love"]).unwrap();
        trie.insert(["all", "shook", "up"]).unwrap();
        trie.insert(["all", "the", "best"]).unwrap();
        trie.insert(["all", "the", "gold", "in", "california"])
            .unwrap();
        trie
    }

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = MeleTrie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);

        // Test insertion
        trie.insert(["love", "me", "do"]).unwrap();
        assert!(!trie.is_empty());
        assert_eq!(trie.len(), 1);

        // Test lookup
        assert!(trie.search(["love", "me", "do"]).is_some());
        assert!(trie.search(["love", "me"]).is_some());
        assert!(trie.search(["love", "you", "do"]).is_none());

        // Merging a second phrase with a shared prefix
        trie.insert(["love", "me", "tender"]).unwrap();
        assert_eq!(trie.len(), 2);

        // Test clearing
        trie.clear();
        assert!(trie.is_empty());
        assert!(trie.search(["love"]).is_none());
    }

    #[test]
    fn test_empty_phrase_is_noop() {
        let mut trie = MeleTrie::new();
        trie.insert(std::iter::empty::<&str>()).unwrap();
        assert!(trie.is_empty());
    }

    #[test]
    fn test_empty_path_returns_root() {
        let trie = corpus_trie();
        let node = trie.search(std::iter::empty::<&str>()).unwrap();
        assert_eq!(node.branch_count(), trie.root().branch_count());
    }

    #[test]
    fn test_sub_trie_enumeration() {
        let trie = corpus_trie();

        let node = trie.search(["all", "the"]).expect("path must exist");
        assert_eq!(
            node.phrases(),
            vec![
                vec!["best".to_string()],
                vec![
                    "gold".to_string(),
                    "in".to_string(),
                    "california".to_string()
                ],
            ]
        );
    }

    #[test]
    fn test_prefix_chaining() {
        let mut trie = MeleTrie::new();
        trie.insert(["love", "the", "one"]).unwrap();
        trie.insert(["love", "me", "do"]).unwrap();
        trie.insert(["love", "is", "the", "answer"]).unwrap();
        trie.insert(["loving", "you"]).unwrap();

        // Root-level tokens starting with "lo" match; below "love" the next
        // level is matched against "love" itself, so "is"/"me"/"the" do not
        // extend the chain.
        assert_eq!(trie.find_prefix("lo"), vec!["love", "loving"]);

        // No child token starts with "xyz".
        assert!(trie.find_prefix("xyz").is_empty());
    }

    #[test]
    fn test_empty_trie_queries() {
        let trie = MeleTrie::new();
        assert!(trie.phrases().is_empty());
        assert!(trie.find_prefix("a").is_empty());
        assert!(trie.search(["a"]).is_none());
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut trie = MeleTrie::new();
        let err = trie.insert(["all", "", "up"]).unwrap_err();
        assert_eq!(err, MeleTrieError::EmptyToken { position: 1 });
        // The failed insert must not leave a partial path behind.
        assert!(trie.is_empty());
    }

    #[test]
    fn test_depth_cap() {
        let mut trie = MeleTrie::with_config(MeleTrieConfig {
            max_depth: 3,
            ..MeleTrieConfig::default()
        });
        trie.insert(["a", "b", "c"]).unwrap();
        let err = trie.insert(["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(
            err,
            MeleTrieError::PhraseTooDeep {
                depth: 4,
                max_depth: 3
            }
        );
    }

    #[test]
    fn test_fold_case() {
        let mut trie = MeleTrie::with_config(MeleTrieConfig {
            fold_case: true,
            ..MeleTrieConfig::default()
        });
        trie.insert(["All", "Shook", "Up"]).unwrap();

        assert!(trie.search(["all", "shook", "up"]).is_some());
        assert!(trie.search(["ALL"]).is_some());
        assert_eq!(trie.find_prefix("AL"), vec!["all"]);
        assert_eq!(trie.phrases(), vec![vec!["all", "shook", "up"]]);
    }
}
