// Copyright (c) 2025 Mele Text Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Mele phrase trie.
//!
//! Nodes are the building blocks of the trie. Each node keeps its children in
//! a `BTreeMap` keyed by token, so sibling order is always the lexicographic
//! token order and every traversal below is deterministic.

use std::collections::BTreeMap;

/// A node in the Mele phrase trie.
///
/// Each node represents one token position along an inserted phrase. A node
/// with no children is *terminal*: at least one inserted phrase ends there.
/// Every node exclusively owns its children, so the structure is a tree with
/// no sharing and no cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseNode {
    /// Ordered map of tokens to child nodes.
    children: BTreeMap<String, PhraseNode>,
}

impl PhraseNode {
    /// Creates a new node with no children.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Returns `true` if no phrase continues below this node.
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of distinct tokens branching off this node.
    pub fn branch_count(&self) -> usize {
        self.children.len()
    }

    /// Looks up the child reached by `token`, if any.
    pub fn child(&self, token: &str) -> Option<&PhraseNode> {
        self.children.get(token)
    }

    /// Iterates over the direct child tokens in lexicographic order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Collects every complete downward path from this node to a terminal
    /// node, depth-first in token order.
    ///
    /// The token accumulator is snapshotted and cleared whenever a terminal
    /// node is reached, so each emitted phrase holds the tokens gathered
    /// since the previous emission. After backtracking into the next sibling
    /// subtree the accumulator starts fresh from that branch point.
    ///
    /// A terminal starting node (including the empty trie's root) yields no
    /// phrases. The returned value is freshly built on every call and owned
    /// by the caller.
    pub fn phrases(&self) -> Vec<Vec<String>> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut accumulator = Vec::new();
        self.collect_phrases(&mut accumulator, &mut out);
        out
    }

    fn collect_phrases(&self, accumulator: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        if self.is_terminal() {
            out.push(std::mem::take(accumulator));
        }
        for (token, child) in &self.children {
            accumulator.push(token.clone());
            child.collect_phrases(accumulator, out);
        }
    }

    /// Collects the chain of child tokens matched by `prefix`, depth-first in
    /// token order.
    ///
    /// Every direct child token starting with `prefix` is recorded, and the
    /// matched token itself becomes the prefix for that child's own children.
    /// Deeper levels therefore match against the token found one level up,
    /// not against the original prefix. Returns an empty result if this node
    /// has no children or no child token matches.
    pub fn find_prefix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_prefix_chain(prefix, &mut out);
        out
    }

    fn collect_prefix_chain(&self, prefix: &str, out: &mut Vec<String>) {
        if self.is_terminal() {
            return;
        }
        for (token, child) in &self.children {
            if token.starts_with(prefix) {
                out.push(token.clone());
                child.collect_prefix_chain(token, out);
            }
        }
    }

    /// Number of terminal nodes at or below this node.
    pub(crate) fn terminal_count(&self) -> usize {
        if self.is_terminal() {
            return 1;
        }
        self.children.values().map(PhraseNode::terminal_count).sum()
    }

    /// Fetches or creates the child for `token` during insertion.
    pub(crate) fn child_entry(&mut self, token: String) -> &mut PhraseNode {
        self.children.entry(token).or_default()
    }
}
