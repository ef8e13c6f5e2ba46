//! Trie configuration section.
//!
//! This module defines the configuration for the phrase trie itself:
//! depth bounds and token normalization.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::MeleTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Phrase trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieSection {
    /// Maximum phrase length accepted by insertion
    pub max_depth: usize,

    /// Whether tokens are lowercased on insertion and lookup
    pub fold_case: bool,
}

impl Default for TrieSection {
    fn default() -> Self {
        let defaults = MeleTrieConfig::default();
        Self {
            max_depth: defaults.max_depth,
            fold_case: defaults.fold_case,
        }
    }
}

impl Validate for TrieSection {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValidationError(
                "max_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl From<&TrieSection> for MeleTrieConfig {
    fn from(section: &TrieSection) -> Self {
        Self {
            max_depth: section.max_depth,
            fold_case: section.fold_case,
        }
    }
}
