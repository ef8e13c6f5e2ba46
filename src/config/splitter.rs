//! Splitter configuration section.
//!
//! This module defines how input lines are tokenized before insertion into
//! the trie.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Line tokenization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterSection {
    /// Token separator used when splitting input lines; exactly one
    /// non-alphanumeric character
    pub separator: String,

    /// Whether whitespace runs are collapsed before splitting
    pub collapse_whitespace: bool,
}

impl Default for SplitterSection {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            collapse_whitespace: true,
        }
    }
}

impl SplitterSection {
    /// The separator as a `char`, for the splitting routines.
    ///
    /// Call only on a validated section.
    pub fn separator_char(&self) -> char {
        self.separator.chars().next().unwrap_or(' ')
    }
}

impl Validate for SplitterSection {
    fn validate(&self) -> ConfigResult<()> {
        let mut chars = self.separator.chars();
        let separator = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "separator must be exactly one character, got \"{}\"",
                    self.separator
                )))
            }
        };

        // An alphanumeric separator would split tokens apart on their own
        // letters or digits.
        if separator.is_alphanumeric() {
            return Err(ConfigError::ValidationError(format!(
                "separator must not be alphanumeric, got '{separator}'"
            )));
        }

        Ok(())
    }
}
