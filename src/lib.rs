//! Mele Text Library
//!
//! This library contains the core components of the Mele text toolkit: a
//! phrase trie for indexing token sequences and the companion split/gather
//! text utilities. The library is designed to be used by the binary crate,
//! but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! The Mele text toolkit is designed with the following principles in mind:
//! - Strict component boundaries
//! - Deterministic traversal and enumeration order
//! - Comprehensive error handling and propagation
//! - Query results owned by the caller, never shared scratch state
//! - No unsafe code

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod text_ops;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Re-export the trie surface at the crate root
pub use data_structures::{MeleTrie, MeleTrieConfig, MeleTrieError, MeleTrieResult, PhraseNode};

/// Version information for the Mele text toolkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MeleResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
