//! Mele Text - Main entrypoint.
//!
//! This is the main entry point for the Mele text toolkit binary. It
//! initializes the logging system, loads configuration, and dispatches the
//! requested indexing command.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use mele_text_lib::config::{self, ConfigLoader, LogConfig, MeleConfig};
use mele_text_lib::data_structures::{MeleTrie, MeleTrieConfig, PhraseNode};
use mele_text_lib::error::{set_error_reporter, MeleError, MeleResult, TracingErrorReporter};
use mele_text_lib::text_ops;
use tracing::info;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "MELE";

/// Command line arguments for the Mele text toolkit.
#[derive(Parser, Debug)]
#[clap(name = "Mele Text", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Index the built-in song-title corpus and print the classic listings
    Demo,

    /// Index a text file, one phrase per line, and print the stored phrases
    Index {
        /// File to index
        #[clap(value_parser)]
        file: PathBuf,

        /// Print only the sub-trie reached by this token path
        #[clap(long, num_args = 1..)]
        under: Vec<String>,

        /// Emit phrases as JSON instead of plain text
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system according to the log configuration.
fn init_logging(log: &LogConfig) -> MeleResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let result = if log.json {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_line_number(log.source_location)
            .with_file(log.source_location)
            .pretty()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    result.map_err(|e| MeleError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Load the configuration or exit with a diagnostic.
///
/// Runs before logging is up, so failures go to standard error.
fn load_config(loader: &ConfigLoader) -> MeleConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }
}

/// The corpus from the classic trie walkthrough: song titles sharing
/// prefixes.
const DEMO_CORPUS: &[&[&str]] = &[
    &["all", "you", "need", "is", "love"],
    &["all", "shook", "up"],
    &["all", "the", "best"],
    &["all", "the", "gold", "in", "california"],
    &["at", "last"],
    &["love", "the", "one", "you're", "with"],
    &["love", "me", "do"],
    &["love", "is", "the", "answer"],
    &["loving", "you"],
    &["long", "tall", "sally"],
];

/// Print every phrase below `node`, each line led by the search prefix.
fn print_sub_trie(node: &PhraseNode, prefix: &str) {
    println!("results for \"{prefix}...\":");
    for phrase in node.phrases() {
        print!("{prefix} ");
        for token in &phrase {
            print!("{token} ");
        }
        println!();
    }
}

/// Build the demo corpus trie and print the classic listings.
fn run_demo() -> MeleResult<()> {
    info!("Indexing demo corpus");

    let mut trie = MeleTrie::new();
    for phrase in DEMO_CORPUS {
        trie.insert(phrase.iter().copied())?;
    }
    info!(phrases = trie.len(), "demo corpus indexed");

    for path in [&["love"][..], &["all", "the"][..]] {
        if let Some(node) = trie.search(path.iter().copied()) {
            print_sub_trie(node, &path.join(" "));
        }
        println!();
    }

    let prefix = "lo";
    for token in trie.find_prefix(prefix) {
        println!("match: {prefix} -> {token}");
        if let Some(node) = trie.search([token.as_str()]) {
            print_sub_trie(node, &token);
        }
    }
    println!();

    Ok(())
}

/// Index a file (one phrase per line) and print the requested sub-trie.
fn run_index(file: &Path, under: &[String], json: bool) -> MeleResult<()> {
    let global = config::get_global_config();
    let cfg = global.get();

    let mut trie = MeleTrie::with_config(MeleTrieConfig::from(&cfg.trie));
    let separator = cfg.splitter.separator_char();

    let contents = std::fs::read_to_string(file)?;
    let mut indexed_lines = 0usize;
    for line in contents.lines() {
        let tokens = if cfg.splitter.collapse_whitespace {
            text_ops::words(line, separator)
        } else {
            text_ops::split_str(line, separator)
                .into_iter()
                .filter(|token| !token.is_empty())
                .collect()
        };
        if tokens.is_empty() {
            continue;
        }
        trie.insert(&tokens)?;
        indexed_lines += 1;
    }
    info!(
        phrases = trie.len(),
        lines = indexed_lines,
        file = %file.display(),
        "indexed file"
    );

    let node = trie.search(under).ok_or_else(|| {
        MeleError::Custom(format!(
            "path \"{}\" not found in index",
            under.join(" ")
        ))
    })?;

    let phrases = node.phrases();
    if json {
        println!("{}", serde_json::to_string_pretty(&phrases)?);
    } else {
        for phrase in &phrases {
            println!("{}", phrase.join(" "));
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> MeleResult<()> {
    // Set up error reporter
    set_error_reporter(std::sync::Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            let config = load_config(&config_loader);
            init_logging(&config.log)?;
            config::init_global_config(config);
            run_demo()
        }
        Command::Index { file, under, json } => {
            let config = load_config(&config_loader);
            init_logging(&config.log)?;
            config::init_global_config(config);
            run_index(&file, &under, json)
        }
        Command::Validate => {
            init_logging(&LogConfig::default())?;
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");
            let default_config = MeleConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(MeleError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MeleError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(MeleError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
