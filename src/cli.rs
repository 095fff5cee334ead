//! Command-line interface for word_scramble.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Word Scramble - find words hidden in a random root word
#[derive(Parser, Debug)]
#[command(name = "word_scramble")]
#[command(about = "Build words from the letters of a random root word", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Newline-delimited list of root words (overrides config)
    #[arg(long, global = true)]
    pub word_list: Option<PathBuf>,

    /// Word-per-line dictionary file (overrides config)
    #[arg(long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Language tag passed to the dictionary (overrides config)
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Seed for root word selection (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Play line by line over stdin/stdout
    Play,

    /// Check words against a given root word, in order
    Check {
        /// Root word for the session
        #[arg(short, long)]
        root: String,

        /// Print one JSON object per word
        #[arg(long)]
        json: bool,

        /// Words to submit
        #[arg(required = true)]
        words: Vec<String>,
    },
}
