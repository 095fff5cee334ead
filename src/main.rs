//! Word Scramble - Unified CLI
//!
//! Terminal UI, console loop and batch checker over one game core.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use word_scramble::{Game, ScrambleConfig, WordSetDictionary, check_words, run_console};

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "word_scramble.toml";

/// Log file for the terminal UI, which owns the screen.
const TUI_LOG_FILE: &str = "word_scramble.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.command)?;

    let config = load_config(&cli)?;
    debug!(?config, "Effective configuration");

    match cli.command {
        Command::Tui => tui::run_tui(build_game(&config)?),
        Command::Play => {
            let mut game = build_game(&config)?;
            let stdin = std::io::stdin();
            run_console(&mut game, stdin.lock(), std::io::stdout().lock())
                .context("Console game failed")
        }
        Command::Check { root, json, words } => run_check(&config, &root, json, &words),
    }
}

/// Sends logs to a file for the TUI and to stderr otherwise.
fn init_tracing(command: &Command) -> Result<()> {
    match command {
        Command::Tui => {
            let log_file = std::fs::File::create(TUI_LOG_FILE)
                .with_context(|| format!("Failed to create {}", TUI_LOG_FILE))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        Command::Play | Command::Check { .. } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Layers config file, environment and command-line flags, in that order.
#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<ScrambleConfig> {
    let config = match &cli.config {
        Some(path) => ScrambleConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            ScrambleConfig::from_file(DEFAULT_CONFIG_FILE)?
        }
        None => ScrambleConfig::default(),
    };

    let mut config = config.with_overrides(|key| std::env::var(key).ok())?;

    if let Some(path) = &cli.word_list {
        config.set_word_list(path.clone());
    }
    if let Some(path) = &cli.dictionary {
        config.set_dictionary(path.clone());
    }
    if let Some(language) = &cli.language {
        config.set_language(language.clone());
    }
    if let Some(seed) = cli.seed {
        config.set_seed(seed);
    }
    Ok(config)
}

/// Loads the word list and dictionary and starts the first session.
#[instrument(skip_all)]
fn build_game(config: &ScrambleConfig) -> Result<Game<WordSetDictionary, StdRng>> {
    let word_list = config
        .load_word_list()
        .context("Could not load word list")?;
    let dictionary = config
        .load_dictionary()
        .context("Could not load dictionary")?;
    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let game = Game::new(word_list, dictionary, rng, config.language());
    info!(root = %game.session().root_word(), "Game ready");
    Ok(game)
}

/// Prints one verdict per word.
#[instrument(skip(config, words))]
fn run_check(config: &ScrambleConfig, root: &str, json: bool, words: &[String]) -> Result<()> {
    let dictionary = config
        .load_dictionary()
        .context("Could not load dictionary")?;
    let (session, reports) = check_words(root, config.language(), words, &dictionary);

    for report in &reports {
        if json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            println!("{}", report);
        }
    }

    if !json {
        println!(
            "Total words = {}   Total letters = {}",
            session.word_count(),
            session.total_letters()
        );
    }
    Ok(())
}
