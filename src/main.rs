//! Wordle Duel - CLI
//!
//! Single-player Wordle and a two-player hot-seat duel in the terminal.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_duel::{
    GameError,
    commands::{StartMode, run_menu},
    game::rules::{DEFAULT_WORD_LENGTH, SUPPORTED_WORD_LENGTHS, is_supported_length},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_duel",
    about = "Wordle in the terminal, solo or as a two-player duel",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 5 (default) or 6
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Replace the built-in 5-letter word list with a file
    #[arg(long, global = true)]
    words5: Option<PathBuf>,

    /// Replace the built-in 6-letter word list with a file
    #[arg(long, global = true)]
    words6: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Single player with replay (default)
    Play,

    /// Two players take turns setting and guessing
    Duel,
}

/// Build the dictionary from the embedded lists and any overrides
fn load_dictionary(cli: &Cli) -> Dictionary {
    let mut dictionary = Dictionary::new();
    for (word_length, path) in [(5, &cli.words5), (6, &cli.words6)] {
        match path {
            Some(path) => dictionary.load_from_file(word_length, path),
            None => dictionary.load_words(word_length),
        }
    }
    dictionary
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !is_supported_length(cli.length) {
        return Err(anyhow::Error::new(GameError::UnsupportedWordLength(cli.length))
            .context(format!("choose one of {SUPPORTED_WORD_LENGTHS:?}")));
    }

    let dictionary = load_dictionary(&cli);
    if !dictionary.is_supported(cli.length) {
        bail!("no {}-letter words available", cli.length);
    }
    info!(
        word_length = cli.length,
        words = dictionary.word_count(cli.length),
        "Dictionary ready"
    );

    // Default to Play mode if no command given
    let start = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => StartMode::Single,
        Commands::Duel => StartMode::Duel,
    };

    run_menu(&dictionary, cli.length, start)?;
    Ok(())
}
