//! Word Scramble - CLI
//!
//! Find words hidden in a random root word, check words against a root, or list every solution.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{CheckConfig, check_words, find_solutions, run_play},
    core::RootWord,
    dictionary::{DEFAULT_LANGUAGE, WordListDictionary},
    output::{print_check_result, print_solutions_result},
    session::GameSession,
    validator::{DEFAULT_MIN_LENGTH, ValidatorConfig, WordValidator},
    wordlists::{
        DICTIONARY_WORDS, ROOT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Find as many words as you can in the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Minimum letters a word needs
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Reject the root word itself as a find
    #[arg(long, global = true)]
    forbid_root_word: bool,

    /// Language to validate in; the embedded dictionary only answers for "en"
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Check words against a specific root word
    Check {
        /// The root word to play on
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every word that can be found in a root word
    Solutions {
        /// The root word to solve
        root: String,
    },
}

impl Cli {
    fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig::default()
            .with_min_length(self.min_length)
            .with_allow_root_word(!self.forbid_root_word)
            .with_language(self.language.clone())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load a word list based on a -w/-d flag
///
/// - "embedded": Use the list compiled into the binary
/// - "<path>": Load a newline-delimited file
fn load_words(source: &str, embedded: &[&str]) -> Result<Vec<String>> {
    let words = match source {
        "embedded" => words_from_slice(embedded),
        path => load_from_file(path).with_context(|| format!("Failed to load word list {path}"))?,
    };

    info!(source, count = words.len(), "loaded word list");
    Ok(words)
}

/// Build the dictionary for a -d flag
///
/// The embedded list is English and keeps the default language tag. A file
/// is taken to be written in `language`.
fn build_dictionary(source: &str, language: &str) -> Result<WordListDictionary> {
    let words = load_words(source, DICTIONARY_WORDS)?;
    let tag = if source == "embedded" {
        DEFAULT_LANGUAGE
    } else {
        language
    };

    let dictionary = WordListDictionary::new(tag, &words);
    if dictionary.is_empty() {
        warn!("dictionary is empty; every word will be rejected");
    } else if !dictionary.language().eq_ignore_ascii_case(language) {
        warn!(
            dictionary = dictionary.language(),
            language, "dictionary language differs; every word will be rejected"
        );
    }
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = build_dictionary(&cli.dictionary, &cli.language)?;

    let config = cli.validator_config();
    let validator = WordValidator::with_config(&dictionary, config);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&cli.wordlist, validator),
        Commands::Check { root, words } => run_check_command(root, words, validator),
        Commands::Solutions { root } => run_solutions_command(&root, &validator, &dictionary),
    }
}

fn run_play_command(wordlist: &str, validator: WordValidator<&WordListDictionary>) -> Result<()> {
    let root_words = load_words(wordlist, ROOT_WORDS)?;
    if root_words.is_empty() {
        warn!(
            fallback = RootWord::DEFAULT,
            "root word list is empty; using fallback"
        );
    }

    let mut session = GameSession::new(validator);
    run_play(&mut session, &root_words).context("Interactive session failed")
}

fn run_check_command(
    root: String,
    words: Vec<String>,
    validator: WordValidator<&WordListDictionary>,
) -> Result<()> {
    let result = check_words(CheckConfig::new(root, words), validator)?;
    print_check_result(&result).context("Failed to write check report")
}

fn run_solutions_command(
    root: &str,
    validator: &WordValidator<&WordListDictionary>,
    dictionary: &WordListDictionary,
) -> Result<()> {
    let root = RootWord::new(root)?;
    let candidates: Vec<&str> = dictionary.words().collect();

    let result = find_solutions(validator, &root, &candidates);
    print_solutions_result(&result);
    Ok(())
}
