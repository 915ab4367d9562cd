//! Interactive play mode
//!
//! Line-based game loop: the player types words found in the root word.

use crate::dictionary::Dictionary;
use crate::output::{write_new_game, write_outcome, write_used_words};
use crate::session::GameSession;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<D: Dictionary, S: AsRef<str>>(
    session: &mut GameSession<D>,
    root_words: &[S],
) -> io::Result<()> {
    let stdin = io::stdin();
    run_play_with(session, root_words, stdin.lock(), io::stdout())
}

/// Run the interactive game over arbitrary input and output streams
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play_with<D, S, R, W>(
    session: &mut GameSession<D>,
    root_words: &[S],
    mut input: R,
    mut out: W,
) -> io::Result<()>
where
    D: Dictionary,
    S: AsRef<str>,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Word Scramble                             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "Make as many words as you can from the letters of the root word.")?;
    writeln!(out, "Each letter can be used once. Longer words score more.\n")?;
    write_help(&mut out)?;

    session.start(root_words);
    write_new_game(&mut out, session.root_word())?;

    let mut line = String::new();
    loop {
        write!(out, "{}: ", "Word".bright_white().bold())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed");
            writeln!(out)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" | ":restart" => {
                session.start(root_words);
                writeln!(out, "\n🔄 New game started!")?;
                write_new_game(&mut out, session.root_word())?;
            }
            ":words" | ":w" => {
                write_used_words(&mut out, session.used_words(), session.score())?;
            }
            ":help" | ":h" | ":?" => write_help(&mut out)?,
            candidate => {
                let outcome = session.submit(candidate);
                write_outcome(&mut out, &outcome, session.score())?;
            }
        }
    }

    writeln!(
        out,
        "\nFinal score: {} with {} {}",
        session.score().to_string().bright_yellow().bold(),
        session.used_words().len(),
        if session.used_words().len() == 1 {
            "word"
        } else {
            "words"
        }
    )?;
    writeln!(out, "👋 Thanks for playing!\n")
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Commands: ':words' to list your finds, ':new' for a new root word, ':quit' to exit\n"
    )
}
