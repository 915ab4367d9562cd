//! Display functions for CLI output

use super::formatters::{create_progress_bar, spaced_letters, word_badge};
use crate::commands::{CheckResult, SolutionsResult};
use crate::core::{Accepted, RootWord, RuleViolation, letter_count};
use colored::Colorize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Announce a new game and its root word
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_new_game<W: Write>(out: &mut W, root: &RootWord) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60))?;
    writeln!(
        out,
        "Root word: {}  ({} letters)",
        spaced_letters(root.text()).bright_yellow().bold(),
        root.len()
    )?;
    writeln!(out, "{}\n", "─".repeat(60))
}

/// Report the outcome of one submission
///
/// Blank input produces no output.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<Option<Accepted>, RuleViolation>,
    score: usize,
) -> io::Result<()> {
    match outcome {
        Ok(Some(accepted)) => writeln!(
            out,
            "✓ {} {}   Score: {}",
            accepted.word.bright_green().bold(),
            format!("+{}", accepted.length).green(),
            score.to_string().bright_cyan().bold()
        ),
        Ok(None) => Ok(()),
        Err(violation) => write_violation(out, violation),
    }
}

/// Show a rejected word's title and message
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_violation<W: Write>(out: &mut W, violation: &RuleViolation) -> io::Result<()> {
    writeln!(
        out,
        "✗ {} {}",
        violation.title.red().bold(),
        violation.message.bright_black()
    )
}

/// List found words, most recent first, with the score
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_used_words<W: Write>(out: &mut W, words: &[String], score: usize) -> io::Result<()> {
    if words.is_empty() {
        writeln!(out, "No words found yet.")?;
    } else {
        for word in words {
            writeln!(out, "  • {}", word_badge(word))?;
        }
    }
    writeln!(out, "Score: {}", score.to_string().bright_cyan().bold())
}

/// Print the result of checking a list of words to stdout
///
/// # Errors
/// Returns an error if writing to stdout fails.
pub fn print_check_result(result: &CheckResult) -> io::Result<()> {
    write_check_result(&mut io::stdout().lock(), result)
}

/// Write the result of checking a list of words
///
/// Blank inputs are skipped.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_check_result<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} ",
        "ROOT WORD:".bright_cyan().bold(),
        spaced_letters(&result.root).bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out)?;

    for step in &result.steps {
        if step.input.trim().is_empty() {
            continue;
        }
        write!(out, "  {:<14} ", step.input.trim())?;
        write_outcome(out, &step.outcome, step.score_after)?;
    }

    writeln!(
        out,
        "\n{} {} of {} accepted, final score {}",
        "📊".bright_cyan(),
        result.accepted_count(),
        result.steps.len(),
        result.score.to_string().bright_yellow().bold()
    )
}

/// Print every word findable in a root word
pub fn print_solutions_result(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR:".bright_cyan().bold(),
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo words can be found in this root.");
        return;
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Words found:      {}", result.words.len());
    println!(
        "   Maximum score:    {}",
        result.max_score.to_string().bright_yellow().bold()
    );
    println!(
        "   Scanned:          {} words in {:.2}ms",
        result.scanned,
        result.duration.as_secs_f64() * 1000.0
    );

    let mut by_length: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for word in &result.words {
        by_length
            .entry(letter_count(word))
            .or_default()
            .push(word);
    }

    let most = by_length.values().map(Vec::len).max().unwrap_or(0);

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for (length, words) in by_length.iter().rev() {
        let bar = create_progress_bar(words.len() as f64, most as f64, 30);
        println!("   {length:2}: {} {:4}", bar.green(), words.len());
    }

    println!("\n📝 {}", "Words:".bright_cyan().bold());
    for (length, words) in by_length.iter().rev() {
        println!("   {length:2}: {}", words.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CheckStep;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn badge_counts_decomposed_accent_as_one_letter() {
        let words = vec!["ne\u{301}e".to_string()];
        let text = render(|out| write_used_words(out, &words, 3));

        assert!(text.contains("(3) ne\u{301}e"));
    }

    #[test]
    fn accepted_outcome_shows_word_and_score() {
        let outcome = Ok(Some(Accepted::new("silk".to_string())));
        let text = render(|out| write_outcome(out, &outcome, 12));

        assert!(text.contains("silk"));
        assert!(text.contains("+4"));
        assert!(text.contains("12"));
    }

    #[test]
    fn ignored_outcome_is_silent() {
        let text = render(|out| write_outcome(out, &Ok(None), 0));
        assert!(text.is_empty());
    }

    #[test]
    fn violation_shows_title_and_message() {
        let outcome = Err(RuleViolation::duplicate());
        let text = render(|out| write_outcome(out, &outcome, 0));

        assert!(text.contains("Word used already"));
        assert!(text.contains("Be more original."));
    }

    #[test]
    fn used_words_listed_with_badges() {
        let words = vec!["worm".to_string(), "owl".to_string()];
        let text = render(|out| write_used_words(out, &words, 7));

        assert!(text.contains("(4) worm"));
        assert!(text.contains("(3) owl"));
        assert!(text.find("worm") < text.find("owl"));
    }

    #[test]
    fn no_used_words_message() {
        let text = render(|out| write_used_words(out, &[], 0));
        assert!(text.contains("No words found yet."));
    }

    #[test]
    fn check_report_lists_each_outcome() {
        let result = CheckResult {
            root: "silkworm".to_string(),
            steps: vec![
                CheckStep {
                    input: "silk".to_string(),
                    outcome: Ok(Some(Accepted::new("silk".to_string()))),
                    score_after: 4,
                },
                CheckStep {
                    input: "  ".to_string(),
                    outcome: Ok(None),
                    score_after: 4,
                },
                CheckStep {
                    input: "silk".to_string(),
                    outcome: Err(RuleViolation::duplicate()),
                    score_after: 4,
                },
            ],
            score: 4,
            used_words: vec!["silk".to_string()],
        };

        let text = render(|out| write_check_result(out, &result));

        assert!(text.contains("S I L K W O R M"));
        assert!(text.contains("+4"));
        assert!(text.contains("Word used already"));
        assert!(text.contains("1 of 3 accepted"));
    }

    #[test]
    fn check_report_surfaces_write_errors() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = CheckResult {
            root: "silkworm".to_string(),
            steps: Vec::new(),
            score: 0,
            used_words: Vec::new(),
        };

        let err = write_check_result(&mut FailingWriter, &result).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn new_game_shows_root() {
        let root = RootWord::new("silkworm").unwrap();
        let text = render(|out| write_new_game(out, &root));

        assert!(text.contains("S I L K W O R M"));
        assert!(text.contains("8 letters"));
    }
}
