//! Simple interactive CLI mode
//!
//! Line-based version of the puzzle board: one command per line, results
//! reprinted after every change.

use crate::core::{LetterState, WORD_LENGTH};
use crate::filter::{Engine, LetterBoard, ToggleOutcome};
use crate::output::{write_inputs, write_results};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  pattern <text>     set the whole pattern, ? for unknown (e.g. pattern ?o??y)
  slot <1-5> [a-z|?] pin a letter in one box, or clear it
  exclude <letters>  mark letters as not in the word
  include <letters>  mark letters as in the word
  neutral <letters>  forget what you marked for letters
  toggle <letters>   cycle letters: neutral -> excluded -> included
  show               print the current matches
  clear              start over
  help               show this help
  quit               exit";

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pattern(String),
    Slot {
        position: usize,
        letter: Option<char>,
    },
    Mark {
        letters: String,
        state: LetterState,
    },
    Toggle(String),
    Show,
    Clear,
    Help,
    Quit,
    Invalid(String),
}

/// Parse one line of input. Blank lines yield `None`.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?.to_lowercase();
    let args: Vec<&str> = parts.collect();
    let joined = args.concat();

    let command = match name.as_str() {
        "pattern" | "p" => Command::Pattern(joined),
        "slot" | "s" => parse_slot(&args),
        "exclude" | "x" => Command::Mark {
            letters: joined,
            state: LetterState::Excluded,
        },
        "include" | "i" => Command::Mark {
            letters: joined,
            state: LetterState::Included,
        },
        "neutral" | "n" => Command::Mark {
            letters: joined,
            state: LetterState::Neutral,
        },
        "toggle" | "t" => Command::Toggle(joined),
        "show" => Command::Show,
        "clear" | "c" => Command::Clear,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Invalid(format!(
            "Unknown command '{other}'. Type 'help' for commands."
        )),
    };
    Some(command)
}

fn parse_slot(args: &[&str]) -> Command {
    let position = match args.first().and_then(|arg| arg.parse::<usize>().ok()) {
        Some(n) if (1..=WORD_LENGTH).contains(&n) => n - 1,
        _ => return Command::Invalid("Slot position must be 1-5".to_string()),
    };

    let letter = match args.get(1) {
        None | Some(&"?") => None,
        Some(arg) => {
            let mut chars = arg.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
                _ => return Command::Invalid("Slot letter must be a-z or ?".to_string()),
            }
        }
    };

    Command::Slot { position, letter }
}

/// Apply a command to the board, returning feedback lines for the user
fn apply(board: &mut LetterBoard, command: &Command) -> Vec<String> {
    let mut notes = Vec::new();
    match command {
        Command::Pattern(raw) => board.set_pattern(raw),
        Command::Slot { position, letter } => match letter {
            Some(c) => {
                board.set_slot(*position, *c);
            }
            None => board.clear_slot(*position),
        },
        Command::Mark { letters, state } => {
            for c in letters.chars() {
                match board.set_state(c, *state) {
                    ToggleOutcome::Pinned => notes.push(pinned_note(c)),
                    ToggleOutcome::Ignored => notes.push(format!("Ignoring '{c}'")),
                    ToggleOutcome::Changed(_) => {}
                }
            }
        }
        Command::Toggle(letters) => {
            for c in letters.chars() {
                match board.toggle(c) {
                    ToggleOutcome::Changed(state) => notes.push(format!(
                        "{} is now {}",
                        c.to_ascii_uppercase(),
                        state.label()
                    )),
                    ToggleOutcome::Pinned => notes.push(pinned_note(c)),
                    ToggleOutcome::Ignored => notes.push(format!("Ignoring '{c}'")),
                }
            }
        }
        Command::Clear => {
            board.clear();
            notes.push("Cleared.".to_string());
        }
        Command::Invalid(message) => notes.push(message.clone()),
        Command::Show | Command::Help | Command::Quit => {}
    }
    notes
}

fn pinned_note(c: char) -> String {
    format!(
        "{} is pinned by the pattern and stays included",
        c.to_ascii_uppercase()
    )
}

/// Run the simple interactive CLI mode
///
/// Reads commands from `input` until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(engine: &Engine<'_>, mut input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Wordle Helper - Interactive Mode".bright_cyan().bold())?;
    writeln!(
        out,
        "Dictionary: {} words. Showing up to {} matches.\n",
        engine.dictionary().len(),
        engine.cap()
    )?;
    writeln!(out, "{HELP}\n")?;

    let mut board = LetterBoard::new();
    let mut line = String::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Invalid(_) => {
                for note in apply(&mut board, &command) {
                    writeln!(out, "{}", note.red())?;
                }
                continue;
            }
            _ => {}
        }

        for note in apply(&mut board, &command) {
            writeln!(out, "{}", note.bright_black())?;
        }

        let result = engine.query_board(&board);
        write_inputs(out, board.pattern(), &board.constraints())?;
        write_results(out, &result, board.is_blank())?;
        writeln!(out)?;
    }

    writeln!(out, "Bye!")?;
    Ok(())
}
