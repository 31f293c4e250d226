//! Wordle Helper - CLI
//!
//! Pattern and letter-constraint word finder with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use wordle_helper::{
    commands::{QueryRequest, check_wordlist, run_query, run_simple},
    dictionary::{Dictionary, loader::load_from_file},
    filter::{DEFAULT_CAP, Engine},
    output::{print_check_report, print_query_report},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Find words matching a Wordle pattern and known letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Maximum number of words shown per query
    #[arg(short, long, global = true, default_value_t = DEFAULT_CAP)]
    cap: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Run a single query and print the matches
    Query {
        /// Pattern with ? for unknown letters, e.g. ?o??y
        #[arg(default_value = "")]
        pattern: String,

        /// Letters not in the word
        #[arg(short = 'x', long, default_value = "")]
        excluded: String,

        /// Letters somewhere in the word
        #[arg(short = 'i', long, default_value = "")]
        included: String,
    },

    /// Validate a word list file
    Check {
        /// Path to the word list
        path: String,
    },
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Dictionary::load().context("embedded word list is invalid"),
        path => load_from_file(path).with_context(|| format!("failed to load word list {path}")),
    }
}

fn effective_cap(cap: usize) -> usize {
    if cap == 0 {
        log::warn!("Result cap of 0 would hide every match, using 1");
        1
    } else {
        cap
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let cap = effective_cap(cli.cap);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_play_command(Engine::new(&dictionary, cap))
        }
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let engine = Engine::new(&dictionary, cap);
            run_simple(&engine, io::stdin().lock(), &mut io::stdout())
        }
        Commands::Query {
            pattern,
            excluded,
            included,
        } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let engine = Engine::new(&dictionary, cap);
            let request = QueryRequest {
                pattern,
                excluded,
                included,
            };
            print_query_report(&run_query(&engine, &request))?;
            Ok(())
        }
        Commands::Check { path } => {
            print_check_report(&check_wordlist(path)?);
            Ok(())
        }
    }
}

fn run_play_command(engine: Engine<'_>) -> Result<()> {
    use wordle_helper::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cap_is_clamped() {
        assert_eq!(effective_cap(0), 1);
        assert_eq!(effective_cap(25), 25);
    }

    #[test]
    fn query_flags_parse() {
        let cli = Cli::parse_from(["wordle_helper", "query", "?o??y", "-x", "h", "-c", "5"]);
        assert_eq!(cli.cap, 5);
        assert!(matches!(
            cli.command,
            Some(Commands::Query { ref pattern, ref excluded, .. })
                if pattern == "?o??y" && excluded == "h"
        ));
    }

    #[test]
    fn check_ignores_wordlist_flag() {
        let path = std::env::temp_dir().join(format!("wordle_helper_main_{}.txt", std::process::id()));
        std::fs::write(&path, "robot\nmoney\n").unwrap();

        let cli = Cli::parse_from([
            "wordle_helper",
            "-w",
            "/nonexistent/words.txt",
            "check",
            path.to_str().unwrap(),
        ]);
        let result = run(cli);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn check_reports_missing_file() {
        let cli = Cli::parse_from(["wordle_helper", "check", "/nonexistent/words.txt"]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn query_with_bad_wordlist_fails() {
        let cli = Cli::parse_from(["wordle_helper", "-w", "/nonexistent/words.txt", "query", "?o"]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn defaults_to_embedded_wordlist() {
        let cli = Cli::parse_from(["wordle_helper", "-vv"]);
        assert_eq!(cli.wordlist, "embedded");
        assert_eq!(cli.cap, DEFAULT_CAP);
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }
}
