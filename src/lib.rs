//! Wordle Helper
//!
//! Filters a five-letter dictionary by a positional pattern plus letters known
//! to be absent or present, for solving Wordle-style puzzles by hand.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::dictionary::Dictionary;
//! use wordle_helper::filter::{Engine, LetterBoard};
//!
//! let dictionary = Dictionary::load().unwrap();
//! let engine = Engine::with_default_cap(&dictionary);
//!
//! // Second letter O, last letter Y, no H anywhere
//! let mut board = LetterBoard::new();
//! board.set_pattern("?o??y");
//! board.toggle('h');
//!
//! let result = engine.query_board(&board);
//! assert!(result.texts().any(|word| word == "money"));
//! assert!(result.texts().all(|word| !word.contains('h')));
//! ```

// Core domain types
pub mod core;

// Embedded and file-backed word lists
pub mod dictionary;

// Constraint resolution and matching
pub mod filter;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
