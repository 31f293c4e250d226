//! Constraint engine
//!
//! Resolves pattern and letter toggles into effective constraints and filters
//! the dictionary against them.

mod board;
mod engine;
pub mod matcher;
pub mod resolver;

pub use board::{LetterBoard, ToggleOutcome};
pub use engine::Engine;
pub use matcher::{DEFAULT_CAP, MatchResult, match_words};
pub use resolver::{Constraints, resolve_constraints};
