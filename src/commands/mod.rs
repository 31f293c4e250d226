//! Command implementations

pub mod check;
pub mod query;
pub mod simple;

pub use check::{CheckReport, check_wordlist};
pub use query::{QueryReport, QueryRequest, run_query};
pub use simple::run_simple;
