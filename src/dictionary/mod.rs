//! Dictionary store
//!
//! Provides the embedded word list compiled into the binary and the immutable
//! [`Dictionary`] built from it (or from a user-supplied file).

mod embedded;
pub mod loader;
mod store;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use store::{Dictionary, DictionaryError};
