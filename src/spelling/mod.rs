//! Spelling correction primitives for the English side of the pipeline.
//!
//! This module provides the frequency dictionary, the bounded edit-distance
//! index used for candidate lookup, and the bincode snapshot persistence
//! that lets the index be built once and reloaded at startup.

pub mod dictionary;
pub mod index;
pub mod levenshtein;
pub mod snapshot;

pub use dictionary::FrequencyDictionary;
pub use index::{DictionaryIndex, Suggestion};
