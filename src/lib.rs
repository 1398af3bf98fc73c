//! # Mixspell
//!
//! Spelling correction for mixed Chinese-English text.
//!
//! A sentence is split into maximal script runs; Latin runs are corrected
//! token by token against an edit-distance dictionary index, Han runs are
//! delegated to a confusion-set corrector, and the corrected runs are
//! reassembled in their original order.
//!
//! ## Features
//!
//! - Lossless segmentation into Latin and Han runs
//! - SymSpell-style bounded edit-distance dictionary lookup
//! - Case-template restoration for English corrections
//! - Pluggable Chinese correction engine behind a narrow trait
//! - Bincode dictionary snapshots with atomic writes

pub mod cli;
pub mod correct;
pub mod error;
pub mod segment;
pub mod spelling;

pub use correct::SentenceCorrector;
pub use error::{MixspellError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
