//! Per-run correction and the sentence pipeline.

pub mod casing;
pub mod chinese;
pub mod english;
pub mod pipeline;

pub use chinese::{ChineseCorrector, ConfusionCorrector};
pub use pipeline::SentenceCorrector;
