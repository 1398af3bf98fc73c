//! Chinese run correction behind a narrow collaborator boundary.
//!
//! The pipeline only needs one operation from the Chinese side: given run
//! text, return corrected text. Any engine (confusion-set, statistical,
//! model-based) can sit behind [`ChineseCorrector`], and tests substitute a
//! stub with canned output.

use std::fs;
use std::path::Path;

use crate::error::{MixspellError, Result};

/// Capability interface for the Chinese correction engine.
pub trait ChineseCorrector {
    /// Return the corrected form of `text`.
    ///
    /// Fails with [`MixspellError::ExternalCorrector`] when the engine
    /// cannot process the request.
    fn correct(&self, text: &str) -> Result<String>;
}

/// A confusion-set corrector.
///
/// Holds a curated mapping of known wrong phrases to their corrections and
/// applies them as substring replacements, longest wrong phrase first so a
/// long entry is never clobbered by a shorter one nested inside it.
#[derive(Debug, Clone, Default)]
pub struct ConfusionCorrector {
    /// (wrong, right) pairs, sorted by descending wrong-phrase length.
    pairs: Vec<(String, String)>,
}

impl ConfusionCorrector {
    /// Create an empty corrector.
    pub fn new() -> Self {
        ConfusionCorrector { pairs: Vec::new() }
    }

    /// Load a confusion set from a file.
    ///
    /// Each line holds a whitespace-separated `wrong right` pair; blank
    /// lines and `#` comments are skipped. A missing file is a fatal
    /// startup error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MixspellError::confusion_missing(
                path.display().to_string(),
            ));
        }

        let text = fs::read_to_string(path)?;
        let pairs = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                match (fields.next(), fields.next()) {
                    (Some(wrong), Some(right)) => Some((wrong.to_string(), right.to_string())),
                    _ => None,
                }
            });

        Ok(Self::from_pairs(pairs))
    }

    /// Build a corrector from (wrong, right) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(wrong, right)| (wrong.into(), right.into()))
            .collect();

        pairs.sort_by(|a, b| {
            let len_a = a.0.chars().count();
            let len_b = b.0.chars().count();
            len_b.cmp(&len_a).then_with(|| a.0.cmp(&b.0))
        });

        ConfusionCorrector { pairs }
    }

    /// Number of confusion pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the confusion set is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl ChineseCorrector for ConfusionCorrector {
    fn correct(&self, text: &str) -> Result<String> {
        // Single left-to-right pass over the original text. At each position
        // the longest matching wrong phrase wins (pairs are sorted by
        // descending length), and the scan advances past the emitted
        // replacement so corrected output is never matched again.
        let mut corrected = String::with_capacity(text.len());
        let mut rest = text;

        'scan: while !rest.is_empty() {
            for (wrong, right) in &self.pairs {
                if rest.starts_with(wrong.as_str()) {
                    corrected.push_str(right);
                    rest = &rest[wrong.len()..];
                    continue 'scan;
                }
            }
            match rest.chars().next() {
                Some(c) => {
                    corrected.push(c);
                    rest = &rest[c.len_utf8()..];
                }
                None => break,
            }
        }

        Ok(corrected)
    }
}
