//! Language run segmentation for mixed-script text.
//!
//! The segmenter partitions a sentence into maximal runs of Latin text
//! (ASCII letters, digits, and whitespace) and Han text (everything else,
//! which covers CJK characters and punctuation). The partition is lossless:
//! concatenating the runs in order reproduces the input exactly.

use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MixspellError, Result};

/// Character class matched by a Latin run.
const LATIN_RUN_PATTERN: &str = r"[A-Za-z0-9\s]+";

/// Script classification for a contiguous run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// ASCII letters, digits, and whitespace.
    Latin,
    /// CJK text and any punctuation outside the Latin character class.
    Han,
}

/// A contiguous run of text sharing one script classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The run text, byte-for-byte as it appeared in the input.
    pub text: String,
    /// The script class this run was routed by.
    pub script: Script,
}

impl Segment {
    /// Create a Latin run.
    pub fn latin<S: Into<String>>(text: S) -> Self {
        Segment {
            text: text.into(),
            script: Script::Latin,
        }
    }

    /// Create a Han run.
    pub fn han<S: Into<String>>(text: S) -> Self {
        Segment {
            text: text.into(),
            script: Script::Han,
        }
    }
}

/// Splits text into maximal Latin and Han runs.
///
/// Whitespace adjacent to Han text is absorbed into the neighboring Latin
/// run rather than split off. This mirrors the run boundary the English
/// corrector expects and must not be changed to a three-way split.
#[derive(Clone, Debug)]
pub struct LanguageSegmenter {
    /// The regex matching one maximal Latin run.
    pattern: Arc<Regex>,
}

impl LanguageSegmenter {
    /// Create a new segmenter.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(LATIN_RUN_PATTERN)
            .map_err(|e| MixspellError::other(format!("Invalid segmenter pattern: {e}")))?;

        Ok(LanguageSegmenter {
            pattern: Arc::new(regex),
        })
    }

    /// Partition `text` into ordered script runs.
    ///
    /// Latin runs are the regex matches; Han runs are the gaps before,
    /// between, and after them. Empty input yields an empty vector.
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                segments.push(Segment::han(&text[last_end..mat.start()]));
            }
            segments.push(Segment::latin(mat.as_str()));
            last_end = mat.end();
        }

        if last_end < text.len() {
            segments.push(Segment::han(&text[last_end..]));
        }

        segments
    }
}

impl Default for LanguageSegmenter {
    fn default() -> Self {
        Self::new().expect("Latin run pattern should be valid")
    }
}
