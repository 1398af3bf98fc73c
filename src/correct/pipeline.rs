//! Sentence-level orchestration: segment, dispatch, reassemble.

use crate::correct::chinese::ChineseCorrector;
use crate::correct::english::correct_latin_run;
use crate::error::Result;
use crate::segment::{LanguageSegmenter, Script, Segment};
use crate::spelling::index::DictionaryIndex;

/// Corrects whole sentences of mixed Chinese-English text.
///
/// Holds only read-only collaborators, so one instance can serve any number
/// of sentences and may be shared across threads for independent inputs.
pub struct SentenceCorrector<'a> {
    segmenter: LanguageSegmenter,
    index: &'a DictionaryIndex,
    chinese: &'a dyn ChineseCorrector,
}

impl<'a> SentenceCorrector<'a> {
    /// Create a corrector over a dictionary index and a Chinese engine.
    pub fn new(index: &'a DictionaryIndex, chinese: &'a dyn ChineseCorrector) -> Result<Self> {
        Ok(SentenceCorrector {
            segmenter: LanguageSegmenter::new()?,
            index,
            chinese,
        })
    }

    /// Partition a sentence into script runs without correcting them.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        self.segmenter.segment(text)
    }

    /// Correct a sentence and reassemble it in original run order.
    ///
    /// Runs are concatenated with no added separators; the run boundaries
    /// already carry all original whitespace and punctuation placement.
    /// A failing Chinese collaborator aborts the whole sentence rather than
    /// producing partial output.
    pub fn correct(&self, text: &str) -> Result<String> {
        let mut corrected = String::with_capacity(text.len());

        for segment in self.segmenter.segment(text) {
            corrected.push_str(&self.correct_segment(&segment)?);
        }

        Ok(corrected)
    }

    /// Correct one run, or pass it through.
    fn correct_segment(&self, segment: &Segment) -> Result<String> {
        // Whitespace-only and empty runs are never sent to a corrector.
        if segment.text.trim().is_empty() {
            return Ok(segment.text.clone());
        }

        match segment.script {
            Script::Latin => Ok(correct_latin_run(&segment.text, self.index)),
            Script::Han => self.chinese.correct(&segment.text),
        }
    }
}
