//! Edit-distance dictionary index with symmetric-delete candidate lookup.
//!
//! Each term's prefix is expanded into all delete variants up to the
//! configured edit distance when the index is built, and an input word only
//! has to generate its own delete variants to reach every candidate. Lookup
//! cost therefore depends on the input length, not the vocabulary size.
//! Candidates are verified with the true Damerau-Levenshtein distance before
//! they are ranked.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::FrequencyDictionary;
use crate::spelling::levenshtein::distance_within;

/// Default maximum edit distance for index construction and lookup.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Default prefix length bounding delete-variant generation.
pub const DEFAULT_PREFIX_LENGTH: usize = 7;

/// A correction candidate returned by [`DictionaryIndex::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested term.
    pub term: String,
    /// Edit distance from the looked-up word.
    pub distance: usize,
    /// Frequency of the term in the dictionary.
    pub frequency: u32,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(term: S, distance: usize, frequency: u32) -> Self {
        Suggestion {
            term: term.into(),
            distance,
            frequency,
        }
    }
}

/// An immutable-after-build dictionary supporting bounded edit-distance
/// lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryIndex {
    /// The underlying term-frequency dictionary.
    dictionary: FrequencyDictionary,
    /// Maps a delete variant of a term prefix to the terms it came from.
    deletes: HashMap<String, Vec<String>>,
    /// Maximum edit distance the index was built for.
    max_distance: usize,
    /// Prefix length bounding delete-variant generation.
    prefix_length: usize,
}

impl DictionaryIndex {
    /// Build an index from raw corpus text.
    pub fn build(corpus: &str, max_distance: usize, prefix_length: usize) -> Self {
        Self::from_dictionary(FrequencyDictionary::from_corpus(corpus), max_distance, prefix_length)
    }

    /// Build an index over an existing dictionary.
    pub fn from_dictionary(
        dictionary: FrequencyDictionary,
        max_distance: usize,
        prefix_length: usize,
    ) -> Self {
        let mut index = DictionaryIndex {
            dictionary,
            deletes: HashMap::new(),
            max_distance,
            prefix_length,
        };

        let terms: Vec<String> = index.dictionary.iter().map(|(term, _)| term.clone()).collect();
        for term in terms {
            index.add_deletes(&term);
        }

        index
    }

    /// Register all delete variants of `term`'s prefix.
    fn add_deletes(&mut self, term: &str) {
        let prefix = self.prefix(term);
        for variant in delete_variants(&prefix, self.max_distance) {
            let terms = self.deletes.entry(variant).or_default();
            if !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
            }
        }
    }

    /// Truncate a word to the indexed prefix length.
    fn prefix(&self, word: &str) -> String {
        word.chars().take(self.prefix_length).collect()
    }

    /// Look up correction candidates for a lowercase word.
    ///
    /// Returns suggestions within `max_distance` edits (capped at the
    /// distance the index was built for), ordered by ascending distance,
    /// then descending frequency, then lexical term order as a stable
    /// tie-break. An exact dictionary hit is returned as the sole suggestion
    /// with distance 0; an empty vector means nothing was within budget.
    pub fn lookup(&self, word: &str, max_distance: usize) -> Vec<Suggestion> {
        if self.dictionary.contains(word) {
            return vec![Suggestion::new(word, 0, self.dictionary.frequency(word))];
        }

        let max_distance = max_distance.min(self.max_distance);
        let prefix = self.prefix(word);
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        for variant in delete_variants(&prefix, max_distance) {
            let Some(candidates) = self.deletes.get(&variant) else {
                continue;
            };
            for candidate in candidates {
                if !seen.insert(candidate.clone()) {
                    continue;
                }
                if let Some(distance) = distance_within(word, candidate, max_distance) {
                    let frequency = self.dictionary.frequency(candidate);
                    suggestions.push(Suggestion::new(candidate.clone(), distance, frequency));
                }
            }
        }

        suggestions.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| a.term.cmp(&b.term))
        });
        suggestions
    }

    /// Get the underlying frequency dictionary.
    pub fn dictionary(&self) -> &FrequencyDictionary {
        &self.dictionary
    }

    /// Maximum edit distance the index supports.
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Prefix length the index was built with.
    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Number of distinct terms in the index.
    pub fn word_count(&self) -> usize {
        self.dictionary.word_count()
    }
}

/// Generate all delete variants of `word` up to `max_deletes` removals,
/// including `word` itself.
fn delete_variants(word: &str, max_deletes: usize) -> HashSet<String> {
    let mut variants = HashSet::new();
    variants.insert(word.to_string());

    let mut frontier: Vec<String> = vec![word.to_string()];
    for _ in 0..max_deletes {
        let mut next = Vec::new();
        for variant in &frontier {
            let chars: Vec<char> = variant.chars().collect();
            for i in 0..chars.len() {
                let mut deleted: String = String::with_capacity(variant.len());
                deleted.extend(chars[..i].iter());
                deleted.extend(chars[i + 1..].iter());
                if variants.insert(deleted.clone()) {
                    next.push(deleted);
                }
            }
        }
        frontier = next;
    }

    variants
}
