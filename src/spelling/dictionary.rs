//! Frequency dictionary built from an English corpus.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A dictionary that stores lowercase terms and their corpus frequencies.
///
/// Terms are unique; the frequency is only used as a tie-break weight when
/// ranking correction candidates and is never required to be positive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrequencyDictionary {
    /// Terms and their frequencies
    words: HashMap<String, u32>,
    /// Total frequency count across all terms
    total_count: u64,
}

impl FrequencyDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        FrequencyDictionary {
            words: HashMap::new(),
            total_count: 0,
        }
    }

    /// Build a dictionary from a corpus of text.
    ///
    /// Terms are the maximal runs of ASCII letters in the corpus, lowercased;
    /// each term's frequency is its occurrence count.
    pub fn from_corpus(text: &str) -> Self {
        let mut dictionary = FrequencyDictionary::new();

        let words = text
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|word| !word.is_empty())
            .map(|word| word.to_ascii_lowercase());

        for word in words {
            dictionary.increment_word(&word);
        }

        dictionary
    }

    /// Add a term to the dictionary with the given frequency.
    pub fn add_word(&mut self, word: String, frequency: u32) {
        let normalized = word.to_lowercase();
        let old_freq = self.words.get(&normalized).copied().unwrap_or(0);
        self.words.insert(normalized, frequency);
        self.total_count = self.total_count - old_freq as u64 + frequency as u64;
    }

    /// Increment the frequency of a term by 1.
    pub fn increment_word(&mut self, word: &str) {
        let current = self.frequency(word);
        self.add_word(word.to_string(), current + 1);
    }

    /// Check if a term exists in the dictionary. Lookup is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency of a term. Lookup is case-insensitive.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Iterate over all terms and their frequencies.
    pub fn iter(&self) -> impl Iterator<Item = (&String, u32)> {
        self.words.iter().map(|(word, freq)| (word, *freq))
    }

    /// Get the total number of unique terms.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total frequency count.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// Get the most frequent terms in the dictionary.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u32)> {
        let mut word_freq: Vec<(String, u32)> = self
            .words
            .iter()
            .map(|(word, freq)| (word.clone(), *freq))
            .collect();

        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_freq.truncate(limit);
        word_freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = FrequencyDictionary::new();

        assert!(!dict.contains("hello"));
        assert_eq!(dict.frequency("hello"), 0);
        assert_eq!(dict.word_count(), 0);

        dict.add_word("hello".to_string(), 5);
        assert!(dict.contains("hello"));
        assert_eq!(dict.frequency("hello"), 5);
        assert_eq!(dict.word_count(), 1);
        assert_eq!(dict.total_frequency(), 5);

        dict.increment_word("hello");
        assert_eq!(dict.frequency("hello"), 6);
        assert_eq!(dict.total_frequency(), 6);

        dict.add_word("world".to_string(), 3);
        assert_eq!(dict.word_count(), 2);
        assert_eq!(dict.total_frequency(), 9);
    }

    #[test]
    fn test_from_corpus() {
        let corpus = "The quick brown fox jumps over the lazy dog. The dog was lazy.";
        let dict = FrequencyDictionary::from_corpus(corpus);

        assert!(dict.contains("the"));
        assert!(dict.contains("quick"));
        assert!(dict.contains("dog"));
        assert_eq!(dict.frequency("the"), 3);
        assert_eq!(dict.frequency("dog"), 2);
        assert_eq!(dict.frequency("lazy"), 2);
        assert_eq!(dict.frequency("quick"), 1);
    }

    #[test]
    fn test_from_corpus_ascii_letter_runs() {
        // Digits, apostrophes, and CJK characters are run boundaries;
        // single-letter terms are kept.
        let dict = FrequencyDictionary::from_corpus("it's 2nd 天氣ok a");

        assert!(dict.contains("it"));
        assert!(dict.contains("s"));
        assert!(dict.contains("nd"));
        assert!(dict.contains("ok"));
        assert!(dict.contains("a"));
        assert_eq!(dict.word_count(), 5);
    }

    #[test]
    fn test_from_corpus_case_folded() {
        let dict = FrequencyDictionary::from_corpus("Apple APPLE apple");
        assert_eq!(dict.frequency("apple"), 3);
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn test_lookup_case_folded() {
        let mut dict = FrequencyDictionary::new();
        dict.add_word("Apple".to_string(), 2);

        assert!(dict.contains("apple"));
        assert!(dict.contains("Apple"));
        assert!(dict.contains("APPLE"));
        assert_eq!(dict.frequency("APPLE"), 2);
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn test_most_frequent() {
        let mut dict = FrequencyDictionary::new();
        dict.add_word("common".to_string(), 100);
        dict.add_word("rare".to_string(), 1);
        dict.add_word("medium".to_string(), 50);

        let top = dict.most_frequent(2);
        assert_eq!(top, vec![("common".to_string(), 100), ("medium".to_string(), 50)]);
    }
}
