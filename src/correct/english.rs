//! Edit-distance correction for Latin runs.
//!
//! Tokens are delimited by the literal space character, not by general
//! whitespace: a tab or newline inside a Latin run stays part of its token.
//! Empty tokens produced by consecutive spaces pass through unchanged, so
//! rejoining on a single space reproduces the original spacing.

use crate::correct::casing::restore_case;
use crate::spelling::index::DictionaryIndex;

/// Edit budget for a single token lookup.
const MAX_TOKEN_DISTANCE: usize = 2;

/// Correct a Latin run token by token against the dictionary index.
pub fn correct_latin_run(run: &str, index: &DictionaryIndex) -> String {
    let corrected: Vec<String> = run
        .split(' ')
        .map(|token| correct_token(token, index))
        .collect();

    corrected.join(" ")
}

/// Correct one token, or pass it through.
///
/// Tokens without an alphabetic character (numbers, empty tokens) and tokens
/// with no in-budget suggestion are returned unchanged.
fn correct_token(token: &str, index: &DictionaryIndex) -> String {
    if !token.chars().any(|c| c.is_ascii_alphabetic()) {
        return token.to_string();
    }

    let suggestions = index.lookup(&token.to_lowercase(), MAX_TOKEN_DISTANCE);
    match suggestions.first() {
        Some(best) => restore_case(token, &best.term),
        None => token.to_string(),
    }
}
