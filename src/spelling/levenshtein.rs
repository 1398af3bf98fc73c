//! Damerau-Levenshtein distance for candidate verification.

use std::cmp::min;

/// Calculate the Damerau-Levenshtein distance between two strings: the
/// minimum number of single-character insertions, deletions, substitutions,
/// or adjacent transpositions required to change one into the other.
pub fn damerau_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rolling rows instead of a full matrix; the row two back is kept
    // around only for the transposition case.
    let mut two_back: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = min(min(prev[j] + 1, curr[j - 1] + 1), prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = min(best, two_back[j - 2] + cost);
            }
            curr[j] = best;
        }
        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Calculate the distance only if it does not exceed `max_distance`.
///
/// A cheap length check rejects pairs that cannot be within budget before
/// the matrix is computed.
pub fn distance_within(s1: &str, s2: &str, max_distance: usize) -> Option<usize> {
    if s1.chars().count().abs_diff(s2.chars().count()) > max_distance {
        return None;
    }

    let distance = damerau_levenshtein(s1, s2);
    (distance <= max_distance).then_some(distance)
}
