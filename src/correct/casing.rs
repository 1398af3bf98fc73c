//! Case template restoration for corrected English tokens.

/// Reapply the casing pattern of `original` to `replacement`.
///
/// Checked in order, first match wins: an all-lowercase original lowercases
/// the replacement, an all-uppercase original uppercases it, a title-case
/// original title-cases it, and anything else (mixed casing, or no
/// alphabetic characters at all) returns the replacement unchanged. ASCII
/// case rules only.
pub fn restore_case(original: &str, replacement: &str) -> String {
    let letters: Vec<char> = original
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();

    if letters.is_empty() {
        return replacement.to_string();
    }

    if letters.iter().all(|c| c.is_ascii_lowercase()) {
        return replacement.to_ascii_lowercase();
    }

    if letters.iter().all(|c| c.is_ascii_uppercase()) {
        return replacement.to_ascii_uppercase();
    }

    if letters[0].is_ascii_uppercase() && letters[1..].iter().all(|c| c.is_ascii_lowercase()) {
        return title_case(replacement);
    }

    replacement.to_string()
}

/// Uppercase the first ASCII letter and lowercase the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut titled = first.to_ascii_uppercase().to_string();
            titled.extend(chars.map(|c| c.to_ascii_lowercase()));
            titled
        }
        None => String::new(),
    }
}
