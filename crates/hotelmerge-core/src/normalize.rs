//! Free-text canonicalization applied to supplier values before they are
//! compared against or stored in a [`crate::Hotel`].
//!
//! All functions are total: absent input stays absent and an empty string
//! stays empty.

/// Trims leading and trailing whitespace.
#[must_use]
pub fn beautify(value: &str) -> String {
    value.trim().to_owned()
}

/// [`beautify`], propagating absence.
#[must_use]
pub fn beautify_nullable(value: Option<&str>) -> Option<String> {
    value.map(beautify)
}

/// [`beautify`], then lowercase.
#[must_use]
pub fn beautify_lower(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Turns a compact compound token such as `"BusinessCentre"` or `"WiFi"`
/// into a lowercase phrase (`"business centre"`, `"wi fi"`).
///
/// A new word starts where an uppercase run meets a capitalized word
/// (`"BBQGrill"`), where any non-uppercase character is followed by an
/// uppercase letter, or where a letter is followed by a non-letter. Parts
/// that are blank after trimming are dropped and the rest are joined with a
/// single space.
#[must_use]
pub fn beautify_split_lower(value: &str) -> String {
    let chars: Vec<char> = value.trim().chars().collect();
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();

    for (idx, &c) in chars.iter().enumerate() {
        if idx > 0 && is_word_boundary(chars[idx - 1], c, chars.get(idx + 1).copied()) {
            parts.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    parts.push(current);

    parts
        .iter()
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes an optional free-text value and treats a blank result as
/// absent.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<String> {
    beautify_nullable(value).filter(|s| !s.is_empty())
}

fn is_word_boundary(prev: char, current: char, next: Option<char>) -> bool {
    let run_into_word = prev.is_ascii_uppercase()
        && current.is_ascii_uppercase()
        && next.is_some_and(|n| n.is_ascii_lowercase());
    let into_upper = !prev.is_ascii_uppercase() && current.is_ascii_uppercase();
    let letter_into_other = prev.is_ascii_alphabetic() && !current.is_ascii_alphabetic();

    run_into_word || into_upper || letter_into_other
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
