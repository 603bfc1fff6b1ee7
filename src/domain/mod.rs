//! Domain models for OCR-tolerant matching.
//!
//! This module holds the confusion table describing which characters OCR
//! tends to mix up, and the search-term type read from input lists.

pub mod confusion;
pub mod term;

pub use confusion::ConfusionTable;
pub use term::SearchTerm;

/// Regex anchor placed around a pattern to stop partial-word matches.
pub const WORD_BOUNDARY: &str = r"\b";

/// Substitutes every table character in `term` with its alternation.
///
/// Characters without a table entry, regex metacharacters included, are
/// copied through unescaped. With `word_boundary` the result is wrapped in
/// `\b` anchors.
pub fn convert_term(table: &ConfusionTable, term: &str, word_boundary: bool) -> String {
    let mut pattern = String::with_capacity(term.len() * 3 + 2 * WORD_BOUNDARY.len());

    if word_boundary {
        pattern.push_str(WORD_BOUNDARY);
    }

    for c in term.chars() {
        match table.get(c) {
            Some(alternation) => pattern.push_str(alternation),
            None => pattern.push(c),
        }
    }

    if word_boundary {
        pattern.push_str(WORD_BOUNDARY);
    }

    pattern
}
