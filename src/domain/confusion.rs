//! OCR confusion table.
//!
//! Maps a single character to a bracket alternation listing every character
//! OCR engines commonly mistake it for, itself included. Entries are curated
//! by hand and are not symmetric: `f` maps to `[t|f]` while `t` maps to
//! `[t|f|i]`.
//!
//! The `|` inside each bracket is kept verbatim from the curated data. Inside
//! a regex character class it is a literal pipe, so `[l|1|I]` also matches
//! `|`. Downstream tooling relies on the exact strings, so they are not
//! rewritten here.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Curated confusion groups, one entry per source character.
const CONFUSION_GROUPS: [(char, &str); 24] = [
    ('l', "[l|1|I]"),
    ('O', "[O|0|Q]"),
    ('0', "[O|0|Q]"),
    ('Q', "[O|0|Q]"),
    ('8', "[8|B]"),
    ('B', "[8|B]"),
    ('w', "[w|vv]"),
    ('v', "[v|u|y]"),
    ('y', "[v|u|y]"),
    ('u', "[u|v]"),
    ('5', "[5|S]"),
    ('S', "[5|S]"),
    ('A', "[4|A]"),
    ('t', "[t|f|i]"),
    ('f', "[t|f]"),
    ('e', "[e|c]"),
    ('c', "[e|c]"),
    ('h', "[h|b|li]"),
    ('b', "[b|h]"),
    ('i', "[i|1|l]"),
    ('I', "[I|l|1]"),
    ('G', "[G|6]"),
    ('6', "[G|6|o]"),
    ('1', "[1|I|l]"),
];

/// Immutable lookup from a character to its OCR alternation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionTable {
    entries: BTreeMap<char, &'static str>,
}

impl ConfusionTable {
    /// Builds a fresh table holding the curated confusion groups.
    pub fn build() -> Self {
        Self {
            entries: CONFUSION_GROUPS.iter().copied().collect(),
        }
    }

    /// Returns the process-wide table, built on first use.
    pub fn ocr_default() -> &'static ConfusionTable {
        static TABLE: Lazy<ConfusionTable> = Lazy::new(ConfusionTable::build);
        &TABLE
    }

    /// Alternation for `c`, if it has one.
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.entries.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().map(|(c, alt)| (*c, *alt))
    }
}

impl Default for ConfusionTable {
    fn default() -> Self {
        Self::build()
    }
}
