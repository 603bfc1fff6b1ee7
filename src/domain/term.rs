//! Search terms read from an input list.

use std::fmt;

/// Whitespace plus the ASCII file, group, record and unit separators.
fn is_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// A trimmed, non-empty line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm<'a>(&'a str);

impl<'a> SearchTerm<'a> {
    /// Trims `line` and returns `None` when nothing is left.
    pub fn parse(line: &'a str) -> Option<Self> {
        let trimmed = line.trim_matches(is_padding);
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed))
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for SearchTerm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
