//! Common test utilities and helpers.
//!
//! Provides a builder for term-list files and helpers for reading the
//! generated pattern files back.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for search-term input files.
///
/// # Example
///
/// ```no_run
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let path = TermFileBuilder::new()
///     .with_term("John Smith")
///     .with_blank_line()
///     .with_term("555-0199")
///     .build(std::path::Path::new("/tmp/terms.txt"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermFileBuilder {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl TermFileBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            trailing_newline: true,
        }
    }

    /// Adds a term line as-is (surrounding whitespace preserved).
    pub fn with_term(mut self, term: &str) -> Self {
        self.lines.push(term.to_string());
        self
    }

    pub fn with_terms(mut self, terms: &[&str]) -> Self {
        self.lines.extend(terms.iter().map(|t| t.to_string()));
        self
    }

    pub fn with_blank_line(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    pub fn without_trailing_newline(mut self) -> Self {
        self.trailing_newline = false;
        self
    }

    /// Writes the file and returns its path.
    pub fn build(self, path: &Path) -> Result<PathBuf> {
        let mut content = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            content.push('\n');
        }
        fs::write(path, content)?;
        Ok(path.to_path_buf())
    }
}

/// Reads a generated pattern file into its lines.
pub fn read_patterns(path: &Path) -> Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

/// Asserts that every line of the file ends with a single `\n`.
pub fn assert_newline_terminated(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)?;
    if !content.is_empty() {
        assert!(content.ends_with('\n'), "output must end with a newline");
        assert!(!content.contains("\r\n"), "output must use bare \\n endings");
        assert!(!content.contains("\n\n"), "output must not contain blank lines");
    }
    Ok(())
}
