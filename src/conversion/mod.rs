//! Term-to-pattern conversion service.
//!
//! [`PatternConverter`] pairs a confusion table with an explicit
//! [`ConverterConfig`] and applies it to single terms or whole term lists.

pub mod config;
pub mod lines;

pub use config::{ConversionSummary, ConverterConfig};
pub use lines::TermLines;

use crate::domain::{self, ConfusionTable, SearchTerm};
use crate::error::{ConverterError, ConverterResult};
use regex::Regex;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Converts search terms into OCR-tolerant regex patterns.
///
/// The table is borrowed, so a single shared table can back any number of
/// converters.
#[derive(Debug, Clone)]
pub struct PatternConverter<'t> {
    table: &'t ConfusionTable,
    config: ConverterConfig,
}

impl<'t> PatternConverter<'t> {
    /// Creates a converter over the given table.
    pub fn new(table: &'t ConfusionTable, config: ConverterConfig) -> Self {
        Self { table, config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn table(&self) -> &ConfusionTable {
        self.table
    }

    /// Converts one term, anchoring it when the config asks for it.
    pub fn convert_term(&self, term: &str) -> String {
        domain::convert_term(self.table, term, self.config.word_boundary)
    }

    /// Converts a term and compiles the result.
    pub fn compile(&self, term: &str) -> ConverterResult<Regex> {
        let pattern = self.convert_term(term);
        Regex::new(&pattern).map_err(|source| ConverterError::Pattern { pattern, source })
    }

    /// Converts every non-blank line of `input` into a pattern line in `output`.
    ///
    /// # Arguments
    /// * `input` - Text file with one search term per line
    /// * `output` - Destination, created or truncated
    ///
    /// # Returns
    /// Counts of converted terms and skipped lines. Lines written before a
    /// failure are left in `output`.
    pub fn process_file(&self, input: &Path, output: &Path) -> ConverterResult<ConversionSummary> {
        if !input.exists() {
            return Err(ConverterError::NotFound {
                path: input.to_path_buf(),
            });
        }
        ensure_distinct(input, output)?;

        let reader = File::open(input).map(BufReader::new).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConverterError::NotFound {
                    path: input.to_path_buf(),
                }
            } else {
                ConverterError::io(input, source)
            }
        })?;
        let mut writer = File::create(output)
            .map(BufWriter::new)
            .map_err(|source| ConverterError::io(output, source))?;

        let mut summary = ConversionSummary::default();

        for (index, line) in TermLines::new(reader).enumerate() {
            let line = line.map_err(|source| ConverterError::io(input, source))?;

            let Some(term) = SearchTerm::parse(&line) else {
                summary.blank_lines_skipped += 1;
                continue;
            };

            let pattern = self.convert_term(term.as_str());
            log::debug!("line {}: '{}' -> '{}'", index + 1, term, pattern);

            if self.config.validate_patterns {
                if let Err(err) = Regex::new(&pattern) {
                    log::warn!(
                        "line {}: pattern for '{}' does not compile: {}",
                        index + 1,
                        term,
                        err
                    );
                    summary.invalid_patterns += 1;
                }
            }

            writeln!(writer, "{}", pattern).map_err(|source| ConverterError::io(output, source))?;
            summary.terms_processed += 1;
        }

        writer
            .flush()
            .map_err(|source| ConverterError::io(output, source))?;

        log::info!(
            "converted {} term(s) from {} into {} ({} blank line(s) skipped)",
            summary.terms_processed,
            input.display(),
            output.display(),
            summary.blank_lines_skipped
        );

        Ok(summary)
    }
}

impl Default for PatternConverter<'static> {
    fn default() -> Self {
        Self::new(ConfusionTable::ocr_default(), ConverterConfig::default())
    }
}

/// Rejects an output path that points at the input file itself.
fn ensure_distinct(input: &Path, output: &Path) -> ConverterResult<()> {
    if !output.exists() {
        return Ok(());
    }

    if same_file(input, output)? {
        return Err(ConverterError::InvalidInput {
            parameter: "output".to_string(),
            reason: format!(
                "'{}' is the input file and would be truncated",
                output.display()
            ),
        });
    }

    Ok(())
}

/// Compares device and inode so hard links count as the same file.
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> ConverterResult<bool> {
    use std::os::unix::fs::MetadataExt;

    let a_meta = fs::metadata(a).map_err(|source| ConverterError::io(a, source))?;
    let b_meta = fs::metadata(b).map_err(|source| ConverterError::io(b, source))?;
    Ok(a_meta.dev() == b_meta.dev() && a_meta.ino() == b_meta.ino())
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> ConverterResult<bool> {
    let a_real = fs::canonicalize(a).map_err(|source| ConverterError::io(a, source))?;
    let b_real = fs::canonicalize(b).map_err(|source| ConverterError::io(b, source))?;
    Ok(a_real == b_real)
}
