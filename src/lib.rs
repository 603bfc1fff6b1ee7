//! OCR-tolerant regex patterns for document redaction.
//!
//! Scanned documents run through OCR often come back with look-alike
//! characters swapped: `0` for `O`, `1` for `l`, `vv` for `w`. This library
//! rewrites plain search terms into regular expressions that still match
//! after such misreads, so a redaction engine can find them.
//!
//! # Features
//!
//! - **Confusion table**: Curated groups of characters OCR mixes up
//! - **Word boundaries**: Optional `\b` anchors around every pattern
//! - **Term lists**: Line-by-line conversion of whole files, blank lines skipped
//! - **Validation**: Optional compile check of every generated pattern
//!
//! # Architecture
//!
//! - [`domain`]: Confusion table, search terms and the substitution itself
//! - [`conversion`]: Converter service, configuration and run statistics
//! - [`error`]: Error taxonomy and CLI exit codes
//!
//! # Quick Start
//!
//! ```no_run
//! use ocr_regex::PatternConverter;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = PatternConverter::default();
//!
//! let summary = converter.process_file(
//!     Path::new("searchterms.txt"),
//!     Path::new("regex_searchterms.txt"),
//! )?;
//! println!("{} terms converted", summary.terms_processed);
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Single Terms
//!
//! ```
//! use ocr_regex::{ConfusionTable, ConverterConfig, PatternConverter};
//!
//! let config = ConverterConfig::default().with_word_boundary(false);
//! let converter = PatternConverter::new(ConfusionTable::ocr_default(), config);
//!
//! assert_eq!(converter.convert_term("bob"), "[b|h]o[b|h]");
//! ```

// Public API
pub mod conversion;
pub mod domain;
pub mod error;

// Re-exports for convenient access
pub use conversion::{ConversionSummary, ConverterConfig, PatternConverter};
pub use domain::{convert_term, ConfusionTable, SearchTerm};
pub use error::{ConverterError, ConverterResult};
