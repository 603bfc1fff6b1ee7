//! Error types for the pattern converter.
//!
//! Errors are grouped by how a caller is expected to react to them, and each
//! variant maps onto one of the process exit codes used by the CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type ConverterResult<T> = Result<T, ConverterError>;

/// Every failure the converter can report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConverterError {
    /// Input file is missing at the start of processing
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading the input or writing the output failed
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A converted term is not a valid regular expression
    #[error("Pattern '{pattern}' does not compile: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}

impl ConverterError {
    /// Exit code used when no error occurred.
    pub const EXIT_SUCCESS: u8 = 0;
    /// Exit code for a missing input file.
    pub const EXIT_NOT_FOUND: u8 = 1;
    /// Exit code for read/write failures.
    pub const EXIT_IO: u8 = 2;
    /// Exit code for everything else.
    pub const EXIT_UNEXPECTED: u8 = 3;

    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => Self::EXIT_NOT_FOUND,
            Self::Io { .. } => Self::EXIT_IO,
            Self::Pattern { .. } | Self::InvalidInput { .. } => Self::EXIT_UNEXPECTED,
        }
    }
}
