//! Converter configuration and run statistics.

/// Options controlling how terms are turned into patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Wrap each pattern in `\b` anchors
    pub word_boundary: bool,

    /// Compile each written pattern and report the ones that fail
    pub validate_patterns: bool,
}

impl ConverterConfig {
    pub fn with_word_boundary(mut self, word_boundary: bool) -> Self {
        self.word_boundary = word_boundary;
        self
    }

    pub fn with_validation(mut self, validate_patterns: bool) -> Self {
        self.validate_patterns = validate_patterns;
        self
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            word_boundary: true,
            validate_patterns: false,
        }
    }
}

/// Statistics about a file conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Non-blank lines converted and written
    pub terms_processed: usize,

    /// Blank lines dropped from the output
    pub blank_lines_skipped: usize,

    /// Written patterns that failed to compile (validation only)
    pub invalid_patterns: usize,
}

impl ConversionSummary {
    /// Returns true if every written pattern compiled, or none were checked.
    pub fn all_valid(&self) -> bool {
        self.invalid_patterns == 0
    }
}
