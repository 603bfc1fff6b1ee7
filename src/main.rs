//! Search-term conversion CLI.
//!
//! Reads a list of search terms and writes one OCR-tolerant regex pattern
//! per term, reporting failures through distinct exit codes.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ocr_regex::{ConfusionTable, ConverterConfig, ConverterError, PatternConverter};

/// OCR Regex Generator
///
/// Convert search terms into OCR-tolerant regex patterns for redaction.
/// Characters OCR commonly misreads are replaced by alternations.
#[derive(Parser)]
#[command(name = "ocr-regex")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input file with one search term per line
    #[arg(short, long, value_name = "FILE", default_value = "searchterms.txt")]
    input: PathBuf,

    /// Output file for the generated patterns
    #[arg(short, long, value_name = "FILE", default_value = "regex_searchterms.txt")]
    output: PathBuf,

    /// Do not wrap patterns in \b word-boundary anchors
    #[arg(long)]
    no_word_boundary: bool,

    /// Warn about generated patterns that are not valid regular expressions
    #[arg(long)]
    validate: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ConverterConfig {
        ConverterConfig::default()
            .with_word_boundary(!self.no_word_boundary)
            .with_validation(self.validate)
    }
}

/// Conversion command handler.
struct ConversionHandler {
    converter: PatternConverter<'static>,
    verbose: bool,
}

impl ConversionHandler {
    fn new(config: ConverterConfig, verbose: bool) -> Self {
        Self {
            converter: PatternConverter::new(ConfusionTable::ocr_default(), config),
            verbose,
        }
    }

    /// Executes a conversion and reports the result.
    fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        if self.verbose {
            println!("Input:  {}", input.display());
            println!("Output: {}", output.display());
            println!(
                "Word boundaries: {}",
                if self.converter.config().word_boundary {
                    "on"
                } else {
                    "off"
                }
            );
        }

        let summary = self
            .converter
            .process_file(input, output)
            .with_context(|| "Conversion failed")?;

        if self.verbose {
            println!("\nConversion Summary:");
            println!("  Terms converted:     {}", summary.terms_processed);
            println!("  Blank lines skipped: {}", summary.blank_lines_skipped);
            if self.converter.config().validate_patterns {
                println!("  Invalid patterns:    {}", summary.invalid_patterns);
            }
        }

        println!(
            "✓ Converted {} term(s) → {}",
            summary.terms_processed,
            output.display()
        );

        if !summary.all_valid() {
            println!(
                "⚠ {} pattern(s) do not compile as regular expressions",
                summary.invalid_patterns
            );
        }

        Ok(())
    }
}

/// Maps a failure onto the documented exit codes.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ConverterError>()
        .map(ConverterError::exit_code)
        .unwrap_or(ConverterError::EXIT_UNEXPECTED)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let handler = ConversionHandler::new(cli.config(), cli.verbose);

    match handler.convert(&cli.input, &cli.output) {
        Ok(()) => ExitCode::from(ConverterError::EXIT_SUCCESS),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}
