//! CLI module for firgen
//!
//! ## Usage
//!
//! - `firgen` - Write `gr_fir_util.h` and `gr_fir_util.cc` for the built-in catalog into the current directory
//! - `firgen OUTPUT_DIR` - Same, into another directory
//! - `--catalog FILE` / `--signatures a,b,c` - Choose the signatures
//! - `--check` - Fail if the artifacts on disk are missing or out of date
//! - `--emit header|impl` - Print one artifact to stdout instead of writing files
//! - `--list` / `--contract` - Inspect the catalog and the registry entry points it requires
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use crate::errors::GenError;
use crate::version::FIRGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<GenError> for CliError {
    /// Render a generation error as a miette report (code, cause chain and help).
    fn from(err: GenError) -> Self {
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate the FIR filter factory interface and its delegating implementation
#[derive(Parser, Debug)]
#[command(name = "firgen")]
#[command(version = FIRGEN_VERSION)]
#[command(about = "Generate the FIR filter factory interface and implementation", long_about = None)]
pub struct Cli {
    /// Directory the artifacts are written to (or checked in)
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON catalog file listing the signatures
    #[arg(long, value_name = "FILE", conflicts_with = "signatures")]
    pub catalog: Option<PathBuf>,

    /// Comma-separated IOT signature codes (default: the built-in catalog)
    #[arg(long, value_name = "CODES", value_delimiter = ',')]
    pub signatures: Option<Vec<String>>,

    /// Family stem for every generated name (default: gr_fir)
    #[arg(long, value_name = "NAME")]
    pub family: Option<String>,

    /// Check that the artifacts on disk are up to date without writing
    #[arg(long)]
    pub check: bool,

    /// Print one artifact to stdout instead of writing files
    #[arg(long, value_enum, value_name = "ARTIFACT", conflicts_with = "check")]
    pub emit: Option<EmitTarget>,

    /// List the catalog signatures and their element types
    #[arg(long, conflicts_with_all = ["check", "emit", "contract"])]
    pub list: bool,

    /// List the registry entry points the generated code links against
    #[arg(long, conflicts_with_all = ["check", "emit"])]
    pub contract: bool,
}

/// Which artifact `--emit` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitTarget {
    /// The interface artifact (`<family>_util.h`)
    Header,
    /// The implementation artifact (`<family>_util.cc`)
    Impl,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let inputs = commands::load_inputs(&cli)?;

    if cli.list {
        return commands::list_signatures(&inputs);
    }
    if cli.contract {
        return commands::print_contract(&inputs);
    }
    if let Some(target) = cli.emit {
        return commands::emit_artifact(&inputs, target);
    }
    if cli.check {
        return commands::check_artifacts(&inputs);
    }
    commands::generate_artifacts(&inputs)
}

// ============================================================================
// Tests
// ============================================================================
