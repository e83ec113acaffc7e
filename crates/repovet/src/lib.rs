//! # repovet
//!
//! **CLI Binary**
//!
//! Entry point for the `repovet` command-line application. It drives the
//! compliance engine and the fix pipeline over a target repository.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Dispatch commands to appropriate handlers
//! * Render reports (text or JSON) and map them to exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Exit code when the repository is valid.
pub(crate) const EXIT_OK: i32 = 0;
/// Exit code when the report is invalid without any hard errors.
pub(crate) const EXIT_INVALID: i32 = 1;
/// Exit code when any error-level finding is present.
pub(crate) const EXIT_ERRORS: i32 = 2;

#[derive(Parser)]
#[command(
    name = "repovet",
    version,
    about = "Audit repositories against a structural policy and apply canned fixes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a repository against the structural policy.
    Check(CheckArgs),
    /// Apply every available fix, then re-validate.
    Fix(FixArgs),
    /// List the built-in remediation templates.
    Templates,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Repository root to audit.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Apply available fixes, then report the re-validated state.
    #[arg(long)]
    pub fix: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Print per-category progress to stderr.
    #[arg(long)]
    pub verbose: bool,

    /// Reserved: external schema override for workflow shape checks.
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

#[derive(Args)]
pub struct FixArgs {
    /// Repository root to fix.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print per-category progress to stderr.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Parse arguments and dispatch, returning the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Check(args) => commands::check::handle(args),
        Commands::Fix(args) => commands::fix::handle(args),
        Commands::Templates => commands::templates::handle(),
    }
}

/// Map a finished report to the exit-code convention: 0 valid, 2 any error,
/// 1 invalid for some other reason.
pub(crate) fn exit_code(report: &repovet_types::ValidationReport) -> i32 {
    if !report.errors.is_empty() {
        EXIT_ERRORS
    } else if !report.is_valid {
        EXIT_INVALID
    } else {
        EXIT_OK
    }
}
