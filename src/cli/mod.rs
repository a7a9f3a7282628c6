//! CLI argument parsing for fieldcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Fieldcheck: declarative field validation with a compact rule grammar.
///
/// Rules are written per field as pipe-separated specs, for example
/// `required|min[3]|max[40]` or `ip[v4,reject_private]`. Every field is
/// checked and every failure is reported in one pass.
#[derive(Parser, Debug)]
#[command(name = "fieldcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for fieldcheck.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the fields in a rule set file.
    ///
    /// Exits 0 when every rule passes and 2 when any rule fails.
    Check(CheckArgs),

    /// List the available rule kinds.
    Rules,
}

/// Output format for the failure report.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One `field: message` line per failure.
    #[default]
    Text,
    /// A JSON object with `passed` and `failures`.
    Json,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Rule set file (YAML or JSON).
    pub file: PathBuf,

    /// Config file with validator settings.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Skip MX lookups for email rules.
    #[arg(long)]
    pub offline: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
