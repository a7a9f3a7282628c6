//! Command implementations for fieldcheck.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod rules;

pub use check::{Report, cmd_check};
pub use rules::cmd_rules;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Rules => cmd_rules(),
    }
}
