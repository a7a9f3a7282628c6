//! Implementation of the `fieldcheck check` command.
//!
//! Loads a rule set document, runs every rule through a [`Validator`] and
//! prints the failure report to stdout.

use crate::cli::{CheckArgs, ReportFormat};
use crate::config::Config;
use crate::error::{FieldcheckError, Result};
use crate::ruleset::RuleSet;
use crate::validator::{Failure, Validator};
use serde::Serialize;


/// Outcome of one `check` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub passed: bool,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn new(failures: Vec<Failure>) -> Self {
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }

    /// Render the report in the requested format. Text output is empty on pass.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self
                .failures
                .iter()
                .map(|failure| format!("{}\n", failure))
                .collect()),
            ReportFormat::Json => {
                let mut json = serde_json::to_string_pretty(self).map_err(|e| {
                    FieldcheckError::UserError(format!("failed to serialize report: {}", e))
                })?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

/// Build a validator for `config`, register `ruleset` and evaluate it.
///
/// `offline` turns off email hostname lookups regardless of the config.
pub fn run_check(ruleset: &RuleSet, config: &Config, offline: bool) -> Result<Report> {
    let mut validator = Validator::from_config(config)?;
    if offline {
        validator.set_check_email_hostnames(false);
    }

    validator.parse(ruleset.tuples())?;
    validator.evaluate()?;

    Ok(Report::new(validator.failures().to_vec()))
}

/// Execute the `fieldcheck check` command.
///
/// Exits through [`FieldcheckError::ValidationFailed`] when any rule fails,
/// after the report has been printed.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let ruleset = RuleSet::load(&args.file)?;
    tracing::debug!(
        file = %args.file.display(),
        fields = ruleset.fields.len(),
        offline = args.offline,
        "checking rule set"
    );

    let report = run_check(&ruleset, &config, args.offline)?;
    print!("{}", report.render(args.format)?);

    if report.passed {
        Ok(())
    } else {
        Err(FieldcheckError::ValidationFailed(report.failures.len()))
    }
}
