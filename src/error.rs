//! Error types for fieldcheck.
//!
//! Uses thiserror for derive macros. These are the fatal, programmer-facing
//! errors; rule violations found in field data are collected as
//! [`Failure`](crate::validator::Failure) records instead.

use crate::exit_codes;
use crate::rules::RuleKind;
use thiserror::Error;

/// Main error type for fieldcheck operations.
#[derive(Error, Debug)]
pub enum FieldcheckError {
    /// A registration named a rule kind outside the catalog.
    #[error("Unknown '{0}' validation type.")]
    UnknownRuleKind(String),

    /// The catalog declares a kind with no bound evaluator.
    #[error("Can't find '{0}' validation type")]
    MissingEvaluator(RuleKind),

    /// `evaluate` was called before anything was registered.
    #[error("No validations to apply")]
    NoValidations,

    /// A rule parameter could not be decoded for its kind.
    #[error("invalid parameter '{name}' for '{kind}' rule: {value}")]
    InvalidParameter {
        kind: RuleKind,
        name: String,
        value: String,
    },

    /// Bad arguments, unreadable files, or invalid configuration.
    #[error("{0}")]
    UserError(String),

    /// Evaluation completed and reported failures.
    #[error("Validation failed: {0} failure(s)")]
    ValidationFailed(usize),
}

impl FieldcheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FieldcheckError::UnknownRuleKind(_) => exit_codes::USER_ERROR,
            FieldcheckError::MissingEvaluator(_) => exit_codes::USER_ERROR,
            FieldcheckError::NoValidations => exit_codes::USER_ERROR,
            FieldcheckError::InvalidParameter { .. } => exit_codes::USER_ERROR,
            FieldcheckError::UserError(_) => exit_codes::USER_ERROR,
            FieldcheckError::ValidationFailed(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for fieldcheck operations.
pub type Result<T> = std::result::Result<T, FieldcheckError>;
