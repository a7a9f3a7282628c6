//! Registration and failure records.

use crate::rules::{RuleKind, RuleParams};
use crate::value::FieldValue;
use serde::Serialize;
use std::fmt;

/// A value waiting to be checked by one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub value: FieldValue,
    pub params: RuleParams,
}

impl Registration {
    pub fn new(value: FieldValue, params: RuleParams) -> Self {
        Self { value, params }
    }

    pub fn kind(&self) -> RuleKind {
        self.params.kind()
    }
}

/// One rule violation, attributed to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub field: String,
    pub message: String,
}

impl Failure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
