//! The rule catalog: one evaluator per [`RuleKind`].
//!
//! Evaluators append failures to the [`EvalContext`] as a side effect and
//! also return whether the value passed. A single evaluator may record more
//! than one failure (`ip[reject_private]` can report both a private and a
//! reserved range, for example).
//!
//! The table is static. [`Catalog::verified`] checks at construction time that
//! every kind in [`RuleKind::ALL`] has an entry, so a missing evaluator is a
//! startup error rather than a surprise during evaluation.

mod composite;
mod date;
mod email;
mod is_type;
mod length;
mod network;
mod presence;

#[cfg(test)]
mod tests;

use crate::dns::MxResolver;
use crate::error::{FieldcheckError, Result};
use crate::rules::{RuleKind, RuleParams};
use crate::validator::Failure;
use crate::value::FieldValue;

pub use date::DEFAULT_DATE_FORMAT;
pub(crate) use presence::REQUIRED_MESSAGE;

/// Signature shared by every evaluator.
pub type Evaluator = fn(&mut EvalContext<'_>, &str, &FieldValue, &RuleParams) -> bool;

static CATALOG: &[(RuleKind, Evaluator)] = &[
    (RuleKind::Required, presence::evaluate_required),
    (RuleKind::Email, email::evaluate_email),
    (RuleKind::Min, length::evaluate_min),
    (RuleKind::Max, length::evaluate_max),
    (RuleKind::Exact, length::evaluate_exact),
    (RuleKind::Is, is_type::evaluate_is),
    (RuleKind::Ip, network::evaluate_ip),
    (RuleKind::Url, network::evaluate_url),
    (RuleKind::Phone, composite::evaluate_phone),
    (RuleKind::Zip, composite::evaluate_zip),
    (RuleKind::Date, date::evaluate_date),
];

/// A dispatch table known to cover every rule kind.
#[derive(Clone, Copy)]
pub struct Catalog {
    table: &'static [(RuleKind, Evaluator)],
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.table.iter().map(|(kind, _)| kind))
            .finish()
    }
}

impl Catalog {
    /// The built-in catalog, checked for completeness.
    pub fn verified() -> Result<Self> {
        Self::from_table(CATALOG)
    }

    pub(crate) fn from_table(table: &'static [(RuleKind, Evaluator)]) -> Result<Self> {
        for kind in RuleKind::ALL {
            if !table.iter().any(|(k, _)| k == kind) {
                return Err(FieldcheckError::MissingEvaluator(*kind));
            }
        }
        Ok(Self { table })
    }

    /// The evaluator bound to `kind`.
    pub fn evaluator(&self, kind: RuleKind) -> Option<Evaluator> {
        self.table
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, evaluator)| *evaluator)
    }
}

/// Everything an evaluator may read or write during one evaluation pass.
pub struct EvalContext<'a> {
    failures: &'a mut Vec<Failure>,
    allowed_url_protocols: &'a [String],
    mx_resolver: &'a dyn MxResolver,
    default_date_format: &'a str,
    check_email_hostnames: bool,
}

impl<'a> EvalContext<'a> {
    pub(crate) fn new(
        failures: &'a mut Vec<Failure>,
        allowed_url_protocols: &'a [String],
        mx_resolver: &'a dyn MxResolver,
        default_date_format: &'a str,
        check_email_hostnames: bool,
    ) -> Self {
        Self {
            failures,
            allowed_url_protocols,
            mx_resolver,
            default_date_format,
            check_email_hostnames,
        }
    }

    /// Record a failure for `field`.
    pub fn fail(&mut self, field: &str, message: impl Into<String>) {
        let failure = Failure::new(field, message);
        tracing::debug!(field = %failure.field, message = %failure.message, "rule failed");
        self.failures.push(failure);
    }

    pub fn allowed_url_protocols(&self) -> &'a [String] {
        self.allowed_url_protocols
    }

    pub fn mx_resolver(&self) -> &'a dyn MxResolver {
        self.mx_resolver
    }

    pub fn default_date_format(&self) -> &'a str {
        self.default_date_format
    }

    pub fn check_email_hostnames(&self) -> bool {
        self.check_email_hostnames
    }
}
