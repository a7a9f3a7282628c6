//! The closed set of rule kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validation category known to the catalog.
///
/// The set is fixed at build time. Anything outside it is rejected at
/// registration with [`FieldcheckError::UnknownRuleKind`](crate::error::FieldcheckError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Field must be present and non-empty.
    Required,
    /// Email syntax, optionally with an MX lookup of the domain.
    Email,
    /// Minimum length.
    Min,
    /// Maximum length.
    Max,
    /// Exact length.
    Exact,
    /// Type check (`int`, `bool`, `null`).
    Is,
    /// IPv4/IPv6 address, optionally rejecting private and reserved ranges.
    Ip,
    /// URL with an allowed scheme.
    Url,
    /// Ten digit phone number.
    Phone,
    /// Five digit postal code.
    Zip,
    /// Calendar date in a configurable format.
    Date,
}

impl RuleKind {
    /// Every kind, in catalog order.
    pub const ALL: &'static [RuleKind] = &[
        RuleKind::Required,
        RuleKind::Email,
        RuleKind::Min,
        RuleKind::Max,
        RuleKind::Exact,
        RuleKind::Is,
        RuleKind::Ip,
        RuleKind::Url,
        RuleKind::Phone,
        RuleKind::Zip,
        RuleKind::Date,
    ];

    /// The name used for this kind in rule strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Email => "email",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::Exact => "exact",
            RuleKind::Is => "is",
            RuleKind::Ip => "ip",
            RuleKind::Url => "url",
            RuleKind::Phone => "phone",
            RuleKind::Zip => "zip",
            RuleKind::Date => "date",
        }
    }

    /// Parse a rule kind from its name. Matching is exact and case-sensitive.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == s)
    }

    /// The key a positional (`kind[value]`) parameter is stored under, if
    /// this kind takes one.
    pub fn positional_key(&self) -> Option<&'static str> {
        match self {
            RuleKind::Min => Some("min"),
            RuleKind::Max => Some("max"),
            RuleKind::Exact => Some("exact"),
            RuleKind::Is => Some("type"),
            _ => None,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
