//! Rule parameters: the raw string bag produced by the grammar and the typed
//! per-kind records the evaluators consume.

use super::kind::RuleKind;
use crate::error::{FieldcheckError, Result};
use indexmap::IndexMap;

/// A single raw parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Flag-style parameter written without `=value` (e.g. `ip[v4]`).
    Flag,
    /// Parameter written as `key=value`, or a positional value.
    Text(String),
}

impl ParamValue {
    /// Text content, if this is not a bare flag.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Flag => None,
            ParamValue::Text(s) => Some(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

/// Ordered, string-keyed parameter bag for one rule invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams(IndexMap<String, ParamValue>);

impl RawParams {
    /// Create an empty parameter bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert) for a `key=value` parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`insert`](Self::insert) for a flag parameter.
    #[must_use]
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.insert(key, ParamValue::Flag);
        self
    }

    /// Insert a parameter. A repeated key overwrites the earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Whether a key is present, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Target type of an `is` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsType {
    Int,
    /// Only a native boolean value satisfies this; see [`FieldValue`](crate::value::FieldValue).
    Bool,
    Null,
    /// Any other name. Evaluates to a "Type not found" failure.
    Other(String),
}

impl IsType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "int" => IsType::Int,
            "bool" => IsType::Bool,
            "null" => IsType::Null,
            other => IsType::Other(other.to_string()),
        }
    }
}

/// Flags for the `ip` rule. Each set flag runs its own check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpParams {
    pub v4: bool,
    pub v6: bool,
    pub reject_private: bool,
}

impl IpParams {
    /// No flag set: fall back to the any-version check.
    pub fn is_generic(&self) -> bool {
        !self.v4 && !self.v6 && !self.reject_private
    }
}

/// Typed parameters, decoded once at registration.
///
/// Length and type parameters are optional here because a rule registered
/// without them is still accepted; the evaluator reports the omission as a
/// failure of that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleParams {
    Required,
    Email { check_hostname: bool },
    Min(Option<usize>),
    Max(Option<usize>),
    Exact(Option<usize>),
    Is(Option<IsType>),
    Ip(IpParams),
    Url,
    Phone,
    Zip,
    /// `None` uses the validator's default format.
    Date { format: Option<String> },
}

impl RuleParams {
    /// The rule kind these parameters belong to.
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleParams::Required => RuleKind::Required,
            RuleParams::Email { .. } => RuleKind::Email,
            RuleParams::Min(_) => RuleKind::Min,
            RuleParams::Max(_) => RuleKind::Max,
            RuleParams::Exact(_) => RuleKind::Exact,
            RuleParams::Is(_) => RuleKind::Is,
            RuleParams::Ip(_) => RuleKind::Ip,
            RuleParams::Url => RuleKind::Url,
            RuleParams::Phone => RuleKind::Phone,
            RuleParams::Zip => RuleKind::Zip,
            RuleParams::Date { .. } => RuleKind::Date,
        }
    }

    /// Decode a raw parameter bag for `kind`.
    ///
    /// Keys the kind does not consult are ignored. Flags count as set when
    /// present, whatever value they carry.
    pub fn decode(kind: RuleKind, raw: &RawParams) -> Result<Self> {
        for (key, _) in raw.iter() {
            if !consulted_keys(kind).contains(&key) {
                tracing::debug!(rule = %kind, key, "ignoring unused rule parameter");
            }
        }

        let params = match kind {
            RuleKind::Required => RuleParams::Required,
            RuleKind::Email => RuleParams::Email {
                check_hostname: !raw.contains("no_hostname_check"),
            },
            RuleKind::Min => RuleParams::Min(decode_length(kind, raw, "min")?),
            RuleKind::Max => RuleParams::Max(decode_length(kind, raw, "max")?),
            RuleKind::Exact => RuleParams::Exact(decode_length(kind, raw, "exact")?),
            RuleKind::Is => {
                RuleParams::Is(decode_text(kind, raw, "type")?.map(|t| IsType::from_name(&t)))
            }
            RuleKind::Ip => RuleParams::Ip(IpParams {
                v4: raw.contains("v4"),
                v6: raw.contains("v6"),
                reject_private: raw.contains("reject_private"),
            }),
            RuleKind::Url => RuleParams::Url,
            RuleKind::Phone => RuleParams::Phone,
            RuleKind::Zip => RuleParams::Zip,
            RuleKind::Date => RuleParams::Date {
                format: decode_text(kind, raw, "format")?,
            },
        };
        Ok(params)
    }
}

fn consulted_keys(kind: RuleKind) -> &'static [&'static str] {
    match kind {
        RuleKind::Email => &["no_hostname_check"],
        RuleKind::Min => &["min"],
        RuleKind::Max => &["max"],
        RuleKind::Exact => &["exact"],
        RuleKind::Is => &["type"],
        RuleKind::Ip => &["v4", "v6", "reject_private"],
        RuleKind::Date => &["format"],
        RuleKind::Required | RuleKind::Url | RuleKind::Phone | RuleKind::Zip => &[],
    }
}

fn decode_text(kind: RuleKind, raw: &RawParams, key: &str) -> Result<Option<String>> {
    match raw.get(key) {
        None => Ok(None),
        Some(ParamValue::Text(s)) => Ok(Some(s.clone())),
        Some(ParamValue::Flag) => Err(FieldcheckError::InvalidParameter {
            kind,
            name: key.to_string(),
            value: "expected a value, found a bare flag".to_string(),
        }),
    }
}

fn decode_length(kind: RuleKind, raw: &RawParams, key: &str) -> Result<Option<usize>> {
    let Some(text) = decode_text(kind, raw, key)? else {
        return Ok(None);
    };
    text.trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|_| FieldcheckError::InvalidParameter {
            kind,
            name: key.to_string(),
            value: text,
        })
}
