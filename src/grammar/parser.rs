//! Rule-string parsing.

use crate::rules::{ParamValue, RawParams, RuleKind};

/// Separator between rule specs on one field.
pub const RULE_SEPARATOR: char = '|';

/// Separator between parameters inside `[...]`.
pub const PARAM_SEPARATOR: char = ',';

/// One parsed rule spec, before its kind name is checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Trimmed kind name. May be anything, including empty.
    pub kind: String,
    /// Parameters in source order.
    pub params: RawParams,
}

/// Parse a rule string such as `required|min[5]|ip[v4,reject_private]`.
///
/// Parsing never fails. A malformed spec yields a [`RuleSpec`] whose kind
/// name is not in the catalog, and registration rejects it.
///
/// # Example
///
/// ```
/// use fieldcheck::grammar::parse_rule_string;
/// use fieldcheck::rules::ParamValue;
///
/// let specs = parse_rule_string("min[5]|max[10]");
/// assert_eq!(specs.len(), 2);
/// assert_eq!(specs[0].kind, "min");
/// assert_eq!(specs[0].params.get("min"), Some(&ParamValue::Text("5".into())));
/// ```
pub fn parse_rule_string(rules: &str) -> Vec<RuleSpec> {
    rules.split(RULE_SEPARATOR).map(parse_rule_spec).collect()
}

/// Parse a single `kind` or `kind[p1,p2=v2,...]` spec.
pub fn parse_rule_spec(spec: &str) -> RuleSpec {
    // Only closing brackets at the end are dropped; `]min[5]` names kind `]min`.
    let spec = spec.trim().trim_end_matches(']');

    let (kind, param_list) = match spec.split_once('[') {
        Some((kind, params)) => (kind.trim(), Some(params)),
        None => (spec.trim(), None),
    };

    let positional_key = RuleKind::from_str(kind).and_then(|k| k.positional_key());

    let mut params = RawParams::new();
    if let Some(list) = param_list {
        for item in list.split(PARAM_SEPARATOR) {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            match (item.split_once('='), positional_key) {
                (Some((key, value)), _) => params.insert(key.trim(), value.trim()),
                (None, Some(key)) => params.insert(key, item),
                (None, None) => params.insert(item, ParamValue::Flag),
            }
        }
    }

    RuleSpec {
        kind: kind.to_string(),
        params,
    }
}
