//! Rule set documents for the command line.
//!
//! A rule set is the file form of the `(field, value, rules)` tuples accepted
//! by [`Validator::parse`](crate::validator::Validator::parse). JSON documents
//! are read too, since YAML is a superset.
//!
//! ```yaml
//! fields:
//!   - field: email
//!     value: someone@example.com
//!     rules: "required|email[no_hostname_check]"
//!   - field: age
//!     value: 42
//!     rules: "is[int]"
//! ```

use crate::error::{FieldcheckError, Result};
use crate::value::FieldValue;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// A list of fields to validate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

/// One field, its value, and its rule string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub field: String,

    /// Strings, numbers, booleans, or null. Numbers are validated as their
    /// decimal text; a missing value is null.
    #[serde(default, deserialize_with = "deserialize_value")]
    pub value: FieldValue,

    pub rules: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_value<'de, D>(deserializer: D) -> std::result::Result<FieldValue, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DocumentValue>::deserialize(deserializer)?;
    Ok(match value {
        None => FieldValue::Null,
        Some(DocumentValue::Bool(b)) => FieldValue::Bool(b),
        Some(DocumentValue::Int(n)) => FieldValue::Text(n.to_string()),
        Some(DocumentValue::Float(n)) => FieldValue::Text(n.to_string()),
        Some(DocumentValue::Text(s)) => FieldValue::Text(s),
    })
}

impl RuleSet {
    /// Load a rule set from a YAML or JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FieldcheckError::UserError(format!(
                "failed to read rule set '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a rule set from a YAML (or JSON) string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let ruleset: RuleSet = serde_yaml::from_str(yaml).map_err(|e| {
            FieldcheckError::UserError(format!("failed to parse rule set: {}", e))
        })?;

        ruleset.validate()?;
        Ok(ruleset)
    }

    /// Every entry must name a field.
    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.fields.iter().enumerate() {
            if entry.field.trim().is_empty() {
                return Err(FieldcheckError::UserError(format!(
                    "rule set entry {} has an empty field name",
                    index + 1
                )));
            }
        }
        Ok(())
    }

    /// The entries as `(field, value, rules)` tuples.
    pub fn tuples(&self) -> impl Iterator<Item = (&str, FieldValue, &str)> {
        self.fields
            .iter()
            .map(|e| (e.field.as_str(), e.value.clone(), e.rules.as_str()))
    }
}
