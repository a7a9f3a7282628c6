//! Candidate field values.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The value a rule is checked against.
///
/// Form input is almost always [`FieldValue::Text`]. `Null` stands for an
/// absent value, and `Bool` exists because `is[type=bool]` only accepts a
/// native boolean.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// String view used by the length, format, and network rules.
    ///
    /// `true` reads as `"1"`; `false` and `Null` read as the empty string.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed(""),
            FieldValue::Bool(true) => Cow::Borrowed("1"),
            FieldValue::Bool(false) => Cow::Borrowed(""),
            FieldValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Absent, null, or empty. This is what the presence gate tests.
    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::Text(s.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
