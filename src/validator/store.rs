//! The registration store.

use super::types::Registration;
use crate::rules::RuleKind;
use indexmap::IndexMap;

/// Rules registered for one field, in first-registration order.
pub type FieldRules = IndexMap<RuleKind, Registration>;

/// Registrations keyed by field, then by rule kind.
///
/// Fields keep the order in which they were first registered, and so do the
/// kinds within a field. Registering the same (field, kind) pair again
/// replaces the earlier registration in place.
#[derive(Debug, Clone, Default)]
pub struct RegistrationStore {
    fields: IndexMap<String, FieldRules>,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the registration for `(field, registration.kind())`.
    ///
    /// Returns the replaced registration, if there was one.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        registration: Registration,
    ) -> Option<Registration> {
        self.fields
            .entry(field.into())
            .or_default()
            .insert(registration.kind(), registration)
    }

    pub fn get(&self, field: &str, kind: RuleKind) -> Option<&Registration> {
        self.fields.get(field)?.get(&kind)
    }

    pub fn rules(&self, field: &str) -> Option<&FieldRules> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(field, rules)| (field.as_str(), rules))
    }

    /// Number of (field, kind) registrations.
    pub fn len(&self) -> usize {
        self.fields.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
