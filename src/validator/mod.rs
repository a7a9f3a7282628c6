//! The validator engine.
//!
//! A [`Validator`] owns a registration store and a failure list. Rules are
//! registered directly with [`Validator::register`] or in bulk from the rule
//! grammar with [`Validator::parse`]; [`Validator::evaluate`] then checks
//! every registration once and collects every failure instead of stopping
//! at the first one.
//!
//! # Example
//!
//! ```
//! use fieldcheck::validator::Validator;
//!
//! let mut validator = Validator::new().unwrap();
//! validator
//!     .parse([
//!         ("name", "hello", "required|min[5]|max[10]"),
//!         ("zip", "1234", "zip"),
//!         ("website", "", "url"),
//!     ])
//!     .unwrap();
//!
//! assert!(!validator.evaluate().unwrap());
//! let messages: Vec<String> = validator.failures().iter().map(|f| f.to_string()).collect();
//! assert_eq!(messages, vec!["zip: Will be 5 lenght"]);
//! ```

mod runner;
mod store;
mod types;


use crate::config::Config;
use crate::dns::{MxResolver, SystemMxResolver};
use crate::error::{FieldcheckError, Result};
use crate::evaluators::{Catalog, DEFAULT_DATE_FORMAT, EvalContext};
use crate::grammar::parse_rule_string;
use crate::rules::{RawParams, RuleKind, RuleParams};
use crate::value::FieldValue;
use std::fmt;

// Re-export public API
pub use store::{FieldRules, RegistrationStore};
pub use types::{Failure, Registration};

/// URL schemes accepted by the `url` rule unless configured otherwise.
pub const DEFAULT_URL_PROTOCOLS: &[&str] = &["http", "https"];

/// Field validation engine. One instance is meant for one evaluation pass.
pub struct Validator {
    catalog: Catalog,
    store: RegistrationStore,
    failures: Vec<Failure>,
    allowed_url_protocols: Vec<String>,
    default_date_format: String,
    check_email_hostnames: bool,
    mx_resolver: Box<dyn MxResolver>,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("catalog", &self.catalog)
            .field("store", &self.store)
            .field("failures", &self.failures)
            .field("allowed_url_protocols", &self.allowed_url_protocols)
            .field("default_date_format", &self.default_date_format)
            .field("check_email_hostnames", &self.check_email_hostnames)
            .finish_non_exhaustive()
    }
}

impl Validator {
    /// Create a validator bound to the built-in catalog.
    ///
    /// Fails with [`FieldcheckError::MissingEvaluator`] if a rule kind has no
    /// evaluator.
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: Catalog::verified()?,
            store: RegistrationStore::new(),
            failures: Vec::new(),
            allowed_url_protocols: DEFAULT_URL_PROTOCOLS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            default_date_format: DEFAULT_DATE_FORMAT.to_string(),
            check_email_hostnames: true,
            mx_resolver: Box::new(SystemMxResolver::new()),
        })
    }

    /// Create a validator using the settings in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut validator = Self::new()?;
        validator.set_allowed_url_protocols(&config.allowed_url_protocols);
        validator.default_date_format = config.default_date_format.clone();
        validator.check_email_hostnames = config.check_email_hostnames;
        Ok(validator)
    }

    /// Replace the resolver used for email hostname checks.
    #[must_use]
    pub fn with_mx_resolver(mut self, resolver: impl MxResolver + 'static) -> Self {
        self.mx_resolver = Box::new(resolver);
        self
    }

    /// Turn email hostname lookups on or off for every email rule.
    pub fn set_check_email_hostnames(&mut self, enabled: bool) {
        self.check_email_hostnames = enabled;
    }

    /// Register `kind` for `field`, decoding `params` for that kind.
    ///
    /// A later registration for the same field and kind replaces this one.
    ///
    /// # Errors
    ///
    /// * [`FieldcheckError::UnknownRuleKind`] if `kind` is not in the catalog
    /// * [`FieldcheckError::InvalidParameter`] if a parameter cannot be decoded
    pub fn register(
        &mut self,
        field: &str,
        kind: &str,
        value: impl Into<FieldValue>,
        params: RawParams,
    ) -> Result<()> {
        let kind = RuleKind::from_str(kind)
            .ok_or_else(|| FieldcheckError::UnknownRuleKind(kind.to_string()))?;
        let params = RuleParams::decode(kind, &params)?;
        self.register_rule(field, value, params);
        Ok(())
    }

    /// Register already-typed parameters. The rule kind is implied by `params`.
    pub fn register_rule(&mut self, field: &str, value: impl Into<FieldValue>, params: RuleParams) {
        let kind = params.kind();
        let replaced = self
            .store
            .insert(field, Registration::new(value.into(), params));
        tracing::debug!(field, rule = %kind, replaced = replaced.is_some(), "registered rule");
    }

    /// Register every rule in each `(field, value, rules)` tuple.
    ///
    /// Field names and text values are trimmed. Stops at the first
    /// registration error.
    pub fn parse<I, F, V, R>(&mut self, tuples: I) -> Result<()>
    where
        I: IntoIterator<Item = (F, V, R)>,
        F: AsRef<str>,
        V: Into<FieldValue>,
        R: AsRef<str>,
    {
        for (field, value, rules) in tuples {
            let field = field.as_ref().trim();
            let value = match value.into() {
                FieldValue::Text(text) => FieldValue::Text(text.trim().to_string()),
                other => other,
            };
            for spec in parse_rule_string(rules.as_ref()) {
                self.register(field, &spec.kind, value.clone(), spec.params)?;
            }
        }
        Ok(())
    }

    /// Replace the list of schemes accepted by the `url` rule.
    pub fn set_allowed_url_protocols<I, S>(&mut self, protocols: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_url_protocols = protocols
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
    }

    /// Accept one more scheme in the `url` rule.
    pub fn add_allowed_url_protocol(&mut self, protocol: impl Into<String>) {
        self.allowed_url_protocols.push(protocol.into());
    }

    pub fn allowed_url_protocols(&self) -> &[String] {
        &self.allowed_url_protocols
    }

    /// The fixed set of rule kinds.
    pub fn rule_kinds(&self) -> &'static [RuleKind] {
        RuleKind::ALL
    }

    pub fn is_registered(&self, field: &str, kind: RuleKind) -> bool {
        self.store.get(field, kind).is_some()
    }

    pub fn registrations(&self) -> &RegistrationStore {
        &self.store
    }

    /// Run every registered rule.
    ///
    /// Returns `Ok(true)` when no failures were recorded. Failures are appended
    /// to [`failures`](Self::failures); calling this again appends a second
    /// round.
    ///
    /// # Errors
    ///
    /// [`FieldcheckError::NoValidations`] if nothing is registered.
    pub fn evaluate(&mut self) -> Result<bool> {
        if self.store.is_empty() {
            return Err(FieldcheckError::NoValidations);
        }

        tracing::debug!(registrations = self.store.len(), "evaluating");
        let mut ctx = EvalContext::new(
            &mut self.failures,
            &self.allowed_url_protocols,
            self.mx_resolver.as_ref(),
            &self.default_date_format,
            self.check_email_hostnames,
        );
        runner::run(&self.store, &self.catalog, &mut ctx)?;

        Ok(self.failures.is_empty())
    }

    /// Failures recorded so far, in the order they were found.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Failures recorded for one field.
    pub fn failures_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Failure> + 'a {
        self.failures.iter().filter(move |f| f.field == field)
    }
}
