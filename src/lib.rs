//! Fieldcheck: a declarative field-validation engine.
//!
//! Each field is registered with a value and a rule string such as
//! `required|min[3]|max[40]`. Evaluation checks every rule once and collects
//! every failure as a `(field, message)` pair instead of stopping at the
//! first problem.
//!
//! A field without a `required` rule is optional: its other rules are
//! skipped while its value is empty.
//!
//! ```
//! use fieldcheck::validator::Validator;
//!
//! let mut validator = Validator::new().unwrap();
//! validator.set_check_email_hostnames(false);
//! validator
//!     .parse([
//!         ("email", "someone@example.com", "required|email"),
//!         ("ip", "10.0.0.1", "ip[v4,reject_private]"),
//!     ])
//!     .unwrap();
//!
//! assert!(!validator.evaluate().unwrap());
//! assert_eq!(validator.failures()[0].to_string(), "ip: Private ip not allowed");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dns;
pub mod error;
pub mod evaluators;
pub mod exit_codes;
pub mod grammar;
pub mod logging;
pub mod rules;
pub mod ruleset;
pub mod validator;
pub mod value;

pub use error::{FieldcheckError, Result};
pub use validator::{Failure, Validator};
pub use value::FieldValue;
