//! Rule kinds and rule parameters.
//!
//! [`RuleKind`] is the closed catalog of validation names. Parameters arrive
//! as a string-keyed [`RawParams`] bag (from the grammar or a direct call) and
//! are decoded once into typed [`RuleParams`] before they are stored.

mod kind;
mod params;


// Re-export public API
pub use kind::RuleKind;
pub use params::{IpParams, IsType, ParamValue, RawParams, RuleParams};
