//! The compact rule grammar.
//!
//! A rule string is one or more specs joined by `|`. Each spec is `kind` or
//! `kind[p1,p2=v2,...]`. Parameters without `=` are flags, except for the
//! length and type rules where a bare value is stored under the rule's own
//! key (`min[5]` is `min=5`, `is[int]` is `type=int`). Every token is trimmed.

mod parser;


// Re-export public API
pub use parser::{PARAM_SEPARATOR, RULE_SEPARATOR, RuleSpec, parse_rule_spec, parse_rule_string};
