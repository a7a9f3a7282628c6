//! Implementation of the `fieldcheck rules` command.

use crate::error::Result;
use crate::rules::RuleKind;

/// The rule-kind catalog, one name per line.
pub fn render_rule_kinds() -> String {
    RuleKind::ALL
        .iter()
        .map(|kind| format!("{}\n", kind))
        .collect()
}

/// Execute the `fieldcheck rules` command.
pub fn cmd_rules() -> Result<()> {
    print!("{}", render_rule_kinds());
    Ok(())
}
