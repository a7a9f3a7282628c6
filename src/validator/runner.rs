//! The evaluation runner.
//!
//! Each field goes through the presence gate once per registered rule:
//!
//! 1. A required field whose value is empty records "Required and not empty"
//!    and stops. No other rule on that field runs.
//! 2. An optional field whose value is empty stops silently.
//! 3. Otherwise the rule's evaluator runs.
//!
//! `required` is always visited first so that an empty required field is
//! reported once, whatever order its rules were registered in. Fields never
//! affect each other; every field is visited.

use super::store::{FieldRules, RegistrationStore};
use crate::error::{FieldcheckError, Result};
use crate::evaluators::{Catalog, EvalContext, REQUIRED_MESSAGE};
use crate::rules::RuleKind;

/// How processing of one field ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldOutcome {
    /// Required and empty; one failure recorded.
    ShortCircuited,
    /// Optional and empty; nothing checked.
    Skipped,
    /// Every registered rule ran.
    Evaluated,
}

pub(crate) fn run(
    store: &RegistrationStore,
    catalog: &Catalog,
    ctx: &mut EvalContext<'_>,
) -> Result<()> {
    for (field, rules) in store.fields() {
        let outcome = evaluate_field(field, rules, catalog, ctx)?;
        tracing::debug!(field, ?outcome, "field processed");
    }
    Ok(())
}

pub(crate) fn evaluate_field(
    field: &str,
    rules: &FieldRules,
    catalog: &Catalog,
    ctx: &mut EvalContext<'_>,
) -> Result<FieldOutcome> {
    let required = rules.get_key_value(&RuleKind::Required);
    let others = rules
        .iter()
        .filter(|(kind, _)| **kind != RuleKind::Required);

    for (kind, registration) in required.into_iter().chain(others) {
        if registration.value.is_empty() {
            if required.is_some() {
                ctx.fail(field, REQUIRED_MESSAGE);
                return Ok(FieldOutcome::ShortCircuited);
            }
            return Ok(FieldOutcome::Skipped);
        }

        let evaluator = catalog
            .evaluator(*kind)
            .ok_or(FieldcheckError::MissingEvaluator(*kind))?;
        evaluator(ctx, field, &registration.value, &registration.params);
    }

    Ok(FieldOutcome::Evaluated)
}
