//! `min`, `max` and `exact`. Length is counted in characters.

use super::EvalContext;
use crate::rules::RuleParams;
use crate::value::FieldValue;

fn length(value: &FieldValue) -> usize {
    value.as_text().chars().count()
}

pub(crate) fn evaluate_min(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    params: &RuleParams,
) -> bool {
    let RuleParams::Min(Some(min)) = params else {
        ctx.fail(field, "Min Lenght validation requires a 'min' parameter");
        return false;
    };
    if length(value) < *min {
        ctx.fail(field, "Too short");
        return false;
    }
    true
}

pub(crate) fn evaluate_max(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    params: &RuleParams,
) -> bool {
    let RuleParams::Max(Some(max)) = params else {
        ctx.fail(field, "Max Lenght validation requires a 'max' parameter");
        return false;
    };
    if length(value) > *max {
        ctx.fail(field, "Too large");
        return false;
    }
    true
}

pub(crate) fn evaluate_exact(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    params: &RuleParams,
) -> bool {
    let RuleParams::Exact(Some(exact)) = params else {
        ctx.fail(field, "Exact Lenght validation requires a 'exact' parameter");
        return false;
    };
    if length(value) != *exact {
        ctx.fail(field, format!("Will be {exact} lenght"));
        return false;
    }
    true
}
