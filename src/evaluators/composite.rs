//! `phone` and `zip`, built from the `is[type=int]` and `exact` evaluators.
//! Both delegates always run, so a short non-numeric value reports twice.
//! Unlike `is[type=int]`, a leading sign is not a digit here.

use super::EvalContext;
use super::is_type::evaluate_is;
use super::length::evaluate_exact;
use crate::rules::{IsType, RuleParams};
use crate::value::FieldValue;

const PHONE_DIGITS: usize = 10;
const ZIP_DIGITS: usize = 5;

fn evaluate_digits(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    digits: usize,
) -> bool {
    let mut numeric = evaluate_is(ctx, field, value, &RuleParams::Is(Some(IsType::Int)));
    if numeric && !value.as_text().bytes().all(|b| b.is_ascii_digit()) {
        ctx.fail(field, "Not integer");
        numeric = false;
    }
    let sized = evaluate_exact(ctx, field, value, &RuleParams::Exact(Some(digits)));
    numeric && sized
}

pub(crate) fn evaluate_phone(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    _params: &RuleParams,
) -> bool {
    evaluate_digits(ctx, field, value, PHONE_DIGITS)
}

pub(crate) fn evaluate_zip(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    _params: &RuleParams,
) -> bool {
    evaluate_digits(ctx, field, value, ZIP_DIGITS)
}
