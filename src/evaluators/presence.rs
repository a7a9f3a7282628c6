use super::EvalContext;
use crate::rules::RuleParams;
use crate::value::FieldValue;

/// Message for a required field with no value.
pub(crate) const REQUIRED_MESSAGE: &str = "Required and not empty";

/// `required`. The presence gate normally handles this before dispatch; the
/// evaluator repeats the check so it stands on its own.
pub(crate) fn evaluate_required(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    _params: &RuleParams,
) -> bool {
    if value.is_empty() {
        ctx.fail(field, REQUIRED_MESSAGE);
        return false;
    }
    true
}
