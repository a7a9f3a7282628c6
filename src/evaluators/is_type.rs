use super::EvalContext;
use crate::rules::{IsType, RuleParams};
use crate::value::FieldValue;
use regex::Regex;
use std::sync::LazyLock;

static INTEGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("Invalid integer regex"));

/// Whether `text` is an optionally signed run of ASCII digits.
pub(crate) fn is_integer(text: &str) -> bool {
    INTEGER_REGEX.is_match(text)
}

/// `is[type=int|bool|null]`.
///
/// `bool` accepts only [`FieldValue::Bool`]. The strings `"true"` and
/// `"false"` do not pass.
pub(crate) fn evaluate_is(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    params: &RuleParams,
) -> bool {
    let RuleParams::Is(Some(ty)) = params else {
        ctx.fail(field, "Is validation requires a 'type' parameter");
        return false;
    };

    let (passed, message) = match ty {
        IsType::Int => (is_integer(&value.as_text()), "Not integer"),
        IsType::Bool => (matches!(value, FieldValue::Bool(_)), "Not boolean"),
        IsType::Null => (value.as_text() == "null", "Not null"),
        IsType::Other(name) => {
            tracing::debug!(field, type_name = %name, "unknown type in is rule");
            (false, "Type not found")
        }
    };

    if !passed {
        ctx.fail(field, message);
    }
    passed
}
