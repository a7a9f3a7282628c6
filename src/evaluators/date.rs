//! `date[format=...]`.
//!
//! Formats use the familiar single-letter date tokens (`d/m/Y`, `Y-m-d`, ...),
//! which are translated to chrono strftime items before parsing.

use super::EvalContext;
use crate::rules::RuleParams;
use crate::value::FieldValue;
use chrono::format::{Parsed, StrftimeItems, parse};

/// Format used when the rule names none and no other default is configured.
pub const DEFAULT_DATE_FORMAT: &str = "d/m/Y";

/// Translate a date format into a chrono strftime pattern.
///
/// Supported tokens: `d`/`j` day, `m`/`n` month, `Y` four digit year,
/// `y` two digit year, `H`/`G` hour, `i` minute, `s` second. A backslash
/// makes the next character literal; everything else is literal.
pub(crate) fn to_strftime(format: &str) -> String {
    let mut pattern = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        match c {
            'd' | 'j' => pattern.push_str("%d"),
            'm' | 'n' => pattern.push_str("%m"),
            'Y' => pattern.push_str("%Y"),
            'y' => pattern.push_str("%y"),
            'H' | 'G' => pattern.push_str("%H"),
            'i' => pattern.push_str("%M"),
            's' => pattern.push_str("%S"),
            '%' => pattern.push_str("%%"),
            '\\' => match chars.next() {
                Some('%') => pattern.push_str("%%"),
                Some(escaped) => pattern.push(escaped),
                None => {}
            },
            other => pattern.push(other),
        }
    }

    pattern
}

/// Whether `text` matches `format` as a whole and names a real calendar day.
pub(crate) fn is_calendar_date(text: &str, format: &str) -> bool {
    let pattern = to_strftime(format);
    let mut parsed = Parsed::new();
    parse(&mut parsed, text, StrftimeItems::new(&pattern)).is_ok() && parsed.to_naive_date().is_ok()
}

pub(crate) fn evaluate_date(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    params: &RuleParams,
) -> bool {
    let format = match params {
        RuleParams::Date {
            format: Some(format),
        } => format.as_str(),
        _ => ctx.default_date_format(),
    };

    if !is_calendar_date(&value.as_text(), format) {
        ctx.fail(field, "Date not valid");
        return false;
    }
    true
}
