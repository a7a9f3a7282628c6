use super::EvalContext;
use crate::rules::RuleParams;
use crate::value::FieldValue;
use regex::Regex;
use std::sync::LazyLock;

/// Dot-atom local part, then at least two DNS labels.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("Invalid email regex")
});

const MAX_LOCAL_PART: usize = 64;
const MAX_EMAIL_LENGTH: usize = 254;

pub(crate) fn is_email(text: &str) -> bool {
    if text.len() > MAX_EMAIL_LENGTH || !EMAIL_REGEX.is_match(text) {
        return false;
    }
    text.split_once('@')
        .is_some_and(|(local, _)| local.len() <= MAX_LOCAL_PART)
}

/// `email[no_hostname_check]`.
///
/// Syntax and hostname are independent checks and each records its own
/// failure. The hostname is the text after the first `@` (up to any second
/// `@`), and it is looked up even when the syntax check failed.
pub(crate) fn evaluate_email(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    params: &RuleParams,
) -> bool {
    let text = value.as_text();
    let mut passed = true;

    if !is_email(&text) {
        ctx.fail(field, "Email bad formatted");
        passed = false;
    }

    let check_hostname = match params {
        RuleParams::Email { check_hostname } => *check_hostname,
        _ => true,
    };
    if check_hostname && ctx.check_email_hostnames() {
        if let Some(domain) = text.split('@').nth(1) {
            if !ctx.mx_resolver().has_mx(domain) {
                ctx.fail(field, "Email hostname don't exist");
                passed = false;
            }
        }
    }

    passed
}
