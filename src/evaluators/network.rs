//! `ip` and `url`.

use super::EvalContext;
use crate::rules::{IpParams, RuleParams};
use crate::value::FieldValue;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use url::Url;

/// Separator between a URL scheme and the rest.
const SCHEME_SEPARATOR: &str = "://";

/// Schemes the `url` crate treats as special. These need an authority.
const SPECIAL_SCHEMES: &[&str] = &["http", "https", "ws", "wss", "ftp", "file"];

/// 10/8, 172.16/12, 192.168/16 and fc00::/7.
pub(crate) fn is_private(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => v4.is_private(),
        IpAddr::V6(v6) => (v6.segments()[0] & 0xfe00) == 0xfc00,
    }
}

/// 0/8, 127/8, 169.254/16, 240/4 and ::, ::1, fe80::/10, ::ffff:0:0/96.
pub(crate) fn is_reserved(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => is_reserved_v4(v4),
        IpAddr::V6(v6) => is_reserved_v6(v6),
    }
}

fn is_reserved_v4(addr: &Ipv4Addr) -> bool {
    let [first, ..] = addr.octets();
    first == 0 || first >= 240 || addr.is_loopback() || addr.is_link_local()
}

fn is_reserved_v6(addr: &Ipv6Addr) -> bool {
    addr.is_unspecified()
        || addr.is_loopback()
        || (addr.segments()[0] & 0xffc0) == 0xfe80
        || addr.to_ipv4_mapped().is_some()
}

/// `ip[v4,v6,reject_private]`. Each flag is its own check; with no flags the
/// value only has to be an address of either version.
pub(crate) fn evaluate_ip(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    params: &RuleParams,
) -> bool {
    let flags = match params {
        RuleParams::Ip(flags) => *flags,
        _ => IpParams::default(),
    };
    let addr = value.as_text().parse::<IpAddr>().ok();
    let mut passed = true;

    if flags.v4 && !matches!(addr, Some(IpAddr::V4(_))) {
        ctx.fail(field, "IpV4 not valid");
        passed = false;
    }
    if flags.v6 && !matches!(addr, Some(IpAddr::V6(_))) {
        ctx.fail(field, "IpV6 not valid");
        passed = false;
    }
    if flags.reject_private {
        if addr.as_ref().is_none_or(is_private) {
            ctx.fail(field, "Private ip not allowed");
            passed = false;
        }
        if addr.as_ref().is_none_or(is_reserved) {
            ctx.fail(field, "Reserved ip not allowed");
            passed = false;
        }
    }
    if flags.is_generic() && addr.is_none() {
        ctx.fail(field, "Ip not valid");
        passed = false;
    }

    passed
}

fn is_url(text: &str) -> bool {
    if text.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let Ok(url) = Url::parse(text) else {
        return false;
    };

    // `http:example.com` parses, with the missing slashes filled in.
    !SPECIAL_SCHEMES.contains(&url.scheme())
        || text
            .get(url.scheme().len()..)
            .is_some_and(|rest| rest.starts_with(SCHEME_SEPARATOR))
}

/// `url`. The value must parse as a URL, contain exactly one `://`, and use
/// a scheme from the allowed list. Scheme comparison is case-sensitive.
pub(crate) fn evaluate_url(
    ctx: &mut EvalContext<'_>,
    field: &str,
    value: &FieldValue,
    _params: &RuleParams,
) -> bool {
    let text = value.as_text();
    if !is_url(&text) {
        ctx.fail(field, "Url not valid");
        return false;
    }

    let mut passed = true;
    let parts: Vec<&str> = text.split(SCHEME_SEPARATOR).collect();
    if parts.len() != 2 {
        ctx.fail(field, "Protocol repeated");
        passed = false;
    }

    let scheme = parts[0];
    if !ctx.allowed_url_protocols().iter().any(|p| p == scheme) {
        ctx.fail(field, "Protocol not allowed");
        passed = false;
    }

    passed
}
