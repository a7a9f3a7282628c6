//! Default values for the Config struct.

use crate::evaluators::DEFAULT_DATE_FORMAT;
use crate::validator::DEFAULT_URL_PROTOCOLS;

/// Default URL schemes accepted by the `url` rule.
pub fn default_allowed_url_protocols() -> Vec<String> {
    DEFAULT_URL_PROTOCOLS.iter().map(|p| p.to_string()).collect()
}

pub(crate) fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
