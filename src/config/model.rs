//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Validator settings, usually loaded from a `fieldcheck.yaml` file.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schemes the `url` rule accepts (default: `http`, `https`).
    #[serde(default = "default_allowed_url_protocols")]
    pub allowed_url_protocols: Vec<String>,

    /// Whether `email` rules look up MX records for the domain.
    /// When false, every email rule behaves as `email[no_hostname_check]`.
    #[serde(default = "default_true")]
    pub check_email_hostnames: bool,

    /// Format for `date` rules that do not name one (default: `d/m/Y`).
    #[serde(default = "default_date_format")]
    pub default_date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_url_protocols: default_allowed_url_protocols(),
            check_email_hostnames: default_true(),
            default_date_format: default_date_format(),
        }
    }
}
