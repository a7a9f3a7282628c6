//! MX record lookups for the email rule.
//!
//! The email evaluator only needs a yes/no answer for "does this domain have
//! an MX record". [`MxResolver`] is the seam; [`SystemMxResolver`] answers it
//! with a blocking query against the host's configured name servers and
//! [`StaticMxResolver`] answers from a fixed list.

use hickory_resolver::Resolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

/// A source of MX record answers.
pub trait MxResolver {
    /// Whether `domain` has at least one MX record. Lookup errors count as no.
    fn has_mx(&self, domain: &str) -> bool;
}

impl<R> MxResolver for Box<R>
where
    R: MxResolver + ?Sized,
{
    fn has_mx(&self, domain: &str) -> bool {
        (**self).has_mx(domain)
    }
}

/// Resolver backed by the operating system's DNS configuration.
///
/// The underlying resolver is built on first use. Queries block the calling
/// thread and carry no timeout beyond the resolver's own defaults.
#[derive(Default)]
pub struct SystemMxResolver {
    inner: OnceLock<Option<Resolver>>,
}

impl SystemMxResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolver(&self) -> Option<&Resolver> {
        self.inner
            .get_or_init(|| match Resolver::from_system_conf() {
                Ok(resolver) => Some(resolver),
                Err(e) => {
                    tracing::warn!(error = %e, "system DNS config unavailable, using defaults");
                    Resolver::new(ResolverConfig::default(), ResolverOpts::default())
                        .map_err(|e| tracing::warn!(error = %e, "failed to build DNS resolver"))
                        .ok()
                }
            })
            .as_ref()
    }
}

impl fmt::Debug for SystemMxResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemMxResolver")
            .field("initialized", &self.inner.get().is_some())
            .finish()
    }
}

impl MxResolver for SystemMxResolver {
    fn has_mx(&self, domain: &str) -> bool {
        if domain.is_empty() {
            return false;
        }
        let Some(resolver) = self.resolver() else {
            return false;
        };

        match resolver.mx_lookup(domain) {
            Ok(lookup) => lookup.iter().next().is_some(),
            Err(e) => {
                if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
                    tracing::debug!(domain, "no MX records");
                } else {
                    tracing::warn!(domain, error = %e, "MX lookup failed");
                }
                false
            }
        }
    }
}

/// Resolver that answers from a fixed set of domains.
///
/// Useful offline and in tests. Matching ignores ASCII case.
#[derive(Debug, Clone, Default)]
pub struct StaticMxResolver {
    domains: HashSet<String>,
}

impl StaticMxResolver {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }
}

impl MxResolver for StaticMxResolver {
    fn has_mx(&self, domain: &str) -> bool {
        self.domains.contains(&domain.to_ascii_lowercase())
    }
}
