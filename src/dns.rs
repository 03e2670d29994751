use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use std::thread;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::Resolver;

/// Answers whether a mail domain publishes an MX record.
///
/// [`Filter::email`](crate::Filter::email) consults the configured resolver
/// only when the caller asks for an MX check. Implementations treat every
/// lookup failure, including timeouts, as "no record".
///
/// # Examples
///
/// ```
/// use input_filter::{Filter, MxResolver};
///
/// struct Everything;
///
/// impl MxResolver for Everything {
///     fn has_mx(&self, _domain: &str) -> bool {
///         true
///     }
/// }
///
/// let filter = Filter::builder().mx_resolver(Everything).build();
/// assert_eq!(
///     filter.email("a@example.com", None::<String>, true),
///     Some("a@example.com".to_string())
/// );
/// ```
pub trait MxResolver: Send + Sync {
    /// Returns `true` if `domain` has at least one MX record.
    fn has_mx(&self, domain: &str) -> bool;
}

/// Blocking MX lookups through the system resolver configuration.
///
/// The configuration is read on first use from `/etc/resolv.conf` (or the
/// platform equivalent). If it cannot be read, every lookup reports no
/// record.
///
/// Each lookup blocks the calling thread. The blocking resolver drives a
/// runtime of its own, so it is built, used and dropped on a short-lived
/// helper thread. Calling this from inside an async runtime is safe, though
/// it still stalls that worker until the lookup finishes.
pub struct SystemMxResolver {
    config: OnceLock<Option<(ResolverConfig, ResolverOpts)>>,
}

impl SystemMxResolver {
    /// Creates a resolver that reads the system configuration lazily.
    pub fn new() -> Self {
        Self {
            config: OnceLock::new(),
        }
    }

    fn config(&self) -> Option<&(ResolverConfig, ResolverOpts)> {
        self.config
            .get_or_init(|| match read_system_conf() {
                Ok(config) => Some(config),
                Err(error) => {
                    tracing::warn!(%error, "system resolver unavailable, mx checks will fail");
                    None
                }
            })
            .as_ref()
    }
}

impl Default for SystemMxResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SystemMxResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemMxResolver")
            .field("initialized", &self.config.get().is_some())
            .finish()
    }
}

impl MxResolver for SystemMxResolver {
    fn has_mx(&self, domain: &str) -> bool {
        let Some((config, options)) = self.config() else {
            return false;
        };

        // Trailing dot keeps the search list out of the query.
        let fqdn = format!("{}.", domain.trim_end_matches('.'));
        let outcome = thread::scope(|scope| {
            scope
                .spawn(|| lookup_mx(config, options, &fqdn))
                .join()
        });

        outcome.unwrap_or_else(|_| {
            tracing::warn!("mx lookup thread panicked");
            false
        })
    }
}

/// Runs one MX query. Must not run on a thread inside a tokio runtime.
fn lookup_mx(config: &ResolverConfig, options: &ResolverOpts, fqdn: &str) -> bool {
    let resolver = match Resolver::new(config.clone(), options.clone()) {
        Ok(resolver) => resolver,
        Err(error) => {
            tracing::warn!(%error, "could not build resolver");
            return false;
        }
    };

    match resolver.mx_lookup(fqdn) {
        Ok(lookup) => lookup.iter().next().is_some(),
        Err(error) => {
            tracing::debug!(%error, "mx lookup failed");
            false
        }
    }
}

/// Answers MX queries from a fixed set of domains.
///
/// Useful for tests and for deployments that keep an allowlist of mail
/// domains instead of querying DNS. Matching ignores ASCII case.
///
/// # Examples
///
/// ```
/// use input_filter::{MxResolver, StaticMxResolver};
///
/// let resolver = StaticMxResolver::new(["example.com"]);
/// assert!(resolver.has_mx("Example.COM"));
/// assert!(!resolver.has_mx("example.org"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticMxResolver {
    domains: HashSet<String>,
}

impl StaticMxResolver {
    /// Creates a resolver that knows exactly `domains`.
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

    /// Creates a resolver that knows no domains.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl MxResolver for StaticMxResolver {
    fn has_mx(&self, domain: &str) -> bool {
        self.domains.contains(&domain.to_ascii_lowercase())
    }
}
