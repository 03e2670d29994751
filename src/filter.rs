use std::fmt;
use std::sync::Arc;

use crate::context::{Mapping, RequestContext, Source};
use crate::rules::{self, RuleResult};
use crate::{MxResolver, SystemMxResolver, Value};

/// Validates untrusted scalars, falling back to a caller default on failure.
///
/// Every validator takes the raw value, its constraints, and a default. On
/// success it returns the cleaned value converted into the default's type;
/// on any failure it returns the default untouched. No validator panics or
/// returns an error, and an absent value is indistinguishable from an
/// invalid one.
///
/// The default's type is the caller's choice: anything the success type
/// converts into works, so `Option<i64>`, `i64`, `Option<String>` and
/// `String` are all valid defaults.
///
/// # Examples
///
/// ```
/// use input_filter::Filter;
///
/// let filter = Filter::new();
///
/// assert_eq!(filter.int("42", Some(1), Some(100), None::<i64>), Some(42));
/// assert_eq!(filter.int("042", None, None, -1_i64), -1);
/// assert_eq!(filter.str("  hi  ", None, None, None::<String>), Some("hi".to_string()));
/// assert_eq!(filter.url("igrivi.com", None::<String>), None);
/// assert_eq!(
///     filter.ipv4("192.168.1.1", None::<String>, true, false),
///     Some("192.168.1.1".to_string())
/// );
/// ```
#[derive(Clone)]
pub struct Filter {
    mx_resolver: Arc<dyn MxResolver>,
}

impl Filter {
    /// Creates a filter that checks MX records through the system resolver.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a filter.
    pub fn builder() -> FilterBuilder {
        FilterBuilder::default()
    }

    /// Validates an integer.
    ///
    /// Accepts integers, floats with a zero fractional part, and text of the
    /// form `[+-]?(0|[1-9][0-9]*)`. Octal, hex, zero padding and fractions
    /// are rejected. Each supplied bound is inclusive, and `Some(0)` is a
    /// real bound.
    pub fn int<D: From<i64>>(
        &self,
        value: impl Into<Value>,
        min: Option<i64>,
        max: Option<i64>,
        default: D,
    ) -> D {
        settle("int", rules::int::integer(&value.into(), min, max), default)
    }

    /// Validates text length after trimming surrounding whitespace.
    ///
    /// Numbers are rendered as text and an absent value becomes `""`.
    /// Length is counted in Unicode code points. Returns the trimmed text.
    pub fn str<D: From<String>>(
        &self,
        value: impl Into<Value>,
        min_len: Option<usize>,
        max_len: Option<usize>,
        default: D,
    ) -> D {
        settle(
            "str",
            rules::text::string(&value.into(), min_len, max_len),
            default,
        )
    }

    /// Strips markup tags, then validates like [`str`](Self::str).
    pub fn plain<D: From<String>>(
        &self,
        value: impl Into<Value>,
        min_len: Option<usize>,
        max_len: Option<usize>,
        default: D,
    ) -> D {
        settle(
            "plain",
            rules::text::plain(&value.into(), min_len, max_len),
            default,
        )
    }

    /// Validates an absolute `http` or `https` URL with a dotted host name.
    ///
    /// Single-label hosts such as `localhost` and address literals such as
    /// `8.8.8.8` are rejected. The URL is returned unchanged.
    pub fn url<D: From<String>>(&self, value: impl Into<Value>, default: D) -> D {
        settle("url", rules::url::url(&value.into()), default)
    }

    /// Validates an email address.
    ///
    /// The domain must also pass the [`url`](Self::url) host grammar. With
    /// `check_mx`, the configured [`MxResolver`] must report an MX record for
    /// the domain; this call blocks on DNS.
    pub fn email<D: From<String>>(
        &self,
        value: impl Into<Value>,
        default: D,
        check_mx: bool,
    ) -> D {
        settle(
            "email",
            rules::email::email(&value.into(), check_mx, self.mx_resolver.as_ref()),
            default,
        )
    }

    /// Validates a dotted-quad IPv4 address.
    ///
    /// Private and reserved ranges are rejected unless the respective flag
    /// is set. Returns the canonical address text.
    pub fn ipv4<D: From<String>>(
        &self,
        value: impl Into<Value>,
        default: D,
        accept_private: bool,
        accept_reserved: bool,
    ) -> D {
        settle(
            "ipv4",
            rules::ipv4::ipv4(&value.into(), accept_private, accept_reserved),
            default,
        )
    }

    /// Validates a Skype name: a letter followed by 5 to 31 letters, digits,
    /// or `-_,.`.
    pub fn skype<D: From<String>>(&self, value: impl Into<Value>, default: D) -> D {
        settle("skype", rules::skype::skype(&value.into()), default)
    }

    /// Looks up `key` in `mapping`.
    ///
    /// Returns `default` when there is no mapping or it lacks the key.
    pub fn key(
        &self,
        key: &str,
        mapping: Option<&Mapping>,
        default: impl Into<Value>,
    ) -> Value {
        match mapping.and_then(|m| m.get(key)) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Reads `key` from the query parameters.
    pub fn from_query(
        &self,
        ctx: &RequestContext,
        key: &str,
        default: impl Into<Value>,
    ) -> Value {
        self.key(key, ctx.mapping(Source::Query), default)
    }

    /// Reads `key` from the form body.
    pub fn from_body(
        &self,
        ctx: &RequestContext,
        key: &str,
        default: impl Into<Value>,
    ) -> Value {
        self.key(key, ctx.mapping(Source::Body), default)
    }

    /// Reads `key` from the cookies.
    pub fn from_cookies(
        &self,
        ctx: &RequestContext,
        key: &str,
        default: impl Into<Value>,
    ) -> Value {
        self.key(key, ctx.mapping(Source::Cookie), default)
    }

    /// Reads `key` from the session store.
    pub fn from_session(
        &self,
        ctx: &RequestContext,
        key: &str,
        default: impl Into<Value>,
    ) -> Value {
        self.key(key, ctx.mapping(Source::Session), default)
    }

    fn lookup(&self, ctx: &RequestContext, source: Source, key: &str) -> Value {
        self.key(key, ctx.mapping(source), Value::Absent)
    }
}

macro_rules! text_accessors {
    ($validator:ident: $($name:ident => $source:ident),+ $(,)?) => {
        impl Filter {
            $(
                #[doc = concat!(
                    "Reads `key` from the ", stringify!($source),
                    " store and validates it with [`", stringify!($validator),
                    "`](Self::", stringify!($validator), ")."
                )]
                pub fn $name<D: From<String>>(
                    &self,
                    ctx: &RequestContext,
                    key: &str,
                    min_len: Option<usize>,
                    max_len: Option<usize>,
                    default: D,
                ) -> D {
                    let value = self.lookup(ctx, Source::$source, key);
                    self.$validator(value, min_len, max_len, default)
                }
            )+
        }
    };
}

text_accessors!(str:
    str_query => Query,
    str_body => Body,
    str_cookie => Cookie,
    str_session => Session,
);

text_accessors!(plain:
    plain_query => Query,
    plain_body => Body,
    plain_cookie => Cookie,
    plain_session => Session,
);

macro_rules! int_accessors {
    ($($name:ident => $source:ident),+ $(,)?) => {
        impl Filter {
            $(
                #[doc = concat!(
                    "Reads `key` from the ", stringify!($source),
                    " store and validates it with [`int`](Self::int)."
                )]
                pub fn $name<D: From<i64>>(
                    &self,
                    ctx: &RequestContext,
                    key: &str,
                    min: Option<i64>,
                    max: Option<i64>,
                    default: D,
                ) -> D {
                    let value = self.lookup(ctx, Source::$source, key);
                    self.int(value, min, max, default)
                }
            )+
        }
    };
}

int_accessors!(
    int_query => Query,
    int_body => Body,
    int_cookie => Cookie,
    int_session => Session,
);

impl Default for Filter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

/// Builder for [`Filter`].
///
/// # Examples
///
/// ```
/// use input_filter::{Filter, StaticMxResolver};
///
/// let filter = Filter::builder()
///     .mx_resolver(StaticMxResolver::new(["bulinfo.net"]))
///     .build();
///
/// assert_eq!(
///     filter.email("a@bulinfo.net", None::<String>, true),
///     Some("a@bulinfo.net".to_string())
/// );
/// assert_eq!(filter.email("a@example.com", None::<String>, true), None);
/// ```
#[derive(Default)]
pub struct FilterBuilder {
    mx_resolver: Option<Arc<dyn MxResolver>>,
}

impl FilterBuilder {
    /// Sets the resolver used by MX checks in [`Filter::email`].
    pub fn mx_resolver(mut self, resolver: impl MxResolver + 'static) -> Self {
        self.mx_resolver = Some(Arc::new(resolver));
        self
    }

    /// Builds the filter. Without a resolver, [`SystemMxResolver`] is used.
    pub fn build(self) -> Filter {
        Filter {
            mx_resolver: self
                .mx_resolver
                .unwrap_or_else(|| Arc::new(SystemMxResolver::new())),
        }
    }
}

impl fmt::Debug for FilterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterBuilder")
            .field("custom_mx_resolver", &self.mx_resolver.is_some())
            .finish()
    }
}

/// Returns the rule's value, or the default after logging why it was rejected.
fn settle<T, D: From<T>>(rule: &'static str, outcome: RuleResult<T>, default: D) -> D {
    match outcome {
        Ok(value) => D::from(value),
        Err(rejection) => {
            tracing::debug!(
                rule,
                kind = %rejection.kind(),
                reason = rejection.message(),
                "value rejected, using default"
            );
            default
        }
    }
}
