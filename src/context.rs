use std::collections::HashMap;
use std::fmt;

use crate::Value;

/// A read-only key/value store from one origin of request data.
pub type Mapping = HashMap<String, Value>;

/// The origin a request value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// URL query parameters.
    Query,
    /// Form body fields.
    Body,
    /// Request cookies.
    Cookie,
    /// Server-side session state.
    Session,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Query => write!(f, "query"),
            Source::Body => write!(f, "body"),
            Source::Cookie => write!(f, "cookie"),
            Source::Session => write!(f, "session"),
        }
    }
}

/// The request-scoped stores a [`Filter`](crate::Filter) reads from.
///
/// A web framework integration fills one `RequestContext` per request and
/// passes it to the source accessors explicitly; nothing is read from
/// global state. Every value inside is untrusted.
///
/// The session store is optional: a request without a session has no
/// session mapping at all, and lookups against it return the default.
///
/// # Examples
///
/// ```
/// use input_filter::{Filter, RequestContext};
///
/// let mut ctx = RequestContext::new();
/// ctx.add_query_param("page", "3");
/// ctx.add_cookie("theme", "dark");
///
/// let filter = Filter::new();
/// assert_eq!(filter.int_query(&ctx, "page", Some(1), None, 1_i64), 3);
/// assert_eq!(filter.int_query(&ctx, "missing", Some(1), None, 1_i64), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    query: Mapping,
    body: Mapping,
    cookies: Mapping,
    session: Option<Mapping>,
}

impl RequestContext {
    /// Creates an empty context with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter.
    pub fn add_query_param(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.query.insert(key.into(), value.into());
    }

    /// Adds a form body field.
    pub fn add_body_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.body.insert(key.into(), value.into());
    }

    /// Adds a cookie.
    pub fn add_cookie(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.cookies.insert(key.into(), value.into());
    }

    /// Replaces the session store. `None` means the request has no session.
    pub fn set_session(&mut self, session: Option<Mapping>) {
        self.session = session;
    }

    /// Adds a session value, starting a session if there is none.
    pub fn add_session_value(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.session
            .get_or_insert_with(Mapping::new)
            .insert(key.into(), value.into());
    }

    /// Returns the query parameters.
    pub fn query(&self) -> &Mapping {
        &self.query
    }

    /// Returns the form body fields.
    pub fn body(&self) -> &Mapping {
        &self.body
    }

    /// Returns the cookies.
    pub fn cookies(&self) -> &Mapping {
        &self.cookies
    }

    /// Returns the session store, if the request has one.
    pub fn session(&self) -> Option<&Mapping> {
        self.session.as_ref()
    }

    /// Returns the store for `source`.
    pub fn mapping(&self, source: Source) -> Option<&Mapping> {
        match source {
            Source::Query => Some(&self.query),
            Source::Body => Some(&self.body),
            Source::Cookie => Some(&self.cookies),
            Source::Session => self.session.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_empty() {
        let ctx = RequestContext::new();

        assert!(ctx.query().is_empty());
        assert!(ctx.body().is_empty());
        assert!(ctx.cookies().is_empty());
        assert!(ctx.session().is_none());
    }

    #[test]
    fn each_store_is_separate() {
        let mut ctx = RequestContext::new();
        ctx.add_query_param("k", "q");
        ctx.add_body_field("k", "b");
        ctx.add_cookie("k", "c");
        ctx.add_session_value("k", 4);

        assert_eq!(ctx.query().get("k"), Some(&Value::from("q")));
        assert_eq!(ctx.body().get("k"), Some(&Value::from("b")));
        assert_eq!(ctx.cookies().get("k"), Some(&Value::from("c")));
        assert_eq!(
            ctx.session().and_then(|s| s.get("k")),
            Some(&Value::Int(4))
        );
    }

    #[test]
    fn mapping_selects_by_source() {
        let mut ctx = RequestContext::new();
        ctx.add_cookie("sid", "abc");

        assert!(ctx.mapping(Source::Cookie).is_some_and(|m| m.contains_key("sid")));
        assert!(ctx.mapping(Source::Query).is_some_and(|m| m.is_empty()));
        assert!(ctx.mapping(Source::Session).is_none());
    }

    #[test]
    fn session_can_be_cleared() {
        let mut ctx = RequestContext::new();
        ctx.add_session_value("user", 1);
        assert!(ctx.session().is_some());

        ctx.set_session(None);
        assert!(ctx.session().is_none());
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let mut ctx = RequestContext::new();
        ctx.add_query_param("page", "1");
        ctx.add_query_param("page", "2");

        assert_eq!(ctx.query().get("page"), Some(&Value::from("2")));
    }

    #[test]
    fn source_display() {
        assert_eq!(Source::Query.to_string(), "query");
        assert_eq!(Source::Body.to_string(), "body");
        assert_eq!(Source::Cookie.to_string(), "cookie");
        assert_eq!(Source::Session.to_string(), "session");
    }
}
