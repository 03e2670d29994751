//! Validation and coercion of untrusted request values.
//!
//! This crate checks primitive values that arrive from outside the program
//! and either returns them cleaned up or falls back to a default the caller
//! chose:
//! - **Validators**: integers, trimmed text, plain text, URLs, email
//!   addresses, IPv4 addresses, Skype names
//! - **Source accessors**: read a key from the query, body, cookie or
//!   session store of a [`RequestContext`], then validate it
//! - **Silent fallback**: malformed input never panics or errors; it yields
//!   the default
//!
//! # Core Types
//!
//! - [`Filter`]: The validator facade
//! - [`Value`]: Untyped scalar input (integer, float, text, or absent)
//! - [`RequestContext`]: Request-scoped key/value stores
//! - [`MxResolver`]: DNS MX lookups used by email validation
//!
//! # Examples
//!
//! ```
//! use input_filter::{Filter, RequestContext};
//!
//! let mut ctx = RequestContext::new();
//! ctx.add_query_param("id", "15");
//! ctx.add_body_field("comment", "  <b>nice</b> post ");
//!
//! let filter = Filter::new();
//!
//! assert_eq!(filter.int_query(&ctx, "id", Some(1), None, None::<i64>), Some(15));
//! assert_eq!(
//!     filter.plain_body(&ctx, "comment", Some(1), Some(200), None::<String>),
//!     Some("nice post".to_string())
//! );
//! assert_eq!(filter.email("not-an-address", "none".to_string(), false), "none");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod dns;
mod error;
mod filter;
mod rules;
mod value;

pub use context::{Mapping, RequestContext, Source};
pub use dns::{MxResolver, StaticMxResolver, SystemMxResolver};
pub(crate) use error::{Rejection, RejectionKind};
pub use filter::{Filter, FilterBuilder};
pub use rules::text::strip_tags;
pub use value::Value;
