//! Validation rules.
//!
//! Each rule checks one kind of value and reports failure as a
//! [`Rejection`]. The public [`Filter`](crate::Filter) turns a rejection into
//! the caller's default; rules never see the default themselves.

pub(crate) mod email;
pub(crate) mod int;
pub(crate) mod ipv4;
pub(crate) mod skype;
pub(crate) mod text;
pub(crate) mod url;

use crate::{Rejection, RejectionKind, Value};

/// Outcome of a single rule.
pub(crate) type RuleResult<T> = Result<T, Rejection>;

/// Borrows the text of a value for rules that only accept strings.
pub(crate) fn require_text(value: &Value) -> RuleResult<&str> {
    value
        .as_str()
        .ok_or_else(|| Rejection::new(RejectionKind::WrongType, "expected text"))
}
