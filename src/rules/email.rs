use std::sync::LazyLock;

use regex::Regex;

use crate::{MxResolver, Rejection, RejectionKind, Value};

use super::{require_text, url, RuleResult};

const MAX_LOCAL_LEN: usize = 64;
const MAX_ADDRESS_LEN: usize = 254;

/// Dot-atom local part and a domain of hostname labels.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    ))
    .expect("email pattern is valid")
});

/// Validates an email address, optionally requiring an MX record for its domain.
pub(crate) fn email(
    value: &Value,
    check_mx: bool,
    resolver: &dyn MxResolver,
) -> RuleResult<String> {
    let text = require_text(value)?;

    if text.len() > MAX_ADDRESS_LEN || !EMAIL_PATTERN.is_match(text) {
        return Err(Rejection::new(
            RejectionKind::Malformed,
            "not a valid email address",
        ));
    }

    let Some((local, domain)) = text.rsplit_once('@') else {
        return Err(Rejection::new(RejectionKind::Malformed, "missing domain"));
    };
    if local.len() > MAX_LOCAL_LEN {
        return Err(Rejection::new(
            RejectionKind::Malformed,
            format!("local part exceeds {} characters", MAX_LOCAL_LEN),
        ));
    }

    url::host(domain).map_err(|_| {
        Rejection::new(RejectionKind::Malformed, "domain is not a public host name")
    })?;

    if check_mx && !resolver.has_mx(domain) {
        return Err(Rejection::new(
            RejectionKind::NoMxRecord,
            "domain has no mail exchanger",
        ));
    }

    Ok(text.to_string())
}
