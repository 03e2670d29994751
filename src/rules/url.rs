use std::sync::LazyLock;

use regex::Regex;

use crate::{Rejection, RejectionKind, Value};

use super::{require_text, RuleResult};

/// `http`/`https` URL with a dotted host name.
///
/// Sections in order: scheme, optional `user[:password]@`, host (at least
/// `x.xx`), optional 2 to 5 digit port, path, query, fragment.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| url_pattern(USERINFO));

/// The same grammar with the userinfo section left out.
///
/// Userinfo and query share `?`, `=` and `@`, so some URLs match both with
/// and without userinfo, each time with a different host.
static URL_WITHOUT_USERINFO: LazyLock<Regex> = LazyLock::new(|| url_pattern(""));

const USERINFO: &str = r"(?:[a-z0-9+!*(),;?&=$_.-]+(?::[a-z0-9+!*(),;?&=$_.-]+)?@)?";

fn url_pattern(userinfo: &str) -> Regex {
    let pattern = [
        r"(?i)^https?://",
        userinfo,
        r"(?P<host>(?:[\w_-]+\.)+[\w_-]{2,})",
        r"(?::[0-9]{2,5})?",
        r"(?:/(?:[\w%+$_-]\.?)+)*/?",
        r"(?:\?[a-z+&$_.-][\w;:@/&%=+,$_.-]*)?",
        r"(?:#[a-z_.-][a-z0-9+$_.-]*)?$",
    ]
    .concat();
    Regex::new(&pattern).expect("url pattern is valid")
}

/// Validates an absolute `http` or `https` URL.
pub(crate) fn url(value: &Value) -> RuleResult<String> {
    let text = require_text(value)?;
    check(text)?;
    Ok(text.to_string())
}

/// Validates a bare host name with the same grammar URLs use.
pub(crate) fn host(domain: &str) -> RuleResult<()> {
    check(&format!("http://{}", domain))
}

fn check(text: &str) -> RuleResult<()> {
    if !has_named_host(&URL_PATTERN, text) && !has_named_host(&URL_WITHOUT_USERINFO, text) {
        let reason = if URL_PATTERN.is_match(text) {
            "host is an address literal"
        } else {
            "not an http or https url"
        };
        return Err(Rejection::new(RejectionKind::Malformed, reason));
    }

    Ok(())
}

/// Matches `text` and requires the host to be a name, not a dotted quad.
fn has_named_host(pattern: &Regex, text: &str) -> bool {
    pattern
        .captures(text)
        .and_then(|captures| captures.name("host"))
        .is_some_and(|host| !is_dotted_quad(host.as_str()))
}

fn is_dotted_quad(host: &str) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    labels.len() == 4
        && labels
            .iter()
            .all(|label| !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()))
}
