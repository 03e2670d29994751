use std::sync::LazyLock;

use regex::Regex;

use crate::{Rejection, RejectionKind, Value};

use super::{require_text, RuleResult};

// A letter, then 5 to 31 letters, digits, or `-_,.`
static SKYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_,.\-]{5,31}$").expect("skype pattern is valid")
});

pub(crate) fn skype(value: &Value) -> RuleResult<String> {
    let text = require_text(value)?;
    if !SKYPE_PATTERN.is_match(text) {
        return Err(Rejection::new(RejectionKind::Malformed, "not a skype name"));
    }
    Ok(text.to_string())
}
