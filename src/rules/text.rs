use crate::{Rejection, RejectionKind, Value};

use super::RuleResult;

/// Characters removed from both ends of text before measuring it.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trims text and checks its length in code points.
pub(crate) fn string(
    value: &Value,
    min_len: Option<usize>,
    max_len: Option<usize>,
) -> RuleResult<String> {
    let text = value.to_text();
    let trimmed = text.trim_matches(TRIMMED);
    let len = trimmed.chars().count();

    if let Some(min_len) = min_len {
        if len < min_len {
            return Err(Rejection::new(
                RejectionKind::TooShort,
                format!("length is below minimum {}", min_len),
            ));
        }
    }
    if let Some(max_len) = max_len {
        if len > max_len {
            return Err(Rejection::new(
                RejectionKind::TooLong,
                format!("length exceeds maximum {}", max_len),
            ));
        }
    }

    Ok(trimmed.to_string())
}

/// Removes markup, then applies [`string`].
pub(crate) fn plain(
    value: &Value,
    min_len: Option<usize>,
    max_len: Option<usize>,
) -> RuleResult<String> {
    let stripped = Value::Str(strip_tags(&value.to_text()));
    string(&stripped, min_len, max_len)
}

/// Strips markup tags and comments from text.
///
/// A `<` followed by whitespace, or at the very end, is kept as text. Quoted
/// attribute values may contain `>`. An unterminated tag or comment swallows
/// the rest of the input.
///
/// # Examples
///
/// ```
/// use input_filter::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(strip_tags("1 < 2"), "1 < 2");
/// assert_eq!(strip_tags("a<!-- note -->b"), "ab");
/// ```
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        match after.chars().next() {
            None => {
                out.push('<');
                return out;
            }
            Some(c) if c.is_whitespace() => {
                out.push('<');
                rest = after;
                continue;
            }
            Some(_) => {}
        }

        rest = match after.strip_prefix("!--") {
            Some(comment) => comment.find("-->").map_or("", |end| &comment[end + 3..]),
            None => skip_tag(after),
        };
    }

    out.push_str(rest);
    out
}

/// Returns the text following the `>` that closes the tag.
fn skip_tag(tag: &str) -> &str {
    let mut quote: Option<char> = None;
    for (i, c) in tag.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return &tag[i + 1..],
            None => {}
        }
    }
    ""
}
