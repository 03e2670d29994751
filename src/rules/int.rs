use crate::{Rejection, RejectionKind, Value};

use super::RuleResult;

// i64::MAX rounds up to 2^63 as f64, so the upper check is exclusive.
const FLOAT_UPPER: f64 = 9_223_372_036_854_775_808.0;
const FLOAT_LOWER: f64 = -9_223_372_036_854_775_808.0;

/// Validates a strict base-10 integer and checks it against optional bounds.
pub(crate) fn integer(value: &Value, min: Option<i64>, max: Option<i64>) -> RuleResult<i64> {
    let parsed = match value {
        Value::Int(i) => *i,
        Value::Float(f) => from_float(*f)?,
        Value::Str(s) => parse_strict(s)?,
        Value::Absent => {
            return Err(Rejection::new(RejectionKind::NotAnInteger, "no value"));
        }
    };

    if let Some(min) = min {
        if parsed < min {
            return Err(Rejection::new(
                RejectionKind::OutOfRange,
                format!("below minimum {}", min),
            ));
        }
    }
    if let Some(max) = max {
        if parsed > max {
            return Err(Rejection::new(
                RejectionKind::OutOfRange,
                format!("above maximum {}", max),
            ));
        }
    }

    Ok(parsed)
}

fn from_float(f: f64) -> RuleResult<i64> {
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(Rejection::new(
            RejectionKind::NotAnInteger,
            "number has a fractional part",
        ));
    }
    if !(FLOAT_LOWER..FLOAT_UPPER).contains(&f) {
        return Err(Rejection::new(
            RejectionKind::NotAnInteger,
            "number exceeds the 64-bit range",
        ));
    }
    Ok(f as i64)
}

/// Accepts `[+-]?(0|[1-9][0-9]*)` surrounded by optional ASCII whitespace.
fn parse_strict(raw: &str) -> RuleResult<i64> {
    let s = raw.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::new(
            RejectionKind::NotAnInteger,
            "text is not a base-10 integer",
        ));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(Rejection::new(
            RejectionKind::NotAnInteger,
            "leading zeros are not allowed",
        ));
    }

    s.parse::<i64>().map_err(|_| {
        Rejection::new(
            RejectionKind::NotAnInteger,
            "number exceeds the 64-bit range",
        )
    })
}
