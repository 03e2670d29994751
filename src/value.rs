use std::fmt;

/// An untrusted scalar handed to a [`Filter`](crate::Filter).
///
/// Request data arrives with no static type: a query parameter is text, a
/// session entry may be a number, a lookup may find nothing at all. `Value`
/// makes each of those cases explicit so every validator can state how it
/// coerces them.
///
/// # Examples
///
/// ```
/// use input_filter::Value;
///
/// assert_eq!(Value::from(7), Value::Int(7));
/// assert_eq!(Value::from("7"), Value::Str("7".to_string()));
/// assert_eq!(Value::from(None::<i64>), Value::Absent);
/// ```
#[derive(Clone, PartialEq, Default)]
pub enum Value {
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// Text, usually straight from a request.
    Str(String),
    /// Nothing was supplied.
    #[default]
    Absent,
}

impl Value {
    /// Returns `true` for [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Borrows the text of a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value as text.
    ///
    /// Integers use their decimal form, floats their shortest decimal form
    /// (`1.0` becomes `"1"`), and an absent value becomes the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
            Value::Absent => String::new(),
        }
    }
}

// Debug prints the kind and length only; values are untrusted and may end up in logs.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => write!(f, "Str(<{} chars>)", s.chars().count()),
            Value::Absent => write!(f, "Absent"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}
