use std::fmt;

/// Why a value was turned away by a validation rule.
///
/// Rules produce a `Rejection`; the public [`Filter`](crate::Filter) methods
/// log it and hand back the caller's default instead. The message never
/// contains the rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rejection {
    kind: RejectionKind,
    message: String,
}

impl Rejection {
    /// Creates a new rejection.
    pub(crate) fn new(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the rejection kind.
    pub(crate) fn kind(&self) -> RejectionKind {
        self.kind
    }

    /// Returns the rejection message.
    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejected ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for Rejection {}

/// Kind of rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RejectionKind {
    /// The value is not a strict base-10 integer.
    NotAnInteger,
    /// The integer lies outside the requested bounds.
    OutOfRange,
    /// The text is shorter than the minimum length.
    TooShort,
    /// The text is longer than the maximum length.
    TooLong,
    /// The text does not match the expected format.
    Malformed,
    /// The value has a type the rule cannot coerce.
    WrongType,
    /// The address lies in a private range.
    PrivateRange,
    /// The address lies in a reserved range.
    ReservedRange,
    /// The mail domain has no MX record.
    NoMxRecord,
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger => write!(f, "not an integer"),
            Self::OutOfRange => write!(f, "out of range"),
            Self::TooShort => write!(f, "too short"),
            Self::TooLong => write!(f, "too long"),
            Self::Malformed => write!(f, "malformed"),
            Self::WrongType => write!(f, "wrong type"),
            Self::PrivateRange => write!(f, "private range"),
            Self::ReservedRange => write!(f, "reserved range"),
            Self::NoMxRecord => write!(f, "no mx record"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_creation() {
        let rejection = Rejection::new(RejectionKind::OutOfRange, "above 4");

        assert_eq!(rejection.kind(), RejectionKind::OutOfRange);
        assert_eq!(rejection.message(), "above 4");
    }

    #[test]
    fn rejection_display_format() {
        let rejection = Rejection::new(RejectionKind::TooLong, "length exceeds 2");
        assert_eq!(rejection.to_string(), "rejected (too long): length exceeds 2");
    }

    #[test]
    fn rejection_display() {
        let rejection = Rejection::new(RejectionKind::PrivateRange, "10.0.0.0/8");

        let output = format!("{}", rejection);
        assert!(output.contains("rejected"));
        assert!(output.contains("private range"));
        assert!(output.contains("10.0.0.0/8"));
    }

    #[test]
    fn kinds_display() {
        assert_eq!(RejectionKind::NotAnInteger.to_string(), "not an integer");
        assert_eq!(RejectionKind::TooShort.to_string(), "too short");
        assert_eq!(RejectionKind::WrongType.to_string(), "wrong type");
        assert_eq!(RejectionKind::ReservedRange.to_string(), "reserved range");
        assert_eq!(RejectionKind::NoMxRecord.to_string(), "no mx record");
    }
}
