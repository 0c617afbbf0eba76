use std::fmt;
use serde::Serialize;
use crate::error::EvalError;

/// Element of a data sequence: a number, a piece of text, or anything else
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Number(f64),
    Text(String),
    Other,
}

impl Value {
    /// Short name for the element's kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Other => "other",
        }
    }

    /// Text element from a raw string
    #[must_use]
    pub fn text(raw: &str) -> Self {
        Value::Text(raw.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Other => write!(f, "<other>"),
        }
    }
}

/// Capability for values that have an uppercase text form
pub trait Uppercase {
    /// Uppercase text form of the value
    ///
    /// # Errors
    ///
    /// Returns an error if the value has no uppercase form.
    fn uppercase(&self) -> Result<String, EvalError>;
}

impl Uppercase for Value {
    fn uppercase(&self) -> Result<String, EvalError> {
        match self {
            Value::Text(s) => Ok(s.to_uppercase()),
            value => Err(EvalError::UppercaseUnsupported { kind: value.kind() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_number() {
        assert_eq!(Value::Number(3.0).kind(), "number");
    }

    #[test]
    fn test_kind_text() {
        assert_eq!(Value::text("abc").kind(), "text");
    }

    #[test]
    fn test_kind_other() {
        assert_eq!(Value::Other.kind(), "other");
    }

    #[test]
    fn test_display_number() {
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Value::text("abc").to_string(), "abc");
    }

    #[test]
    fn test_display_other() {
        assert_eq!(Value::Other.to_string(), "<other>");
    }

    #[test]
    fn test_uppercase_text() {
        assert_eq!(Value::text("abc").uppercase(), Ok("ABC".to_string()));
    }

    #[test]
    fn test_uppercase_preserves_uppercase_input() {
        assert_eq!(Value::text("AbC").uppercase(), Ok("ABC".to_string()));
    }

    #[test]
    fn test_uppercase_number_unsupported() {
        assert_eq!(
            Value::Number(3.0).uppercase(),
            Err(EvalError::UppercaseUnsupported { kind: "number" })
        );
    }

    #[test]
    fn test_uppercase_other_unsupported() {
        assert_eq!(
            Value::Other.uppercase(),
            Err(EvalError::UppercaseUnsupported { kind: "other" })
        );
    }
}
