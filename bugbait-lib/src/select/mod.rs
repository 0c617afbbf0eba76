use serde::Serialize;
use crate::error::EvalError;
use crate::value::{Uppercase, Value};

/// Head of an element sequence, or the absent placeholder when there is none
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Selected {
    Element(Value),
    Absent,
}

impl Selected {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Selected::Absent)
    }
}

impl Uppercase for Selected {
    fn uppercase(&self) -> Result<String, EvalError> {
        match self {
            Selected::Element(value) => value.uppercase(),
            Selected::Absent => Err(EvalError::NullReference),
        }
    }
}

/// Select the head element of a sequence
#[must_use]
pub fn select_first(data: &[Value]) -> Selected {
    data.first()
        .map_or(Selected::Absent, |value| Selected::Element(value.clone()))
}

/// Uppercase the head element of a sequence
///
/// The head is assumed present and text. The absent placeholder is still
/// handed to the uppercase operation, so an empty sequence fails there
/// instead of propagating the absent result.
///
/// # Errors
///
/// Returns `EvalError::NullReference` when the sequence is empty, or
/// `EvalError::UppercaseUnsupported` when the head is not text.
pub fn process_data(data: &[Value]) -> Result<String, EvalError> {
    let first = select_first(data);
    first.uppercase()
}
