use thiserror::Error;

/// Errors surfaced by the specimen routines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero: averaged an empty sequence")]
    DivisionByZero,

    #[error("null reference: uppercase called on an absent value")]
    NullReference,

    #[error("uppercase is not supported for {kind} values")]
    UppercaseUnsupported { kind: &'static str },
}
