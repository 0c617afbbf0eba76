use crate::error::EvalError;

/// Divide a running total by a sequence length
///
/// # Errors
///
/// Returns `EvalError::DivisionByZero` when the length is zero.
fn divide_by_len(total: f64, len: usize) -> Result<f64, EvalError> {
    if len == 0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(total / len as f64)
}

/// Arithmetic mean of a numeric sequence
///
/// The sequence is assumed non-empty; an empty sequence fails at the final
/// division rather than being rejected up front.
///
/// # Errors
///
/// Returns `EvalError::DivisionByZero` when the sequence is empty.
pub fn calculate_average(values: &[f64]) -> Result<f64, EvalError> {
    let mut total = 0.0;
    for value in values {
        total += value;
    }
    divide_by_len(total, values.len())
}
