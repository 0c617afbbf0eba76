use bugbait_lib::value::Value;

/// Parse a comma-separated numeric sequence
///
/// An empty or whitespace-only input parses to an empty sequence.
///
/// # Errors
///
/// Returns an error if a token is not a valid number.
pub fn parse_numbers(raw: &str) -> Result<Vec<f64>, String> {
    if raw.trim().is_empty() {
        return Ok(vec![]);
    }
    raw.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|_| format!("Invalid number '{token}'"))
        })
        .collect()
}

/// Parse a comma-separated element sequence
///
/// Numeric tokens become `Value::Number`, everything else `Value::Text`.
#[must_use]
pub fn parse_elements(raw: &str) -> Vec<Value> {
    if raw.trim().is_empty() {
        return vec![];
    }
    raw.split(',')
        .map(|token| {
            let token = token.trim();
            match token.parse::<f64>() {
                Ok(number) => Value::Number(number),
                Err(_) => Value::text(token),
            }
        })
        .collect()
}
