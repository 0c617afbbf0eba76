use bugbait_lib::value::Value;

/// Render the run report in the requested format
///
/// The text format mirrors the demonstration script's final print line.
///
/// # Errors
///
/// Returns an error if the format is unknown.
pub fn build_output(
    format: &str,
    average: f64,
    upper: &str,
    numbers: &[f64],
    elements: &[Value],
) -> Result<String, String> {
    match format {
        "json" => Ok(serde_json::json!({
            "values": numbers,
            "elements": elements,
            "average": average,
            "first_upper": upper,
        })
        .to_string()),
        "text" => Ok(format!("Results: {average} {upper}")),
        _ => Err(format!("Unknown format '{format}'. Use 'json' or 'text'")),
    }
}
