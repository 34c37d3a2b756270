//! Result formatting

/// Format a result so it can be shown and typed back as an operand.
///
/// Uses the shortest decimal that round-trips (`14`, `2.5`). `f64`'s
/// `Display` never emits exponent notation, which the tokenizer does not
/// accept. Negative zero is shown as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
