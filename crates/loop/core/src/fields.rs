//! Field presence and numeric parsing helpers.
//!
//! Every helper answers with a definite value or `None`. Required fields turn
//! `None` into an error at the call site, optional fields fall back to a
//! default.

/// Return the value unchanged if it contains anything besides whitespace.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a finite, strictly positive decimal number.
pub fn positive_number(value: Option<&str>) -> Option<f64> {
    let parsed: f64 = non_empty(value)?.trim().parse().ok()?;
    (parsed.is_finite() && parsed > 0.0).then_some(parsed)
}

/// Parse a strictly positive whole number, truncating any fraction.
pub fn positive_integer(value: Option<&str>) -> Option<u64> {
    let text = non_empty(value)?.trim();
    let parsed = match text.parse::<i64>() {
        Ok(whole) => whole as f64,
        Err(_) => text.parse::<f64>().ok()?.trunc(),
    };
    (parsed.is_finite() && parsed >= 1.0).then_some(parsed as u64)
}
