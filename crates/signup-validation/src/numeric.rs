//! Numeric coercion and range checks

/// Coerces form text to a number.
///
/// Surrounding whitespace is ignored and blank text coerces to `0.0`, so an
/// untouched input reaches the range check instead of failing the type check.
/// Returns `None` for anything that is not a finite decimal number.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    // f64's parser also accepts "inf" and "NaN"; those are not numbers a user typed
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + std::fmt::Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}
