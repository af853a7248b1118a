//! Token coercion for feed columns
//!
//! A token that does not parse as the expected kind of number is absent. That
//! covers the provider's `MM` placeholder, empty tokens and stray text alike.
//! Numeric sentinels such as `99.0` or `999` are real numbers and stay present.

/// Coerce a token to an integer
pub fn coerce_int(token: &str) -> Option<i32> {
    token.trim().parse::<i32>().ok()
}

/// Coerce a token to a real number. `NaN` and infinities are absent.
pub fn coerce_real(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
