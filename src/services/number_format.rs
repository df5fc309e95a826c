//! Fixed-decimal rounding for displayed amounts.
//!
//! `format!("{:.N}")` rounds exact ties to even (`0.125` becomes `0.12`).
//! Displayed amounts round ties away from zero instead, so values are
//! rounded here first and formatted afterwards.

/// Rounds `value` to `decimals` places, ties away from zero.
///
/// Values too large to scale are returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Rounds to two decimals, ties away from zero.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Renders `value` with exactly `decimals` places, ties away from zero.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let places = i32::try_from(decimals).unwrap_or(i32::MAX);
    format!("{:.*}", decimals, round_to(value, places))
}
