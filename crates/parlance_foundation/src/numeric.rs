//! Significant-figure rounding for numeric arguments.
//!
//! Rounding is applied to user input before bound checks, so a value that
//! looks out of range as typed can become legal once rounded.

/// Rounds `value` to `figures` significant figures.
///
/// Zero, non-finite values, and a `figures` of zero pass through
/// unchanged. Rounding an integral value always yields an integral value,
/// since the scale factor is a power of ten.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn round_sig_figs(value: f64, figures: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || figures == 0 {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(figures as i32 - 1 - magnitude);
    if !scale.is_finite() || scale == 0.0 {
        // Scaling under/overflowed; the value is too extreme to round.
        return value;
    }
    (value * scale).round() / scale
}
