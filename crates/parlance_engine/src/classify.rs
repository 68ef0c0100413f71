//! Provisional data-kind tagging of raw tokens.
//!
//! Classification only pre-filters candidate patterns; final legality is
//! the binder's call, since a token classified Integer is also valid for
//! a Real slot and a Text slot accepts anything.

use parlance_foundation::ArgKind;

/// Classifies one raw token. Never fails.
///
/// A token is Integer if it parses as a finite float with no fractional
/// part (signs and scientific notation resolving to a whole number both
/// count), else Real if it parses as a float at all, else Boolean if it
/// is `true`/`false` case-insensitively, else Text.
#[must_use]
pub fn classify(token: &str) -> ArgKind {
    if let Ok(value) = token.parse::<f64>() {
        if value.is_finite() && value.fract() == 0.0 {
            return ArgKind::Integer;
        }
        return ArgKind::Real;
    }
    if token.eq_ignore_ascii_case("true") || token.eq_ignore_ascii_case("false") {
        return ArgKind::Boolean;
    }
    ArgKind::Text
}
