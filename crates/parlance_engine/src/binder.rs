//! Value coercion and validation.
//!
//! Binds a matched raw token to its [`ArgumentSpec`], coercing it to a
//! typed payload and enforcing rounding, bounds, and allowed sets.
//! Numbers are rounded to the spec's precision strictly before bound
//! checks, so a value that looks out of range as typed can become legal
//! once rounded.

use parlance_foundation::numeric::round_sig_figs;
use parlance_foundation::{ArgKind, ValidationError, ValidationReason};

use crate::argument::ArgumentSpec;

/// A typed payload coerced from raw input.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// Free text, verbatim.
    Text(String),
    /// A parsed flag.
    Boolean(bool),
    /// A parsed whole number.
    Integer(i64),
    /// A parsed floating-point number.
    Real(f64),
}

impl ArgValue {
    /// The boolean payload, if this is a Boolean value.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an Integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The numeric payload as a float. Integers promote, since a whole
    /// number is a valid real.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(*r),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

/// A slot's raw token together with its coerced, validated payload.
///
/// Coercion happens eagerly at bind time, so accessors on a resolved call
/// never fail.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundValue {
    slot: String,
    raw: String,
    value: ArgValue,
}

impl BoundValue {
    /// The canonical name of the slot this value was bound to.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// The raw text the user supplied.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The coerced payload.
    #[must_use]
    pub fn value(&self) -> &ArgValue {
        &self.value
    }

    /// Checks whether this value answers to `key` (case-insensitive).
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.slot.eq_ignore_ascii_case(key)
    }
}

/// Coerces and validates raw tokens against argument specs.
pub struct ValueBinder;

impl ValueBinder {
    /// Binds one raw token to its spec.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the slot, the offending text,
    /// and the reason when coercion or validation fails.
    pub fn bind(spec: &ArgumentSpec, raw: &str) -> Result<BoundValue, ValidationError> {
        let value = match spec.kind() {
            ArgKind::Integer => Self::coerce_integer(spec, raw)?,
            ArgKind::Real => Self::coerce_real(spec, raw)?,
            ArgKind::Boolean => Self::coerce_boolean(spec, raw)?,
            ArgKind::Text => Self::coerce_text(spec, raw)?,
        };
        Ok(BoundValue {
            slot: spec.name().to_string(),
            raw: raw.to_string(),
            value,
        })
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn coerce_integer(spec: &ArgumentSpec, raw: &str) -> Result<ArgValue, ValidationError> {
        // Parse through f64 so scientific notation like 2e3 works.
        let parsed: f64 = raw
            .parse()
            .map_err(|_| Self::fail(spec, raw, ValidationReason::NotANumber))?;
        if !parsed.is_finite() || parsed.fract() != 0.0 {
            return Err(Self::fail(spec, raw, ValidationReason::NotAnInteger));
        }
        let rounded = Self::apply_precision(spec, parsed);
        Self::check_bounds(spec, raw, rounded)?;
        if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
            return Err(Self::fail(spec, raw, ValidationReason::NotAnInteger));
        }
        Ok(ArgValue::Integer(rounded as i64))
    }

    fn coerce_real(spec: &ArgumentSpec, raw: &str) -> Result<ArgValue, ValidationError> {
        let parsed: f64 = raw
            .parse()
            .map_err(|_| Self::fail(spec, raw, ValidationReason::NotANumber))?;
        let rounded = Self::apply_precision(spec, parsed);
        Self::check_bounds(spec, raw, rounded)?;
        Ok(ArgValue::Real(rounded))
    }

    /// Strict boolean parse: exactly `true` or `false`, case-insensitive.
    /// Anything else is a validation failure rather than a silent `false`.
    fn coerce_boolean(spec: &ArgumentSpec, raw: &str) -> Result<ArgValue, ValidationError> {
        if raw.eq_ignore_ascii_case("true") {
            Ok(ArgValue::Boolean(true))
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(ArgValue::Boolean(false))
        } else {
            Err(Self::fail(spec, raw, ValidationReason::NotABoolean))
        }
    }

    fn coerce_text(spec: &ArgumentSpec, raw: &str) -> Result<ArgValue, ValidationError> {
        if let Some(allowed) = spec.allowed() {
            // Membership is case-sensitive and exact.
            if !allowed.iter().any(|option| option == raw) {
                return Err(Self::fail(
                    spec,
                    raw,
                    ValidationReason::NotInAllowedSet {
                        allowed: allowed.to_vec(),
                    },
                ));
            }
        }
        Ok(ArgValue::Text(raw.to_string()))
    }

    fn apply_precision(spec: &ArgumentSpec, value: f64) -> f64 {
        match spec.precision() {
            Some(figures) => round_sig_figs(value, figures),
            None => value,
        }
    }

    fn check_bounds(spec: &ArgumentSpec, raw: &str, value: f64) -> Result<(), ValidationError> {
        if let Some(floor) = spec.floor() {
            let ok = if floor.inclusive {
                value >= floor.value
            } else {
                value > floor.value
            };
            if !ok {
                return Err(Self::fail(
                    spec,
                    raw,
                    ValidationReason::BelowFloor {
                        bound: floor.value,
                        inclusive: floor.inclusive,
                    },
                ));
            }
        }
        if let Some(ceiling) = spec.ceiling() {
            let ok = if ceiling.inclusive {
                value <= ceiling.value
            } else {
                value < ceiling.value
            };
            if !ok {
                return Err(Self::fail(
                    spec,
                    raw,
                    ValidationReason::AboveCeiling {
                        bound: ceiling.value,
                        inclusive: ceiling.inclusive,
                    },
                ));
            }
        }
        Ok(())
    }

    fn fail(spec: &ArgumentSpec, raw: &str, reason: ValidationReason) -> ValidationError {
        ValidationError::new(spec.name(), raw, reason)
    }
}
