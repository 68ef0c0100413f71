//! Argument slot declarations.
//!
//! An [`ArgumentSpec`] describes one named slot: its data kind and the
//! validation rules applied to anything bound to it. Specs are built with
//! fluent setters and validated when the owning command is constructed.

use parlance_foundation::{ArgKind, DefinitionError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One end of a numeric range, independently inclusive or exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bound {
    /// The limiting value.
    pub value: f64,
    /// Whether the limit itself is legal input.
    pub inclusive: bool,
}

impl Bound {
    /// A bound whose value is itself legal input.
    #[must_use]
    pub const fn inclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    /// A bound whose value is just outside the legal range.
    #[must_use]
    pub const fn exclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// A named, typed argument slot with its validation rules.
///
/// Names are unique per command and matched case-insensitively. Bounds
/// and precision apply only to numeric kinds; allowed values only to
/// [`ArgKind::Text`]. The owning [`crate::command::CommandDef`] enforces
/// these constraints at definition time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArgumentSpec {
    name: String,
    kind: ArgKind,
    #[cfg_attr(feature = "serde", serde(default))]
    floor: Option<Bound>,
    #[cfg_attr(feature = "serde", serde(default))]
    ceiling: Option<Bound>,
    #[cfg_attr(feature = "serde", serde(default))]
    precision: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    allowed: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default))]
    default: Option<String>,
}

impl ArgumentSpec {
    /// Creates a spec with no constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            kind,
            floor: None,
            ceiling: None,
            precision: None,
            allowed: None,
            default: None,
        }
    }

    /// Sets the smallest legal value.
    #[must_use]
    pub fn with_floor(mut self, floor: Bound) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Sets the largest legal value.
    #[must_use]
    pub fn with_ceiling(mut self, ceiling: Bound) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Sets the maximum significant figures; input is rounded to this
    /// precision before bound checks.
    #[must_use]
    pub fn with_precision(mut self, figures: u32) -> Self {
        self.precision = Some(figures);
        self
    }

    /// Restricts a text argument to an exact (case-sensitive) value set.
    #[must_use]
    pub fn with_allowed(mut self, allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.allowed = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the raw default text substituted when the slot goes unbound.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The slot name as declared.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared data kind.
    #[must_use]
    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    /// The declared floor, if any.
    #[must_use]
    pub fn floor(&self) -> Option<Bound> {
        self.floor
    }

    /// The declared ceiling, if any.
    #[must_use]
    pub fn ceiling(&self) -> Option<Bound> {
        self.ceiling
    }

    /// The declared precision in significant figures, if any.
    #[must_use]
    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// The declared allowed-value set, if any.
    #[must_use]
    pub fn allowed(&self) -> Option<&[String]> {
        self.allowed.as_deref()
    }

    /// The declared raw default text, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Checks whether this spec answers to `key` (case-insensitive).
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key)
    }

    /// Checks the declaration's internal consistency.
    ///
    /// Called once when the owning command is built; violations prevent
    /// the command from being registered at all.
    pub(crate) fn check(&self) -> Result<(), DefinitionError> {
        if !self.kind.is_numeric() {
            if self.floor.is_some() || self.ceiling.is_some() {
                return Err(DefinitionError::BoundsOnNonNumeric {
                    name: self.name.clone(),
                    kind: self.kind,
                });
            }
            if self.precision.is_some() {
                return Err(DefinitionError::PrecisionOnNonNumeric {
                    name: self.name.clone(),
                    kind: self.kind,
                });
            }
        }
        if self.kind != ArgKind::Text && self.allowed.is_some() {
            return Err(DefinitionError::AllowedValuesOnNonText {
                name: self.name.clone(),
                kind: self.kind,
            });
        }
        if self.precision == Some(0) {
            return Err(DefinitionError::ZeroPrecision {
                name: self.name.clone(),
            });
        }
        if let (Some(floor), Some(ceiling)) = (self.floor, self.ceiling) {
            if floor.value > ceiling.value {
                return Err(DefinitionError::InvertedBounds {
                    name: self.name.clone(),
                    floor: floor.value,
                    ceiling: ceiling.value,
                });
            }
        }
        Ok(())
    }
}
