//! Error types for the Parlance engine.
//!
//! Uses `thiserror` for ergonomic error definition. The taxonomy follows
//! the three stages of command processing:
//!
//! - [`DefinitionError`] - a malformed declaration, fatal at definition
//!   time; a command that produces one is never registered.
//! - [`ValidationError`] - a matched token that failed coercion or
//!   validation; recoverable, cached by the resolver while it tries the
//!   remaining patterns.
//! - [`ResolutionError`] - the terminal failure for one invocation, either
//!   the first cached validation failure or a generic shape mismatch.
//!
//! A pattern that simply does not match is not an error at all; the
//! matcher reports it as `None`.

use std::fmt;

use thiserror::Error;

use crate::kind::ArgKind;

/// A malformed command declaration.
///
/// These escape immediately and loudly: they indicate a broken definition
/// rather than bad user input, and must prevent the owning command from
/// being registered.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DefinitionError {
    /// A pattern referenced an argument name the command does not declare.
    #[error("pattern references unknown argument '{0}'")]
    UnknownArgument(String),

    /// Two arguments share a name (names are case-insensitive).
    #[error("duplicate argument name '{0}'")]
    DuplicateArgument(String),

    /// An argument kind spelling was not recognized.
    #[error("unknown argument kind '{0}'")]
    UnknownKind(String),

    /// A floor or ceiling was declared on a non-numeric argument.
    #[error("argument '{name}' is {kind} and cannot carry numeric bounds")]
    BoundsOnNonNumeric {
        /// The offending argument.
        name: String,
        /// Its declared kind.
        kind: ArgKind,
    },

    /// A precision was declared on a non-numeric argument.
    #[error("argument '{name}' is {kind} and cannot carry a precision")]
    PrecisionOnNonNumeric {
        /// The offending argument.
        name: String,
        /// Its declared kind.
        kind: ArgKind,
    },

    /// An allowed-value set was declared on a non-text argument.
    #[error("argument '{name}' is {kind} and cannot restrict allowed values")]
    AllowedValuesOnNonText {
        /// The offending argument.
        name: String,
        /// Its declared kind.
        kind: ArgKind,
    },

    /// Both bounds were declared with the floor above the ceiling.
    #[error("argument '{name}' has floor {floor} above ceiling {ceiling}")]
    InvertedBounds {
        /// The offending argument.
        name: String,
        /// The declared floor value.
        floor: f64,
        /// The declared ceiling value.
        ceiling: f64,
    },

    /// A precision of zero significant figures was declared.
    #[error("argument '{name}' requires at least one significant figure")]
    ZeroPrecision {
        /// The offending argument.
        name: String,
    },

    /// A pattern group was declared with no slots.
    #[error("pattern {pattern} contains an empty group")]
    EmptyGroup {
        /// 1-based index of the offending pattern.
        pattern: usize,
    },

    /// A pattern group was declared with a repetition budget of zero.
    #[error("pattern {pattern} contains a group allowing zero repetitions")]
    ZeroRepetitions {
        /// 1-based index of the offending pattern.
        pattern: usize,
    },

    /// A declared default value fails the argument's own validation rules.
    #[error("default value '{raw}' for argument '{name}' is invalid: {source}")]
    InvalidDefault {
        /// The argument carrying the default.
        name: String,
        /// The raw default text as declared.
        raw: String,
        /// Why the default failed validation.
        #[source]
        source: ValidationError,
    },
}

/// A matched token that failed coercion or validation.
///
/// Never escapes the binder directly to the invocation caller; the
/// resolver caches the first one and surfaces it only after every pattern
/// has been exhausted.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("invalid value '{raw}' for argument '{slot}': {reason}")]
pub struct ValidationError {
    /// The slot the token was bound to.
    pub slot: String,
    /// The offending raw text.
    pub raw: String,
    /// Why the token was rejected.
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Creates a validation error for one slot and raw token.
    #[must_use]
    pub fn new(slot: impl Into<String>, raw: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            slot: slot.into(),
            raw: raw.into(),
            reason,
        }
    }
}

/// The reason a token was rejected by validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationReason {
    /// The token does not parse as a number at all.
    NotANumber,
    /// The token parses as a number but is not a representable whole number.
    NotAnInteger,
    /// The token is not `true` or `false` (case-insensitive).
    NotABoolean,
    /// The value falls below the declared floor.
    BelowFloor {
        /// The floor value.
        bound: f64,
        /// Whether the floor itself is legal input.
        inclusive: bool,
    },
    /// The value rises above the declared ceiling.
    AboveCeiling {
        /// The ceiling value.
        bound: f64,
        /// Whether the ceiling itself is legal input.
        inclusive: bool,
    },
    /// The text is not a member of the declared allowed-value set.
    NotInAllowedSet {
        /// The full allowed set, for display.
        allowed: Vec<String>,
    },
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "expected a number"),
            Self::NotAnInteger => write!(f, "expected a whole number"),
            Self::NotABoolean => write!(f, "expected true or false"),
            Self::BelowFloor { bound, inclusive } => {
                let or_equal = if *inclusive { "or equal to " } else { "" };
                write!(f, "must be greater than {or_equal}{bound}")
            }
            Self::AboveCeiling { bound, inclusive } => {
                let or_equal = if *inclusive { "or equal to " } else { "" };
                write!(f, "must be less than {or_equal}{bound}")
            }
            Self::NotInAllowedSet { allowed } => {
                write!(f, "must be one of {}", allowed.join(", "))
            }
        }
    }
}

/// The terminal failure for one invocation.
///
/// Produced by the resolver after every declared pattern has been tried.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ResolutionError {
    /// A pattern matched the input's shape but a value failed validation.
    #[error("pattern {pattern}: {source}")]
    Invalid {
        /// 1-based index of the pattern that matched.
        pattern: usize,
        /// The first validation failure encountered across all patterns.
        #[source]
        source: ValidationError,
    },

    /// No declared pattern accepts the given argument types.
    #[error("the given argument types do not match {}", no_match_phrase(.pattern_count))]
    NoPatternMatched {
        /// How many patterns the command declares.
        pattern_count: usize,
    },
}

/// Grammatical tail for the shape-mismatch message, varying by how many
/// patterns the command declares.
fn no_match_phrase(count: &usize) -> &'static str {
    match count {
        1 => "the command pattern",
        2 => "either of the command's patterns",
        _ => "any of the command's patterns",
    }
}
