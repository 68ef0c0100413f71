//! Argument kind descriptors.
//!
//! Every argument slot and every classified input token carries one of the
//! four data kinds defined here.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// The data kind of an argument slot or a classified input token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArgKind {
    /// Free text, unconstrained unless an allowed-value set is declared.
    Text,
    /// A `true`/`false` flag.
    Boolean,
    /// A whole number.
    Integer,
    /// A floating-point number.
    Real,
}

impl ArgKind {
    /// Checks whether a token of `token_kind` is acceptable input for a
    /// slot of this kind.
    ///
    /// Text accepts any token. Real also accepts integer literals, since
    /// a whole number is a valid real. Boolean and Integer accept only
    /// their own kind.
    #[must_use]
    pub fn accepts(self, token_kind: ArgKind) -> bool {
        match self {
            Self::Text => true,
            Self::Boolean => token_kind == Self::Boolean,
            Self::Integer => token_kind == Self::Integer,
            Self::Real => matches!(token_kind, Self::Integer | Self::Real),
        }
    }

    /// Returns true for the kinds that carry bounds and precision.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Real)
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Real => "real",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ArgKind {
    type Err = DefinitionError;

    /// Parses the spellings accepted in command definitions.
    ///
    /// Input is trimmed and case-insensitive: `str`/`string`/`text`,
    /// `bool`/`boolean`, `int`/`integer`, `real`/`number`/`dbl`/`double`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "str" | "string" | "text" => Ok(Self::Text),
            "bool" | "boolean" => Ok(Self::Boolean),
            "int" | "integer" => Ok(Self::Integer),
            "real" | "number" | "dbl" | "double" => Ok(Self::Real),
            other => Err(DefinitionError::UnknownKind(other.to_string())),
        }
    }
}
