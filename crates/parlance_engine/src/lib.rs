//! Typed argument resolution for declarative command syntaxes.
//!
//! This crate decides which of a command's declared argument patterns a
//! user's free-form input satisfies, and coerces the matched tokens into
//! strongly typed, validated values.
//!
//! # Architecture
//!
//! ```text
//! "roll 3 20 for initiative"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  INVOCATION     │  → ["roll"? no: command lookup is external]
//! │  SPLITTING      │  → ["3", "20", "for", "initiative"] + byte offsets
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CLASSIFICATION  │  → [Integer, Integer, Text, Text]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN         │  → first pattern whose groups consume every token
//! │ MATCHING        │    (greedy repetition, trailing text capture)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VALUE           │  → count=3, sides=20, comment="for initiative"
//! │ BINDING         │    (coercion, rounding, bounds, allowed sets)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESOLVED CALL   │  → typed accessors with default fallback
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`argument`] - Argument slot declarations and validation rules
//! - [`classify`] - Provisional data-kind tagging of raw tokens
//! - [`invocation`] - Whitespace splitting with original-spacing recovery
//! - [`pattern`] - Pattern and pattern-group model
//! - [`matcher`] - Greedy backtracking matcher
//! - [`binder`] - Value coercion and validation
//! - [`command`] - Command definitions, validated at construction
//! - [`resolver`] - Pattern resolution and the resolved-call accessors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod argument;
pub mod binder;
pub mod classify;
pub mod command;
pub mod invocation;
pub mod matcher;
pub mod pattern;
pub mod resolver;

// Re-export main types for convenience
pub use argument::{ArgumentSpec, Bound};
pub use binder::{ArgValue, BoundValue, ValueBinder};
pub use classify::classify;
pub use command::{CommandDef, GroupDef};
pub use invocation::Invocation;
pub use matcher::Matcher;
pub use pattern::{Pattern, PatternGroup, Slot};
pub use resolver::{ResolvedCall, Resolver};
