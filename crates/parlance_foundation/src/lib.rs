//! Core kinds, numeric helpers, and error types for Parlance.
//!
//! This crate provides:
//! - [`ArgKind`] - The closed set of argument data kinds
//! - [`DefinitionError`] - Fatal errors in command declarations
//! - [`ValidationError`] - Recoverable per-token validation failures
//! - [`ResolutionError`] - Terminal failures for one invocation
//! - Significant-figure rounding for numeric arguments

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod kind;
pub mod numeric;

pub use error::{DefinitionError, ResolutionError, ValidationError, ValidationReason};
pub use kind::ArgKind;
