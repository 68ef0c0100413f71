//! Parlance - Typed argument resolution for text commands
//!
//! This crate re-exports both layers of the Parlance system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: parlance_engine     — Patterns, matching, binding, resolution
//! Layer 0: parlance_foundation — Core types (ArgKind, errors, rounding)
//! ```

pub use parlance_engine as engine;
pub use parlance_foundation as foundation;
