//! Integration tests for Layer 0: Foundation
//!
//! Tests for argument kinds, significant-figure rounding, and the error
//! taxonomy.

mod errors;
mod numeric;
