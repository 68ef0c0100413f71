//! Integration tests for value binding
//!
//! Exercises coercion, precision, bounds, and allowed sets together the
//! way a resolved pattern applies them.

use parlance_engine::{ArgValue, ArgumentSpec, Bound, ValueBinder};
use parlance_foundation::{ArgKind, ValidationReason};

// =============================================================================
// Coercion Pipelines
// =============================================================================

#[test]
fn constrained_integer_pipeline() {
    // Round to two significant figures, then require 1..=100.
    let spec = ArgumentSpec::new("percent", ArgKind::Integer)
        .with_precision(2)
        .with_floor(Bound::inclusive(1.0))
        .with_ceiling(Bound::inclusive(100.0));

    let bound = ValueBinder::bind(&spec, "99").unwrap();
    assert_eq!(bound.value(), &ArgValue::Integer(99));

    // 104 rounds down to 100 and becomes legal.
    let rounded = ValueBinder::bind(&spec, "104").unwrap();
    assert_eq!(rounded.value(), &ArgValue::Integer(100));

    // 105 rounds up to 110 and stays out of range.
    let err = ValueBinder::bind(&spec, "105").unwrap_err();
    assert_eq!(
        err.reason,
        ValidationReason::AboveCeiling {
            bound: 100.0,
            inclusive: true
        }
    );
}

#[test]
fn constrained_real_pipeline() {
    let spec = ArgumentSpec::new("ratio", ArgKind::Real)
        .with_precision(3)
        .with_floor(Bound::exclusive(0.0))
        .with_ceiling(Bound::inclusive(1.0));

    let bound = ValueBinder::bind(&spec, "0.12345").unwrap();
    assert_eq!(bound.value(), &ArgValue::Real(0.123));

    let err = ValueBinder::bind(&spec, "0").unwrap_err();
    assert_eq!(
        err.reason,
        ValidationReason::BelowFloor {
            bound: 0.0,
            inclusive: false
        }
    );
}

#[test]
fn restricted_text_pipeline() {
    let spec = ArgumentSpec::new("stance", ArgKind::Text).with_allowed(["attack", "defend"]);

    let ok = ValueBinder::bind(&spec, "defend").unwrap();
    assert_eq!(ok.value(), &ArgValue::Text("defend".to_string()));
    assert_eq!(ok.raw(), "defend");

    let err = ValueBinder::bind(&spec, "flee").unwrap_err();
    assert_eq!(err.slot, "stance");
    assert_eq!(
        err.reason,
        ValidationReason::NotInAllowedSet {
            allowed: vec!["attack".to_string(), "defend".to_string()]
        }
    );
}

// =============================================================================
// Raw Text Preservation
// =============================================================================

#[test]
fn bound_value_keeps_the_raw_token() {
    let spec = ArgumentSpec::new("count", ArgKind::Integer);
    let bound = ValueBinder::bind(&spec, "2e1").unwrap();
    assert_eq!(bound.raw(), "2e1");
    assert_eq!(bound.value(), &ArgValue::Integer(20));
}

#[test]
fn bound_value_answers_case_insensitively() {
    let spec = ArgumentSpec::new("Count", ArgKind::Integer);
    let bound = ValueBinder::bind(&spec, "1").unwrap();
    assert!(bound.matches("count"));
    assert!(bound.matches("COUNT"));
    assert_eq!(bound.slot(), "Count");
}
