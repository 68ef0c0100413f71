//! Integration tests for the error taxonomy
//!
//! Exercises the user-facing display strings for definition, validation,
//! and resolution failures.

use parlance_foundation::{
    ArgKind, DefinitionError, ResolutionError, ValidationError, ValidationReason,
};

// =============================================================================
// Definition Errors
// =============================================================================

#[test]
fn unknown_argument_names_the_reference() {
    let err = DefinitionError::UnknownArgument("sides".to_string());
    assert_eq!(err.to_string(), "pattern references unknown argument 'sides'");
}

#[test]
fn bounds_on_non_numeric_names_the_kind() {
    let err = DefinitionError::BoundsOnNonNumeric {
        name: "label".to_string(),
        kind: ArgKind::Text,
    };
    assert_eq!(
        err.to_string(),
        "argument 'label' is text and cannot carry numeric bounds"
    );
}

#[test]
fn invalid_default_chains_the_validation_failure() {
    let err = DefinitionError::InvalidDefault {
        name: "count".to_string(),
        raw: "zero".to_string(),
        source: ValidationError::new("count", "zero", ValidationReason::NotANumber),
    };
    let msg = err.to_string();
    assert!(msg.contains("default value 'zero'"));
    assert!(msg.contains("expected a number"));
}

// =============================================================================
// Validation Errors
// =============================================================================

#[test]
fn validation_error_names_slot_and_raw_text() {
    let err = ValidationError::new("sides", "1.5", ValidationReason::NotAnInteger);
    assert_eq!(
        err.to_string(),
        "invalid value '1.5' for argument 'sides': expected a whole number"
    );
}

#[test]
fn bound_wording_tracks_inclusivity() {
    let at_least = ValidationReason::BelowFloor {
        bound: 1.0,
        inclusive: true,
    };
    assert_eq!(at_least.to_string(), "must be greater than or equal to 1");

    let strictly_below = ValidationReason::AboveCeiling {
        bound: 100.0,
        inclusive: false,
    };
    assert_eq!(strictly_below.to_string(), "must be less than 100");
}

#[test]
fn allowed_set_reason_lists_the_choices() {
    let reason = ValidationReason::NotInAllowedSet {
        allowed: vec!["fast".to_string(), "slow".to_string()],
    };
    assert_eq!(reason.to_string(), "must be one of fast, slow");
}

// =============================================================================
// Resolution Errors
// =============================================================================

#[test]
fn no_match_wording_scales_with_pattern_count() {
    let one = ResolutionError::NoPatternMatched { pattern_count: 1 };
    assert_eq!(
        one.to_string(),
        "the given argument types do not match the command pattern"
    );

    let two = ResolutionError::NoPatternMatched { pattern_count: 2 };
    assert_eq!(
        two.to_string(),
        "the given argument types do not match either of the command's patterns"
    );

    let many = ResolutionError::NoPatternMatched { pattern_count: 7 };
    assert_eq!(
        many.to_string(),
        "the given argument types do not match any of the command's patterns"
    );
}

#[test]
fn invalid_resolution_reports_the_matching_pattern() {
    let err = ResolutionError::Invalid {
        pattern: 3,
        source: ValidationError::new("count", "0", ValidationReason::BelowFloor {
            bound: 1.0,
            inclusive: true,
        }),
    };
    assert_eq!(
        err.to_string(),
        "pattern 3: invalid value '0' for argument 'count': must be greater than or equal to 1"
    );
}
