//! Integration tests for command definition
//!
//! A command that survives construction must be safe to resolve against
//! forever; everything malformed has to fail here.

use parlance_engine::{ArgumentSpec, Bound, CommandDef, GroupDef};
use parlance_foundation::{ArgKind, DefinitionError};

// =============================================================================
// Well-Formed Definitions
// =============================================================================

#[test]
fn full_featured_command_builds() {
    let command = CommandDef::new(
        "roll",
        vec![
            ArgumentSpec::new("count", ArgKind::Integer)
                .with_floor(Bound::inclusive(1.0))
                .with_ceiling(Bound::inclusive(100.0))
                .with_default("1"),
            ArgumentSpec::new("sides", ArgKind::Integer).with_floor(Bound::inclusive(2.0)),
            ArgumentSpec::new("comment", ArgKind::Text),
        ],
        vec![
            vec![GroupDef::slot("sides")],
            vec![GroupDef::slot("count"), GroupDef::slot("sides")],
            vec![
                GroupDef::slot("count"),
                GroupDef::slot("sides"),
                GroupDef::slot("comment"),
            ],
        ],
    )
    .unwrap();

    assert_eq!(command.name(), "roll");
    assert_eq!(command.arguments().len(), 3);
    assert_eq!(command.patterns().len(), 3);
}

#[test]
fn pattern_renders_for_help_text() {
    let command = CommandDef::new(
        "sum",
        vec![ArgumentSpec::new("term", ArgKind::Real)],
        vec![vec![GroupDef::new(["term"], 8)]],
    )
    .unwrap();
    assert_eq!(command.patterns()[0].to_string(), "{[term] x8}");
}

#[test]
fn argument_lookup_ignores_case() {
    let command = CommandDef::new(
        "roll",
        vec![ArgumentSpec::new("Sides", ArgKind::Integer)],
        vec![vec![GroupDef::slot("sides")]],
    )
    .unwrap();
    assert!(command.argument("SIDES").is_some());
    assert!(command.argument("faces").is_none());
}

// =============================================================================
// Malformed Definitions
// =============================================================================

#[test]
fn rejects_bounds_on_text_argument() {
    let err = CommandDef::new(
        "say",
        vec![ArgumentSpec::new("message", ArgKind::Text).with_ceiling(Bound::inclusive(5.0))],
        vec![],
    )
    .unwrap_err();
    assert!(matches!(err, DefinitionError::BoundsOnNonNumeric { name, kind }
        if name == "message" && kind == ArgKind::Text));
}

#[test]
fn rejects_precision_on_boolean_argument() {
    let err = CommandDef::new(
        "toggle",
        vec![ArgumentSpec::new("state", ArgKind::Boolean).with_precision(3)],
        vec![],
    )
    .unwrap_err();
    assert!(matches!(err, DefinitionError::PrecisionOnNonNumeric { .. }));
}

#[test]
fn rejects_inverted_bounds() {
    let err = CommandDef::new(
        "roll",
        vec![
            ArgumentSpec::new("sides", ArgKind::Integer)
                .with_floor(Bound::inclusive(20.0))
                .with_ceiling(Bound::inclusive(2.0)),
        ],
        vec![],
    )
    .unwrap_err();
    assert!(matches!(err, DefinitionError::InvertedBounds { floor, ceiling, .. }
        if floor == 20.0 && ceiling == 2.0));
}

#[test]
fn rejects_default_that_fails_its_own_rules() {
    let err = CommandDef::new(
        "roll",
        vec![
            ArgumentSpec::new("sides", ArgKind::Integer)
                .with_floor(Bound::inclusive(2.0))
                .with_default("1"),
        ],
        vec![],
    )
    .unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidDefault { raw, .. } if raw == "1"));
}

#[test]
fn rejects_pattern_naming_an_undeclared_argument() {
    let err = CommandDef::new(
        "roll",
        vec![ArgumentSpec::new("sides", ArgKind::Integer)],
        vec![vec![GroupDef::slot("sides")], vec![GroupDef::slot("count")]],
    )
    .unwrap_err();
    assert_eq!(err, DefinitionError::UnknownArgument("count".to_string()));
}
