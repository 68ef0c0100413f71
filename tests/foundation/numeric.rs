//! Integration tests for significant-figure rounding

use parlance_foundation::numeric::round_sig_figs;

// =============================================================================
// Basic Rounding
// =============================================================================

#[test]
fn rounds_down_to_fewer_figures() {
    assert_eq!(round_sig_figs(1234.0, 2), 1200.0);
    assert_eq!(round_sig_figs(3.14159, 3), 3.14);
}

#[test]
fn rounds_half_away_from_zero_at_the_cut() {
    assert_eq!(round_sig_figs(55555.0, 1), 60000.0);
    assert_eq!(round_sig_figs(0.05, 1), 0.05);
}

#[test]
fn rounds_fractions_below_one() {
    // The leading zeros are not significant.
    assert_eq!(round_sig_figs(0.999999, 2), 1.0);
    assert_eq!(round_sig_figs(0.001234, 2), 0.0012);
}

#[test]
fn preserves_sign() {
    assert_eq!(round_sig_figs(-12.345, 3), -12.3);
    assert_eq!(round_sig_figs(-0.999999, 2), -1.0);
}

// =============================================================================
// Identity Cases
// =============================================================================

#[test]
fn zero_is_untouched() {
    assert_eq!(round_sig_figs(0.0, 3), 0.0);
}

#[test]
fn zero_figures_is_a_no_op() {
    // A zero precision is rejected at definition time; the primitive
    // passes the value through rather than inventing behavior.
    assert_eq!(round_sig_figs(123.456, 0), 123.456);
}

#[test]
fn non_finite_values_pass_through() {
    assert!(round_sig_figs(f64::INFINITY, 3).is_infinite());
    assert!(round_sig_figs(f64::NAN, 3).is_nan());
}

#[test]
fn value_already_at_precision_is_unchanged() {
    assert_eq!(round_sig_figs(1200.0, 2), 1200.0);
    assert_eq!(round_sig_figs(0.25, 2), 0.25);
}

#[test]
fn rounding_is_idempotent() {
    let once = round_sig_figs(9.87654, 3);
    let twice = round_sig_figs(once, 3);
    assert_eq!(once.to_bits(), twice.to_bits());
}
