#![cfg(feature = "dev")]
//! Tests for binomial-expansion weight generation.
//!
//! These tests verify the weight recurrence used for fractional differencing:
//! - Recurrence correctness and the leading `w[0] == 1` invariant
//! - Magnitude-threshold truncation
//! - Weight-count caps
//!
//! ## Test Organization
//!
//! 1. **Recurrence** - Exact values against the closed-form recurrence
//! 2. **Truncation** - Threshold and cap guards
//! 3. **Edge Cases** - Integer orders, zero length, degenerate parameters

use approx::assert_relative_eq;

use fracdiff_rs::internals::math::weights::{binomial_weights, WeightGenerator};

// ============================================================================
// Recurrence Tests
// ============================================================================

/// Test that the leading weight is always 1.
#[test]
fn test_leading_weight_is_one() {
    for &d in &[-1.5, -0.5, 0.0, 0.3, 0.5, 1.0, 2.7] {
        let w = binomial_weights(d, 20, 0.0, None);
        assert_eq!(w[0], 1.0, "w[0] must be 1 for d={}", d);
    }
}

/// Test every generated weight against the recurrence.
///
/// w[k] = -w[k-1] * (d - k + 1) / k
#[test]
fn test_recurrence_holds() {
    let d = 0.37;
    let w = binomial_weights(d, 50, 0.0, None);
    assert_eq!(w.len(), 50);
    for k in 1..w.len() {
        let expected = -w[k - 1] * (d - k as f64 + 1.0) / k as f64;
        assert_relative_eq!(w[k], expected);
    }
}

/// Test the known weight values for d = 0.5.
#[test]
fn test_weights_half_order() {
    // w = [1, -0.5, -0.125, -0.0625, ...] (exact binary fractions)
    let w = binomial_weights(0.5, 10, 0.0, None);
    assert_eq!(w[0], 1.0);
    assert_eq!(w[1], -0.5);
    assert_eq!(w[2], -0.125);
    assert_eq!(w[3], -0.0625);
    assert_eq!(w[4], -0.0390625);
}

/// Test that d = 1 terminates at ordinary first differencing.
///
/// w[2] = -w[1] * (1 - 2 + 1) / 2 = 0, which a zero threshold truncates.
#[test]
fn test_integer_order_terminates() {
    let w = binomial_weights(1.0, 100, 0.0, None);
    assert_eq!(w, vec![1.0, -1.0]);
}

/// Test that d = 2 terminates at second differencing.
#[test]
fn test_second_order_terminates() {
    let w = binomial_weights(2.0, 100, 0.0, None);
    assert_eq!(w, vec![1.0, -2.0, 1.0]);
}

/// Test that d = -1 yields all-ones weights (cumulative summation).
#[test]
fn test_negative_unit_order_all_ones() {
    // w[k] = -w[k-1] * (-1 - k + 1) / k = w[k-1]
    let w = binomial_weights(-1.0, 25, 0.0, None);
    assert_eq!(w.len(), 25);
    assert!(w.iter().all(|&wk| wk == 1.0));
}

/// Test that d = 0 yields only the leading weight.
#[test]
fn test_zero_order_identity() {
    // w[1] = -1 * (0 - 1 + 1) / 1 = 0
    let w = binomial_weights(0.0, 100, 0.0, None);
    assert_eq!(w, vec![1.0]);
}

/// Test weight decay for fractional orders in (0, 1).
#[test]
fn test_fractional_weights_decay() {
    let w: Vec<f64> = binomial_weights(0.5, 100, 0.0, None);
    for k in 2..w.len() {
        assert!(
            w[k].abs() < w[k - 1].abs(),
            "weights must decay in magnitude past k=1"
        );
    }
}

// ============================================================================
// Truncation Tests
// ============================================================================

/// Test that the threshold stops generation before committing the candidate.
#[test]
fn test_threshold_truncates() {
    // |w[3]| = 0.0625, so a threshold of 0.0625 keeps w[0..=2] only.
    let w = binomial_weights(0.5, 100, 0.0625, None);
    assert_eq!(w, vec![1.0, -0.5, -0.125]);
}

/// Test that increasing the threshold never increases the weight count.
#[test]
fn test_threshold_monotonicity() {
    let thresholds = [0.0, 1e-6, 1e-4, 1e-2, 0.1];
    let counts: Vec<usize> = thresholds
        .iter()
        .map(|&t| binomial_weights(0.5, 200, t, None).len())
        .collect();
    for pair in counts.windows(2) {
        assert!(pair[0] >= pair[1], "counts must be non-increasing");
    }
}

/// Test that a threshold above |w[1]| degenerates to the identity filter.
#[test]
fn test_large_threshold_identity() {
    let w = binomial_weights(0.5, 100, 0.6, None);
    assert_eq!(w, vec![1.0]);
}

/// Test the weight-count cap: at most cap + 1 entries.
#[test]
fn test_cap_bounds_count() {
    let w = binomial_weights(0.5, 100, 0.0, Some(3));
    assert_eq!(w, vec![1.0, -0.5, -0.125, -0.0625]);
}

/// Test that a cap larger than the natural count has no effect.
#[test]
fn test_cap_larger_than_sequence() {
    let uncapped = binomial_weights(1.0, 100, 0.0, None);
    let capped = binomial_weights(1.0, 100, 0.0, Some(50));
    assert_eq!(uncapped, capped);
}

/// Test that the cap and threshold guards fire independently.
#[test]
fn test_cap_and_threshold_together() {
    // Threshold alone keeps 3 entries; cap alone would keep 6.
    let w = binomial_weights(0.5, 100, 0.0625, Some(5));
    assert_eq!(w.len(), 3);

    // Cap alone keeps 2 entries; threshold alone would keep 3.
    let w = binomial_weights(0.5, 100, 0.0625, Some(1));
    assert_eq!(w.len(), 2);
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Test that generation is bounded by the requested length.
#[test]
fn test_length_bound() {
    let w = binomial_weights(0.5, 7, 0.0, None);
    assert_eq!(w.len(), 7);
}

/// Test zero length yields an empty sequence.
#[test]
fn test_zero_length() {
    let w = binomial_weights(0.5, 0, 0.0, None);
    assert!(w.is_empty());
}

/// Test length 1 yields only the leading weight.
#[test]
fn test_unit_length() {
    let w = binomial_weights(0.5, 1, 0.0, None);
    assert_eq!(w, vec![1.0]);
}

/// Test f32 generation matches the f64 recurrence at low precision.
#[test]
fn test_f32_generation() {
    let w32 = binomial_weights(0.5_f32, 10, 0.0, None);
    let w64 = binomial_weights(0.5_f64, 10, 0.0, None);
    assert_eq!(w32.len(), w64.len());
    for (a, b) in w32.iter().zip(w64.iter()) {
        assert_relative_eq!(*a as f64, *b, max_relative = 1e-6);
    }
}

// ============================================================================
// Generator Tests
// ============================================================================

/// Test that the generator matches the free function.
#[test]
fn test_generator_matches_free_function() {
    let gen = WeightGenerator::new(0.5, 1e-3, Some(20));
    assert_eq!(gen.generate(50), binomial_weights(0.5, 50, 1e-3, Some(20)));
}

/// Test that inversion negates the order and keeps truncation controls.
#[test]
fn test_generator_inverted() {
    let gen = WeightGenerator::new(0.5, 1e-3, Some(20));
    let inv = gen.inverted();
    assert_eq!(inv.order, -0.5);
    assert_eq!(inv.threshold, 1e-3);
    assert_eq!(inv.max_weights, Some(20));
}
