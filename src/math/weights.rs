//! Binomial-expansion weight generation for fractional differencing.
//!
//! ## Purpose
//!
//! This module computes the convolution weights of the fractional difference
//! operator `(1 - B)^d`, where `B` is the backshift operator. The weights are
//! the coefficients of the binomial series expansion and are produced by a
//! simple first-order recurrence.
//!
//! ## Design notes
//!
//! * **Recurrence**: `w[0] = 1`, `w[k] = -w[k-1] * (d - k + 1) / k`.
//! * **Truncation**: Generation stops early when a candidate weight falls to
//!   or below a magnitude threshold, or when an explicit weight-count cap is
//!   reached. Both guards are evaluated before the candidate is committed.
//! * **Generics**: Generic over `Float` types; `f32` matches the reference
//!   single-precision behavior, `f64` is recommended for invertibility.
//!
//! ## Key concepts
//!
//! * **Integer orders terminate**: For integer `d` the recurrence reaches an
//!   exact zero (e.g. `d = 1` yields `[1, -1]`), so a zero threshold still
//!   truncates ordinary differencing after two terms.
//! * **Trimmed output**: Only the meaningful prefix is returned; absent tail
//!   weights contribute nothing to the convolution by construction.
//!
//! ## Invariants
//!
//! * The returned sequence is never empty: `weights[0] == 1` always.
//! * Output length never exceeds `length`, nor `cap + 1` when a cap is set.
//!
//! ## Non-goals
//!
//! * This module does not apply the weights (see `engine::executor`).
//! * This module does not validate `d` or the threshold (see
//!   `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Weight Generation
// ============================================================================

/// Compute the binomial-expansion weights of `(1 - B)^d`.
///
/// # Arguments
///
/// * `d` - Fractional differencing order.
/// * `length` - Upper bound on the number of weights (normally the series
///   length). A `length` of zero yields an empty sequence.
/// * `threshold` - Stop once `|w_curr| <= threshold`. A zero threshold stops
///   only on exact zeros, which terminates integer-order sequences.
/// * `max_weights` - Optional cap on the number of weights beyond index 0;
///   `None` means unbounded.
///
/// # Formula
///
/// ```text
/// w[0] = 1
/// w[k] = -w[k-1] * (d - k + 1) / k
/// ```
pub fn binomial_weights<T: Float>(
    d: T,
    length: usize,
    threshold: T,
    max_weights: Option<usize>,
) -> Vec<T> {
    if length == 0 {
        return Vec::new();
    }

    let mut weights = Vec::with_capacity(length);
    weights.push(T::one());

    let mut k: usize = 1;
    while k < length {
        let prev = weights[k - 1];
        let k_t = T::from(k).unwrap();
        let w_curr = -prev * (d - k_t + T::one()) / k_t;

        // Guard 1: magnitude truncation. The candidate is not committed.
        if w_curr.abs() <= threshold {
            break;
        }

        // Guard 2: weight-count cap (weights beyond index 0).
        if let Some(cap) = max_weights {
            if k > cap {
                break;
            }
        }

        weights.push(w_curr);
        k += 1;
    }

    weights
}

// ============================================================================
// Weight Generator
// ============================================================================

/// Configured generator for fractional-difference weight sequences.
///
/// Bundles the order and truncation controls so the execution engine can
/// produce weights for any series length without re-threading parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightGenerator<T: Float> {
    /// Fractional differencing order `d`.
    pub order: T,

    /// Magnitude threshold for early truncation (0 = exact zeros only).
    pub threshold: T,

    /// Optional cap on the number of weights beyond index 0.
    pub max_weights: Option<usize>,
}

impl<T: Float> WeightGenerator<T> {
    /// Create a generator for the given order with the given truncation controls.
    pub fn new(order: T, threshold: T, max_weights: Option<usize>) -> Self {
        Self {
            order,
            threshold,
            max_weights,
        }
    }

    /// Generate the weight sequence for a series of `length` observations.
    #[inline]
    pub fn generate(&self, length: usize) -> Vec<T> {
        binomial_weights(self.order, length, self.threshold, self.max_weights)
    }

    /// Generator for the inverse transform (order negated, same truncation).
    #[inline]
    pub fn inverted(&self) -> Self {
        Self {
            order: -self.order,
            threshold: self.threshold,
            max_weights: self.max_weights,
        }
    }
}
