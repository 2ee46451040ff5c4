//! Execution engine for fractional differencing.
//!
//! ## Purpose
//!
//! This module provides the execution engine that applies a fractional
//! difference (or integration) to a series: it generates the weight sequence
//! for the series length and performs the causal, backward-looking
//! convolution that produces the transformed series.
//!
//! ## Design notes
//!
//! * The convolution inner loop is a dot product between a suffix of the
//!   series and a prefix of the weight sequence, dispatched through
//!   [`FloatDot`] so `f32`/`f64` take the SIMD path.
//! * The inner loop is bounded by both the remaining data and the generated
//!   weight count, so truncated weight sequences cost proportionally less.
//! * Complexity is O(n) for weight generation and O(n * w) for convolution,
//!   where `w` is the surviving weight count (O(n²) with no truncation).
//!
//! ## Key concepts
//!
//! * **Causal convolution**: `output[i]` combines the observation at `i`
//!   with progressively older observations (`i+1`, `i+2`, ...), pairing
//!   them with weights `0`, `1`, `2`, ... respectively.
//! * **Tail truncation**: Positions near the end of the array use however
//!   many terms remain. No zero-padding, no skipping, no error. The last
//!   element always passes through unchanged (`weights[0] == 1`), and the
//!   same truncation pattern in the inverse transform is what makes
//!   difference-then-integrate approximately reconstruct the original.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * `output[len-1] == series[len-1]` for every order.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting (see
//!   `engine::output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::dot::FloatDot;
use crate::math::weights::WeightGenerator;

// ============================================================================
// Executor Output
// ============================================================================

/// Raw output from a fractional differencing run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T: Float> {
    /// Transformed series, same length as the input.
    pub transformed: Vec<T>,

    /// The weight sequence actually applied (meaningful prefix only).
    pub weights: Vec<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Execution engine for the causal fractional-difference convolution.
pub struct FracDiffExecutor;

impl FracDiffExecutor {
    /// Apply the configured transform to a series.
    ///
    /// Weight generation is bounded by the series length; the convolution
    /// then walks each output position and dots the remaining suffix of the
    /// series against the weight prefix of matching length.
    pub fn run<T: FloatDot>(series: &[T], generator: &WeightGenerator<T>) -> ExecutorOutput<T> {
        let len = series.len();
        let weights = generator.generate(len);
        let wcount = weights.len();

        let mut transformed = Vec::with_capacity(len);
        for i in 0..len {
            // Tail truncation: use however many terms are available.
            let take = (len - i).min(wcount);
            transformed.push(T::dot(&series[i..i + take], &weights[..take]));
        }

        ExecutorOutput {
            transformed,
            weights,
        }
    }
}
