//! Dot-product backend abstraction for the convolution engine.
//!
//! ## Purpose
//!
//! The causal convolution at the heart of fractional differencing reduces to
//! a dot product between a suffix of the series and a prefix of the weight
//! sequence. This module provides a trait-based bridge from generic `Float`
//! types to SIMD-accelerated implementations for `f32` and `f64`.
//!
//! ## Design notes
//!
//! * Generic code stays generic: callers bound on `FloatDot` and never touch
//!   the `wide` vector types directly.
//! * SIMD lanes (`f32x8` / `f64x4`) process the aligned body of the slices;
//!   a scalar loop handles the remainder.
//! * Summation order differs from a naive left-to-right loop (four or eight
//!   partial sums), which is within the tolerance every caller already
//!   accepts for floating-point accumulation.
//!
//! ## Non-goals
//!
//! * This module does not decide slice bounds (see `engine::executor`).
//! * This module does not provide runtime CPU-feature dispatch; `wide`
//!   lowers to the best instructions available at compile time.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x4};

// ============================================================================
// FloatDot Trait
// ============================================================================

/// Helper trait bridging generic `Float` types to the SIMD dot-product kernels.
///
/// The provided method falls back to the scalar loop, so exotic `Float`
/// types can opt in with an empty impl; `f32` and `f64` override it with
/// the SIMD kernels.
pub trait FloatDot: Float {
    /// Compute the dot product of two equal-length slices.
    fn dot(a: &[Self], b: &[Self]) -> Self {
        dot_scalar(a, b)
    }
}

impl FloatDot for f64 {
    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        wide_backend::dot_f64(a, b)
    }
}

impl FloatDot for f32 {
    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        wide_backend::dot_f32(a, b)
    }
}

// ============================================================================
// Scalar Fallback
// ============================================================================

/// Scalar dot product over any `Float` type.
///
/// Reference implementation backing the [`FloatDot`] provided method; also
/// used by tests to cross-check the SIMD kernels.
#[inline]
pub fn dot_scalar<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    let mut sum = T::zero();
    for (&x, &w) in a.iter().zip(b.iter()) {
        sum = sum + x * w;
    }
    sum
}

// ============================================================================
// Wide Backend Implementation
// ============================================================================

/// SIMD dot-product kernels built on the `wide` crate.
pub mod wide_backend {
    use super::*;

    /// Dot product of two `f64` slices using 4-lane SIMD.
    pub fn dot_f64(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        let mut acc = f64x4::splat(0.0);

        let chunks_a = a.chunks_exact(4);
        let chunks_b = b.chunks_exact(4);
        let tail_a = chunks_a.remainder();
        let tail_b = chunks_b.remainder();

        for (ca, cb) in chunks_a.zip(chunks_b) {
            let va = f64x4::from([ca[0], ca[1], ca[2], ca[3]]);
            let vb = f64x4::from([cb[0], cb[1], cb[2], cb[3]]);
            acc += va * vb;
        }

        let mut sum = acc.reduce_add();
        for (&x, &w) in tail_a.iter().zip(tail_b.iter()) {
            sum += x * w;
        }
        sum
    }

    /// Dot product of two `f32` slices using 8-lane SIMD.
    pub fn dot_f32(a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len());
        let mut acc = f32x8::splat(0.0);

        let chunks_a = a.chunks_exact(8);
        let chunks_b = b.chunks_exact(8);
        let tail_a = chunks_a.remainder();
        let tail_b = chunks_b.remainder();

        for (ca, cb) in chunks_a.zip(chunks_b) {
            let va = f32x8::from([ca[0], ca[1], ca[2], ca[3], ca[4], ca[5], ca[6], ca[7]]);
            let vb = f32x8::from([cb[0], cb[1], cb[2], cb[3], cb[4], cb[5], cb[6], cb[7]]);
            acc += va * vb;
        }

        let mut sum = acc.reduce_add();
        for (&x, &w) in tail_a.iter().zip(tail_b.iter()) {
            sum += x * w;
        }
        sum
    }
}
