//! # FracDiff — Fractional Differencing for Rust
//!
//! A fast, `no_std`-compatible implementation of fractional differencing and
//! fractional integration for time series.
//!
//! ## What is fractional differencing?
//!
//! Ordinary differencing (`y[i] = x[i] - x[i+1]`) removes trends from a time
//! series but destroys most of its memory in the process. Fractional
//! differencing generalizes the difference operator `(1 - B)^d` to
//! non-integer orders `d`, removing just enough of the trend to make a series
//! stationary while preserving as much long-range structure as possible. The
//! operator expands into an infinite series of weights
//!
//! ```text
//! w[0] = 1
//! w[k] = -w[k-1] * (d - k + 1) / k
//! ```
//!
//! which decay slowly for fractional `d` and terminate exactly for integer
//! `d` (`d = 1` reduces to ordinary differencing, `d = -1` to cumulative
//! summation). Applying the weights as a causal filter over the series
//! produces the fractionally differenced output; applying them with order
//! `-d` inverts the transform.
//!
//! **Common applications:**
//! - Making financial price series stationary while preserving memory
//! - Long-memory (ARFIMA) time-series modeling
//! - Feature engineering for forecasting models
//!
//! ## Quick Start
//!
//! ```rust
//! use fracdiff_rs::prelude::*;
//!
//! let series = vec![2.0, 1.0, 3.0, 5.0, 6.0, 0.0, -1.0, 2.0, 2.0, 5.0];
//!
//! // Build the model
//! let model = FracDiff::new()
//!     .order(0.5)     // Fractional order d
//!     .build()?;
//!
//! // Apply fractional differencing
//! let result = model.diff(&series)?;
//!
//! println!("{}", result);
//! # Result::<(), FracDiffError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 10
//!   Order: 0.5
//!   Weights used: 10
//!
//! Transformed Data:
//!          Input       Output
//!   -------------------------
//!        2.00000      0.48567
//!        1.00000     -1.61136
//!        3.00000     -0.38721
//!        5.00000      1.82715
//!        6.00000      5.78516
//!        0.00000     -0.07031
//!       -1.00000     -2.56250
//!        2.00000      0.37500
//!        2.00000     -0.50000
//!        5.00000      5.00000
//! ```
//!
//! ## Round-tripping
//!
//! Fractional integration is the inverse transform: the same convolution at
//! order `-d`. Differencing followed by integration reconstructs the series
//! (approximately, since both directions truncate at the series tail; the
//! reconstruction is exact at index 0 and degrades toward the end):
//!
//! ```rust
//! use fracdiff_rs::prelude::*;
//!
//! let series: Vec<f64> = (0..64)
//!     .map(|i| (i as f64 * 0.1).sin() + i as f64 * 0.05)
//!     .collect();
//!
//! let model = FracDiff::new().order(0.35).build()?;
//!
//! let differenced = model.diff(&series)?;
//! let restored = model.integrate(&differenced.y)?;
//!
//! assert!((restored.y[0] - series[0]).abs() < 1e-9);
//! # Result::<(), FracDiffError>::Ok(())
//! ```
//!
//! ## Truncation controls
//!
//! With no truncation the filter is as long as the series and the transform
//! costs O(n²). Two independent controls shorten it:
//!
//! ```rust
//! use fracdiff_rs::prelude::*;
//! # let series = vec![2.0, 1.0, 3.0, 5.0, 6.0, 0.0, -1.0, 2.0, 2.0, 5.0];
//!
//! // Stop generating weights once they decay below 1e-4.
//! let model = FracDiff::new()
//!     .order(0.5)
//!     .threshold(1e-4)
//!     .build()?;
//! let result = model.diff(&series)?;
//!
//! // Or cap the filter at a fixed number of lags.
//! let model = FracDiff::new()
//!     .order(0.5)
//!     .max_weights(3)
//!     .build()?;
//! let result = model.diff(&series)?;
//! assert!(result.windowed);
//! # Result::<(), FracDiffError>::Ok(())
//! ```
//!
//! A capped (windowed) transform applies a fixed-length FIR filter. It is
//! faster on long series but no longer exactly inverted by `integrate`; the
//! result carries a `windowed` flag so downstream code can tell.
//!
//! ## Inspecting weights
//!
//! ```rust
//! use fracdiff_rs::prelude::*;
//!
//! let model = FracDiff::new().order(0.5).return_weights().build()?;
//!
//! // Standalone, for a given series length:
//! let w: Vec<f64> = model.weights(4);
//! assert_eq!(w, vec![1.0, -0.5, -0.125, -0.0625]);
//!
//! // Or attached to a result:
//! let result = model.diff(&[2.0, 1.0, 3.0, 5.0])?;
//! assert_eq!(result.weights.as_deref(), Some(&w[..]));
//! # Result::<(), FracDiffError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter          | Default | Range          | Description                                  |
//! |--------------------|---------|----------------|----------------------------------------------|
//! | **order**          | 0       | finite reals   | Fractional order `d` (0 = identity)          |
//! | **threshold**      | 0       | [0, ∞)         | Stop once a weight's magnitude falls to or below this (0 = exact zeros only) |
//! | **max_weights**    | None    | [1, ∞)         | Cap on weights beyond index 0 (windowed mode)|
//! | **return_weights** | false   | true/false     | Include the weight sequence in results       |
//!
//! ## Result and Error Handling
//!
//! `diff` and `integrate` return `Result<FracDiffResult<T>, FracDiffError>`.
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use fracdiff_rs::prelude::*;
//! # let series = vec![2.0, 1.0, 3.0, 5.0];
//!
//! let model = FracDiff::new().order(0.5).build()?;
//!
//! match model.diff(&series) {
//!     Ok(result) => println!("Transformed: {:?}", result.y),
//!     Err(e) => eprintln!("Transform failed: {}", e),
//! }
//! # Result::<(), FracDiffError>::Ok(())
//! ```
//!
//! Errors are raised before any output is produced: empty input, non-finite
//! input values or parameters, a zero weight cap, a parameter set twice in
//! the builder, or a transform that overflows to a non-finite value.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! fracdiff_rs = { version = "0.1", default-features = false }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Set a `threshold` or `max_weights` to bound the filter length
//!
//! ## References
//!
//! - Hosking, J. R. M. (1981). "Fractional Differencing"
//! - López de Prado, M. (2018). "Advances in Financial Machine Learning", Ch. 5

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the crate-wide error enum.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the binomial-expansion weight recurrence and the SIMD dot-product
// backend used by the convolution inner loop.
mod math;

// Layer 3: Engine - orchestration and execution control.
//
// Contains input validation, weight generation plus the causal convolution,
// and result assembly.
mod engine;

// High-level fluent API for fractional differencing.
//
// Provides the `FracDiff` builder for configuring and running transforms.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard fractional differencing prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use fracdiff_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        FracDiffBuilder as FracDiff, FracDiffError, FracDiffModel, FracDiffResult,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
