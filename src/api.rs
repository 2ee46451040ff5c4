//! High-level API for fractional differencing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for fractional
//! differencing. It implements a fluent builder pattern for configuring the
//! order and truncation controls, and a model type exposing the forward and
//! inverse transforms.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: All parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `FloatDot` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `FracDiff::new()` → chain setters → `.build()`.
//! * **Model**: [`FracDiffModel`] is immutable after construction; `diff` and
//!   `integrate` can be called any number of times on different series.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// Internal dependencies
use crate::engine::executor::FracDiffExecutor;
use crate::engine::validator::Validator;
use crate::math::dot::FloatDot;
use crate::math::weights::WeightGenerator;

// Publicly re-exported types
pub use crate::engine::output::FracDiffResult;
pub use crate::primitives::errors::FracDiffError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a fractional differencing model.
#[derive(Debug, Clone)]
pub struct FracDiffBuilder<T: FloatDot + Debug> {
    /// Fractional differencing order `d`.
    pub order: Option<T>,

    /// Weight truncation threshold.
    pub threshold: Option<T>,

    /// Cap on the number of weights beyond index 0.
    pub max_weights: Option<usize>,

    /// Include the applied weight sequence in results.
    pub return_weights: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatDot + Debug> Default for FracDiffBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatDot + Debug> FracDiffBuilder<T> {
    /// Create a new builder with default settings.
    ///
    /// Defaults: `order = 0` (identity transform), `threshold = 0` (stop on
    /// exact-zero weights only), no weight-count cap, weights not returned.
    pub fn new() -> Self {
        Self {
            order: None,
            threshold: None,
            max_weights: None,
            return_weights: None,
            duplicate_param: None,
        }
    }

    /// Set the fractional differencing order `d`.
    ///
    /// `d = 1` reduces to ordinary differencing, `d = -1` to ordinary
    /// cumulative summation. Negating the order inverts a prior application.
    pub fn order(mut self, order: T) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Set the weight truncation threshold.
    ///
    /// Weight generation stops once a candidate weight's magnitude falls to
    /// or below the threshold. Zero stops only on exact zeros.
    pub fn threshold(mut self, threshold: T) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Cap the number of weights beyond index 0.
    ///
    /// A capped transform uses a fixed-length filter window, which is faster
    /// on long series but no longer exactly invertible.
    pub fn max_weights(mut self, cap: usize) -> Self {
        if self.max_weights.is_some() {
            self.duplicate_param = Some("max_weights");
        }
        self.max_weights = Some(cap);
        self
    }

    /// Include the applied weight sequence in results.
    pub fn return_weights(mut self) -> Self {
        self.return_weights = Some(true);
        self
    }

    /// Validate the configuration and build a [`FracDiffModel`].
    pub fn build(self) -> Result<FracDiffModel<T>, FracDiffError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let order = self.order.unwrap_or_else(T::zero);
        let threshold = self.threshold.unwrap_or_else(T::zero);

        Validator::validate_order(order)?;
        Validator::validate_threshold(threshold)?;
        Validator::validate_max_weights(self.max_weights)?;

        Ok(FracDiffModel {
            generator: WeightGenerator::new(order, threshold, self.max_weights),
            return_weights: self.return_weights.unwrap_or(false),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Configured fractional differencing model.
///
/// Immutable after construction; `diff` and `integrate` may be called any
/// number of times on different series.
#[derive(Debug, Clone)]
pub struct FracDiffModel<T: FloatDot + Debug> {
    /// Validated weight generator (order plus truncation controls).
    generator: WeightGenerator<T>,

    /// Include the applied weight sequence in results.
    return_weights: bool,
}

impl<T: FloatDot + Debug> FracDiffModel<T> {
    /// Apply fractional differencing at the configured order.
    pub fn diff(&self, series: &[T]) -> Result<FracDiffResult<T>, FracDiffError> {
        self.run(series, self.generator)
    }

    /// Apply fractional integration (the inverse transform, order `-d`).
    ///
    /// With an unbounded weight count, `integrate` applied to the output of
    /// `diff` approximately reconstructs the original series.
    pub fn integrate(&self, series: &[T]) -> Result<FracDiffResult<T>, FracDiffError> {
        self.run(series, self.generator.inverted())
    }

    /// The weight sequence the model would apply to a series of `length`
    /// observations.
    pub fn weights(&self, length: usize) -> Vec<T> {
        self.generator.generate(length)
    }

    fn run(
        &self,
        series: &[T],
        generator: WeightGenerator<T>,
    ) -> Result<FracDiffResult<T>, FracDiffError> {
        Validator::validate_series(series)?;

        let output = FracDiffExecutor::run(series, &generator);
        Validator::validate_output(&output.transformed)?;

        Ok(FracDiffResult {
            input: series.to_vec(),
            y: output.transformed,
            order_used: generator.order,
            weights_used: output.weights.len(),
            windowed: generator.max_weights.is_some(),
            weights: if self.return_weights {
                Some(output.weights)
            } else {
                None
            },
        })
    }
}
