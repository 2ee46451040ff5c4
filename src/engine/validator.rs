//! Input validation for fractional differencing configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for transform parameters and
//! input series. It checks requirements such as non-empty input, finite
//! values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like threshold >= 0.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the convolution itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FracDiffError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fractional differencing configuration and input data.
///
/// Provides static methods for validating parameters and input series. All
/// methods return `Result<(), FracDiffError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an input series for fractional differencing.
    pub fn validate_series<T: Float>(series: &[T]) -> Result<(), FracDiffError> {
        // Check 1: Non-empty input
        if series.is_empty() {
            return Err(FracDiffError::EmptyInput);
        }

        // Check 2: All values finite
        for (i, &val) in series.iter().enumerate() {
            if !val.is_finite() {
                return Err(FracDiffError::InvalidNumericValue(format!(
                    "series[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the fractional differencing order.
    ///
    /// Any finite order is accepted; integer orders are legitimate (they
    /// reduce to ordinary differencing or summation).
    pub fn validate_order<T: Float>(order: T) -> Result<(), FracDiffError> {
        if !order.is_finite() {
            return Err(FracDiffError::InvalidOrder(
                order.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the weight truncation threshold.
    ///
    /// # Notes
    ///
    /// * A threshold of 0 stops generation only on exact-zero weights.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), FracDiffError> {
        if !threshold.is_finite() || threshold < T::zero() {
            return Err(FracDiffError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the weight-count cap.
    ///
    /// Unbounded generation is expressed as `None` at the API level; an
    /// explicit cap must allow at least one weight beyond index 0.
    pub fn validate_max_weights(max_weights: Option<usize>) -> Result<(), FracDiffError> {
        if let Some(cap) = max_weights {
            if cap == 0 {
                return Err(FracDiffError::InvalidMaxWeights(cap));
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FracDiffError> {
        if let Some(param) = duplicate_param {
            return Err(FracDiffError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Output Validation
    // ========================================================================

    /// Validate that a transform output contains only finite values.
    ///
    /// Extreme order magnitudes can overflow the chosen float type over long
    /// series; this surfaces the condition instead of returning Inf/NaN.
    pub fn validate_output<T: Float>(output: &[T]) -> Result<(), FracDiffError> {
        for (i, &val) in output.iter().enumerate() {
            if !val.is_finite() {
                return Err(FracDiffError::NumericOverflow { index: i });
            }
        }
        Ok(())
    }
}
