//! Error types for fractional differencing.
//!
//! ## Purpose
//!
//! This module defines the error enum returned by every fallible operation in
//! the crate: builder validation, input validation, and the numeric-overflow
//! check on transform output.
//!
//! ## Design notes
//!
//! * **no_std compatible**: `Display` is implemented by hand over `core::fmt`;
//!   `std::error::Error` is provided only when the `std` feature is enabled.
//! * **Fail-fast**: Errors are produced before any output is allocated; there
//!   is no partial-result mode.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).
//! * This module does not provide retry or recovery machinery.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by fractional differencing configuration and execution.
#[derive(Debug, Clone, PartialEq)]
pub enum FracDiffError {
    /// The input series was empty.
    EmptyInput,

    /// An input value was NaN or infinite. Payload names the offending entry.
    InvalidNumericValue(String),

    /// The differencing order `d` was NaN or infinite.
    InvalidOrder(f64),

    /// The truncation threshold was negative, NaN, or infinite.
    InvalidThreshold(f64),

    /// The weight-count cap was invalid (a cap must be at least 1).
    InvalidMaxWeights(usize),

    /// The transform produced a non-finite value at the given output index.
    ///
    /// This happens when the magnitude of `d` is large enough that the
    /// recurrence weights overflow the chosen float type over a long series.
    NumericOverflow {
        /// Index of the first non-finite output element.
        index: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for FracDiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input series must not be empty"),
            Self::InvalidNumericValue(detail) => {
                write!(f, "input contains a non-finite value: {}", detail)
            }
            Self::InvalidOrder(d) => {
                write!(f, "differencing order must be finite, got {}", d)
            }
            Self::InvalidThreshold(t) => {
                write!(f, "threshold must be finite and non-negative, got {}", t)
            }
            Self::InvalidMaxWeights(m) => {
                write!(f, "max_weights must be at least 1, got {}", m)
            }
            Self::NumericOverflow { index } => {
                write!(f, "transform overflowed to a non-finite value at index {}", index)
            }
            Self::DuplicateParameter { parameter } => {
                write!(f, "parameter '{}' was set more than once", parameter)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FracDiffError {}
