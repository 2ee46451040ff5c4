//! Result type for fractional differencing operations.
//!
//! ## Purpose
//!
//! This module defines the structured result returned by the public API:
//! the transformed series plus the metadata needed to interpret it (order
//! applied, weight count, whether the transform was windowed).
//!
//! ## Design notes
//!
//! * **Self-describing**: `Display` renders a summary-and-table report, so a
//!   result can be printed directly for visual inspection.
//! * **Optional payloads**: The weight sequence is included only when
//!   requested at build time, keeping the default result lean.
//!
//! ## Non-goals
//!
//! * This module does not compute anything; it only carries results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// ============================================================================
// Result Type
// ============================================================================

/// Result of a fractional differencing or integration run.
#[derive(Debug, Clone, PartialEq)]
pub struct FracDiffResult<T: Float> {
    /// The original input series.
    pub input: Vec<T>,

    /// The transformed series, same length as `input`.
    pub y: Vec<T>,

    /// The differencing order that was applied (already negated for
    /// integration).
    pub order_used: T,

    /// Number of weights that survived truncation (including weight 0).
    pub weights_used: usize,

    /// Whether a weight-count cap was active. A windowed transform is a FIR
    /// approximation and is not exactly inverted by negating the order.
    pub windowed: bool,

    /// The applied weight sequence, when requested via `return_weights()`.
    pub weights: Option<Vec<T>>,
}

impl<T: Float + fmt::Display> fmt::Display for FracDiffResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_ROWS: usize = 10;

        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.y.len())?;
        writeln!(f, "  Order: {}", self.order_used)?;
        writeln!(f, "  Weights used: {}", self.weights_used)?;
        if self.windowed {
            writeln!(f, "  Windowed: yes (not exactly invertible)")?;
        }

        writeln!(f)?;
        writeln!(f, "Transformed Data:")?;
        writeln!(f, "  {:>12} {:>12}", "Input", "Output")?;
        writeln!(f, "  -------------------------")?;
        let rows = self.y.len().min(MAX_ROWS);
        for i in 0..rows {
            writeln!(f, "  {:>12.5} {:>12.5}", self.input[i], self.y[i])?;
        }
        if self.y.len() > MAX_ROWS {
            writeln!(f, "  ... ({} more rows)", self.y.len() - MAX_ROWS)?;
        }

        if let Some(weights) = &self.weights {
            writeln!(f)?;
            writeln!(f, "Weights:")?;
            let wrows = weights.len().min(MAX_ROWS);
            for (k, w) in weights.iter().take(wrows).enumerate() {
                writeln!(f, "  w[{}] = {:.6}", k, w)?;
            }
            if weights.len() > MAX_ROWS {
                writeln!(f, "  ... ({} more weights)", weights.len() - MAX_ROWS)?;
            }
        }

        Ok(())
    }
}
