//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of fractional
//! differencing:
//! - The binomial-expansion weight recurrence
//! - SIMD-accelerated dot products for the convolution inner loop
//!
//! These are reusable functions with no orchestration or validation logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binomial-expansion weight generation.
pub mod weights;

/// Dot-product backend (scalar and SIMD).
pub mod dot;
