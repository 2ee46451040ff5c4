//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fractional differencing run:
//! - Input and parameter validation
//! - Weight generation plus the causal convolution
//! - Result assembly
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Weight generation and causal convolution.
pub mod executor;

/// Result type with report formatting.
pub mod output;
