//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution adapters that orchestrate masking,
//! layout and reduction for each family of operations:
//!
//! - **Axis**: 1D kernel along one axis of an N-D array
//! - **Grid**: 2D kernel over a 2D array
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// 1D operations along an axis.
pub mod axis;

/// 2D operations on a plane.
pub mod grid;
