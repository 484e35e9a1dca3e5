//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the masked windowed reductions:
//! - 1D reduction along the rows of an axis-leading table
//! - 2D reduction over a plane
//!
//! Both reducers resolve every window through the shared policy in
//! `math::coverage`.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Reducer input and output buffers.
pub mod plane;

/// Masked 1D windowed reduction.
pub mod reduce1d;

/// Masked 2D windowed reduction.
pub mod reduce2d;
