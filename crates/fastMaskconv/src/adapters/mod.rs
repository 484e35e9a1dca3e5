//! Layer 5: Adapters
//!
//! This layer provides the parallel, `ndarray`-aware versions of the
//! `maskconv` adapters:
//!
//! - **Axis**: 1D kernel along one axis of an N-D array
//! - **Grid**: 2D kernel over a 2D array

// Parallel 1D adapter.
pub mod axis;

// Parallel 2D adapter.
pub mod grid;
