//! High-level API for masked convolution with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of the extension crate.
//! It reuses the `maskconv` builder and adds adapters that accept `ndarray`
//! inputs and run the reducers on all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `maskconv` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Transparent**: Marker types (Axis, Grid) select the parallel builders.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MaskedConvBuilder`] via `MaskedConv::new()`.
//! 2. Chain configuration methods (`.max_missing()`, `.axis()`, etc.).
//! 3. Select an adapter via `.adapter(Axis)` to get a parallel execution builder.

// External dependencies
use ndarray::{ArrayD, IxDyn};
use num_traits::Float;
use std::fmt::Debug;

// Import base marker types for delegation
use maskconv::internals::api::Axis as BaseAxis;
use maskconv::internals::api::Grid as BaseGrid;

// Internal dependencies
use crate::adapters::axis::ParallelAxisConvBuilder;
use crate::adapters::grid::ParallelGridConvBuilder;
use crate::input::ArrayInput;

// Publicly re-exported types
pub use maskconv::internals::api::{MaskedConvAdapter, MaskedConvBuilder};
pub use maskconv::internals::engine::output::MaskedResult;
pub use maskconv::internals::math::coverage::Reduction;
pub use maskconv::internals::primitives::errors::ConvolveError;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Axis, Grid};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel 1D processing along an axis.
#[derive(Debug, Clone, Copy)]
pub struct Axis;

impl<T: Float> MaskedConvAdapter<T> for Axis {
    type Output = ParallelAxisConvBuilder<T>;

    fn convert(builder: MaskedConvBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true
        let parallel = builder.parallel.unwrap_or(true);

        let mut base = <BaseAxis as MaskedConvAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelAxisConvBuilder { base }
    }
}

/// Marker for parallel 2D processing.
#[derive(Debug, Clone, Copy)]
pub struct Grid;

impl<T: Float> MaskedConvAdapter<T> for Grid {
    type Output = ParallelGridConvBuilder<T>;

    fn convert(builder: MaskedConvBuilder<T>) -> Self::Output {
        let parallel = builder.parallel.unwrap_or(true);

        let mut base = <BaseGrid as MaskedConvAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelGridConvBuilder { base }
    }
}

// ============================================================================
// ndarray Conversion
// ============================================================================

/// Conversion of a result into `ndarray` arrays of the input shape.
pub trait IntoArrays<T> {
    /// Split into `(values, mask)` arrays.
    fn into_arrays(self) -> Result<(ArrayD<T>, ArrayD<bool>), ConvolveError>;
}

impl<T: Float> IntoArrays<T> for MaskedResult<T> {
    fn into_arrays(self) -> Result<(ArrayD<T>, ArrayD<bool>), ConvolveError> {
        let shape = IxDyn(&self.shape);
        let to_error = |e: ndarray::ShapeError| ConvolveError::InvalidInput(e.to_string());

        let values = ArrayD::from_shape_vec(shape.clone(), self.values).map_err(to_error)?;
        let mask = ArrayD::from_shape_vec(shape, self.mask).map_err(to_error)?;

        Ok((values, mask))
    }
}

// ============================================================================
// One-call Operations
// ============================================================================

/// Parallel 1D convolution of `values` with `kernel` along `axis`.
pub fn convolve1d<T, I, K>(
    values: &I,
    kernel: &K,
    axis: usize,
    max_missing: T,
) -> Result<MaskedResult<T>, ConvolveError>
where
    T: Float + Debug + Send + Sync + 'static,
    I: ArrayInput<T> + ?Sized,
    K: ArrayInput<T> + ?Sized,
{
    MaskedConvBuilder::new()
        .max_missing(max_missing)
        .axis(axis)
        .reduction(Reduction::Sum)
        .adapter(Axis)
        .build()?
        .fit(values, kernel)
}

/// Parallel 1D running mean of `values` along `axis` (kernel applied reversed).
pub fn run_mean1d<T, I, K>(
    values: &I,
    kernel: &K,
    axis: usize,
    max_missing: T,
) -> Result<MaskedResult<T>, ConvolveError>
where
    T: Float + Debug + Send + Sync + 'static,
    I: ArrayInput<T> + ?Sized,
    K: ArrayInput<T> + ?Sized,
{
    MaskedConvBuilder::new()
        .max_missing(max_missing)
        .axis(axis)
        .reduction(Reduction::Average)
        .adapter(Axis)
        .build()?
        .fit(values, kernel)
}

/// Parallel 2D convolution of a 2D array.
pub fn convolve2d<T, I, K>(
    values: &I,
    kernel: &K,
    max_missing: T,
) -> Result<MaskedResult<T>, ConvolveError>
where
    T: Float + Debug + Send + Sync + 'static,
    I: ArrayInput<T> + ?Sized,
    K: ArrayInput<T> + ?Sized,
{
    MaskedConvBuilder::new()
        .max_missing(max_missing)
        .reduction(Reduction::Sum)
        .adapter(Grid)
        .build()?
        .fit(values, kernel)
}

/// Parallel 2D running mean of a 2D array (kernel reversed along both axes).
pub fn run_mean2d<T, I, K>(
    values: &I,
    kernel: &K,
    max_missing: T,
) -> Result<MaskedResult<T>, ConvolveError>
where
    T: Float + Debug + Send + Sync + 'static,
    I: ArrayInput<T> + ?Sized,
    K: ArrayInput<T> + ?Sized,
{
    MaskedConvBuilder::new()
        .max_missing(max_missing)
        .reduction(Reduction::Average)
        .adapter(Grid)
        .build()?
        .fit(values, kernel)
}
