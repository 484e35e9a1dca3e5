//! Axis adapter with parallel execution and `ndarray` inputs.
//!
//! ## Purpose
//!
//! This module provides the 1D (along-axis) adapter of the extension crate.
//! It wraps the `maskconv` axis builder, accepts slices or `ndarray` arrays of
//! any dimension, and swaps in the parallel reducer pass.
//!
//! ## Design notes
//!
//! * **Processing**: Flattens inputs, then delegates to the `maskconv` axis processor.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastMaskconv extension).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Builder Wrapping**: All configuration lives in the base builder.
//! * **Pass Injection**: The parallel pass is installed at `fit` time.
//!
//! ## Invariants
//!
//! * Results equal the sequential `maskconv` results exactly.
//! * Output shape matches the input shape.
//!
//! ## Non-goals
//!
//! * This adapter does not handle 2D kernels (use the grid adapter).

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::reduce_pass_1d_parallel;

// External dependencies
use num_traits::Float;
use std::borrow::Cow;
use std::fmt::Debug;
use std::result::Result;

// Export dependencies from maskconv crate
use maskconv::internals::adapters::axis::AxisConvBuilder;
use maskconv::internals::engine::output::MaskedResult;
use maskconv::internals::math::coverage::Reduction;
use maskconv::internals::primitives::errors::ConvolveError;
use maskconv::internals::primitives::slab::{Kernel, Slab};

// Internal dependencies
use crate::input::ArrayInput;

// ============================================================================
// Extended Axis Builder
// ============================================================================

/// Builder for the 1D processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelAxisConvBuilder<T: Float> {
    /// Base builder from the maskconv crate
    pub base: AxisConvBuilder<T>,
}

impl<T: Float> Default for ParallelAxisConvBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelAxisConvBuilder<T> {
    /// Create a new axis builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from maskconv AxisConvBuilder
    /// * parallel: true (fastMaskconv extension)
    fn new() -> Self {
        let base = AxisConvBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the maximum tolerable fraction of missing taps.
    pub fn max_missing(mut self, max_missing: T) -> Self {
        self.base = self.base.max_missing(max_missing);
        self
    }

    /// Set the axis to convolve along.
    pub fn axis(mut self, axis: usize) -> Self {
        self.base = self.base.axis(axis);
        self
    }

    /// Set the reduction mode.
    pub fn reduction(mut self, reduction: Reduction) -> Self {
        self.base = self.base.reduction(reduction);
        self
    }

    /// Enable returning per-position coverage.
    pub fn return_coverage(mut self, enabled: bool) -> Self {
        self.base = self.base.return_coverage(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the axis processor.
    pub fn build(self) -> Result<ParallelAxisConv<T>, ConvolveError> {
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base processor
        let _ = self.base.clone().build()?;

        Ok(ParallelAxisConv { config: self })
    }
}

// ============================================================================
// Extended Axis Processor
// ============================================================================

/// 1D processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelAxisConv<T: Float> {
    config: ParallelAxisConvBuilder<T>,
}

impl<T: Float + Debug + Send + Sync + 'static> ParallelAxisConv<T> {
    /// Axis this processor convolves along.
    pub fn axis(&self) -> usize {
        self.config.base.axis
    }

    /// Apply `kernel` along the configured axis; NaN entries are missing.
    pub fn fit<I, K>(&self, values: &I, kernel: &K) -> Result<MaskedResult<T>, ConvolveError>
    where
        I: ArrayInput<T> + ?Sized,
        K: ArrayInput<T> + ?Sized,
    {
        self.run(values, None, kernel)
    }

    /// Apply `kernel` along the configured axis; `missing` flags extra missing entries.
    pub fn fit_masked<I, M, K>(
        &self,
        values: &I,
        missing: &M,
        kernel: &K,
    ) -> Result<MaskedResult<T>, ConvolveError>
    where
        I: ArrayInput<T> + ?Sized,
        M: ArrayInput<bool> + ?Sized,
        K: ArrayInput<T> + ?Sized,
    {
        let mask_shape = missing.dims();
        let shape = values.dims();
        if mask_shape != shape {
            return Err(ConvolveError::MaskShapeMismatch {
                shape,
                mask: mask_shape,
            });
        }

        self.run(values, Some(missing.as_flat()), kernel)
    }

    fn run<I, K>(
        &self,
        values: &I,
        missing: Option<Cow<'_, [bool]>>,
        kernel: &K,
    ) -> Result<MaskedResult<T>, ConvolveError>
    where
        I: ArrayInput<T> + ?Sized,
        K: ArrayInput<T> + ?Sized,
    {
        let data = values.as_flat();
        let shape = values.dims();
        let weights = kernel.as_flat();
        let kernel_shape = kernel.dims();

        let mut slab = Slab::new(&data, &shape);
        if let Some(flags) = missing.as_deref() {
            slab = slab.with_missing(flags);
        }

        let builder = self.config.base.clone();

        // Swap in the parallel pass if enabled
        #[cfg(feature = "cpu")]
        let builder = if builder.parallel.unwrap_or(true) {
            builder.custom_reduce_pass(reduce_pass_1d_parallel)
        } else {
            builder
        };

        builder
            .build()?
            .fit(&slab, &Kernel::new(&weights, &kernel_shape))
    }
}
