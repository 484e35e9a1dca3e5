//! Grid adapter with parallel execution and `ndarray` inputs.
//!
//! ## Purpose
//!
//! This module provides the 2D adapter of the extension crate. It wraps the
//! `maskconv` grid builder, accepts `Array2` (or flat data with a 2D shape)
//! and swaps in the parallel reducer pass.
//!
//! ## Design notes
//!
//! * **Processing**: Flattens inputs, then delegates to the `maskconv` grid processor.
//! * **Parallelism**: Parallel over output rows via `rayon` (fastMaskconv extension).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Both the array and the kernel must be 2D.
//! * Results equal the sequential `maskconv` results exactly.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::reduce_pass_2d_parallel;

// External dependencies
use num_traits::Float;
use std::borrow::Cow;
use std::fmt::Debug;
use std::result::Result;

// Export dependencies from maskconv crate
use maskconv::internals::adapters::grid::GridConvBuilder;
use maskconv::internals::engine::output::MaskedResult;
use maskconv::internals::math::coverage::Reduction;
use maskconv::internals::primitives::errors::ConvolveError;
use maskconv::internals::primitives::slab::{Kernel, Slab};

// Internal dependencies
use crate::input::ArrayInput;

// ============================================================================
// Extended Grid Builder
// ============================================================================

/// Builder for the 2D processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelGridConvBuilder<T: Float> {
    /// Base builder from the maskconv crate
    pub base: GridConvBuilder<T>,
}

impl<T: Float> Default for ParallelGridConvBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelGridConvBuilder<T> {
    /// Create a new grid builder with default parameters (parallel on).
    fn new() -> Self {
        let base = GridConvBuilder::default().parallel(true);
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

    /// Build the grid processor.
    pub fn build(self) -> Result<ParallelGridConv<T>, ConvolveError> {
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        let _ = self.base.clone().build()?;

        Ok(ParallelGridConv { config: self })
    }
}

// ============================================================================
// Extended Grid Processor
// ============================================================================

/// 2D processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelGridConv<T: Float> {
    config: ParallelGridConvBuilder<T>,
}

impl<T: Float + Debug + Send + Sync + 'static> ParallelGridConv<T> {
    /// Apply the 2D `kernel` to the 2D `values`; NaN entries are missing.
    pub fn fit<I, K>(&self, values: &I, kernel: &K) -> Result<MaskedResult<T>, ConvolveError>
    where
        I: ArrayInput<T> + ?Sized,
        K: ArrayInput<T> + ?Sized,
    {
        self.run(values, None, kernel)
    }

    /// Apply the 2D `kernel` to the 2D `values` with an explicit missing mask.
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
            builder.custom_reduce_pass(reduce_pass_2d_parallel)
        } else {
            builder
        };

        builder
            .build()?
            .fit(&slab, &Kernel::new(&weights, &kernel_shape))
    }
}
