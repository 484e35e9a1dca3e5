//! High-level API for masked convolution and running means.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring the missing-data threshold, reduction mode and axis, the
//! adapter markers that turn it into a processor, and four one-call
//! functions covering the common cases.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MaskedConvBuilder`] via `MaskedConv::new()`.
//! 2. Chain configuration methods (`.max_missing()`, `.reduction()`, etc.).
//! 3. Select an adapter via `.adapter(Axis)` or `.adapter(Grid)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::axis::AxisConvBuilder;
use crate::adapters::grid::GridConvBuilder;
use crate::engine::executor::ReducePassFn;

// Publicly re-exported types
pub use crate::adapters::axis::AxisConv;
pub use crate::adapters::grid::GridConv;
pub use crate::engine::output::MaskedResult;
pub use crate::math::coverage::Reduction;
pub use crate::primitives::errors::ConvolveError;
pub use crate::primitives::slab::{Kernel, Slab};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Axis, Grid};
}

/// Fluent builder for configuring masked convolution.
#[derive(Debug, Clone)]
pub struct MaskedConvBuilder<T> {
    /// Maximum tolerable fraction of missing taps in a window.
    pub max_missing: Option<T>,

    /// Axis for 1D operations (Axis only).
    pub axis: Option<usize>,

    /// Reduction mode (sum or running mean).
    pub reduction: Option<Reduction>,

    /// Return per-position coverage.
    pub return_coverage: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom reducer pass.
    #[doc(hidden)]
    pub custom_reduce_pass: Option<ReducePassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for MaskedConvBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> MaskedConvBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: MaskedConvAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            max_missing: None,
            axis: None,
            reduction: None,
            return_coverage: None,
            custom_reduce_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the maximum tolerable fraction of missing taps (default 0.5).
    pub fn max_missing(mut self, max_missing: T) -> Self {
        if self.max_missing.is_some() {
            self.duplicate_param = Some("max_missing");
        }
        self.max_missing = Some(max_missing);
        self
    }

    /// Set the axis for 1D operations (default 0).
    pub fn axis(mut self, axis: usize) -> Self {
        if self.axis.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axis = Some(axis);
        self
    }

    /// Set the reduction mode (default `Sum`).
    pub fn reduction(mut self, reduction: Reduction) -> Self {
        if self.reduction.is_some() {
            self.duplicate_param = Some("reduction");
        }
        self.reduction = Some(reduction);
        self
    }

    /// Include per-position coverage in the output.
    pub fn return_coverage(mut self) -> Self {
        if self.return_coverage.is_some() {
            self.duplicate_param = Some("return_coverage");
        }
        self.return_coverage = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom reducer pass (only for dev)
    #[doc(hidden)]
    pub fn custom_reduce_pass(mut self, pass: ReducePassFn<T>) -> Self {
        self.custom_reduce_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait MaskedConvAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`MaskedConvBuilder`] into a specialized execution builder.
    fn convert(builder: MaskedConvBuilder<T>) -> Self::Output;
}

/// Marker for 1D operations along one axis of an N-D array.
#[derive(Debug, Clone, Copy)]
pub struct Axis;

impl<T: Float> MaskedConvAdapter<T> for Axis {
    type Output = AxisConvBuilder<T>;

    fn convert(builder: MaskedConvBuilder<T>) -> Self::Output {
        let mut result = AxisConvBuilder::default();

        if let Some(max_missing) = builder.max_missing {
            result.max_missing = max_missing;
        }
        if let Some(axis) = builder.axis {
            result.axis = axis;
        }
        if let Some(reduction) = builder.reduction {
            result.reduction = reduction;
        }
        if let Some(rc) = builder.return_coverage {
            result.return_coverage = rc;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pass) = builder.custom_reduce_pass {
            result.custom_reduce_pass = Some(pass);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for 2D operations on a 2D array.
#[derive(Debug, Clone, Copy)]
pub struct Grid;

impl<T: Float> MaskedConvAdapter<T> for Grid {
    type Output = GridConvBuilder<T>;

    fn convert(builder: MaskedConvBuilder<T>) -> Self::Output {
        let mut result = GridConvBuilder::default();

        if let Some(max_missing) = builder.max_missing {
            result.max_missing = max_missing;
        }
        if let Some(reduction) = builder.reduction {
            result.reduction = reduction;
        }
        if let Some(rc) = builder.return_coverage {
            result.return_coverage = rc;
        }

        // 2D operations always use both axes
        if builder.axis.is_some() {
            result.deferred_error = Some(ConvolveError::InvalidInput(
                "axis is only used by the Axis adapter".to_string(),
            ));
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pass) = builder.custom_reduce_pass {
            result.custom_reduce_pass = Some(pass);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// ============================================================================
// One-call Operations
// ============================================================================

/// 1D convolution of `slab` with `kernel` along `axis` (weighted sum of valid taps).
pub fn convolve1d<T: Float>(
    slab: &Slab<'_, T>,
    kernel: &Kernel<'_, T>,
    axis: usize,
    max_missing: T,
) -> Result<MaskedResult<T>, ConvolveError> {
    MaskedConvBuilder::new()
        .max_missing(max_missing)
        .axis(axis)
        .reduction(Reduction::Sum)
        .adapter(Axis)
        .build()?
        .fit(slab, kernel)
}

/// 1D running mean of `slab` along `axis`, renormalized by the weights of valid taps.
///
/// The kernel is applied reversed, so asymmetric kernels act as a correlation.
pub fn run_mean1d<T: Float>(
    slab: &Slab<'_, T>,
    kernel: &Kernel<'_, T>,
    axis: usize,
    max_missing: T,
) -> Result<MaskedResult<T>, ConvolveError> {
    MaskedConvBuilder::new()
        .max_missing(max_missing)
        .axis(axis)
        .reduction(Reduction::Average)
        .adapter(Axis)
        .build()?
        .fit(slab, kernel)
}

/// 2D convolution of a 2D `slab` with a 2D `kernel`.
pub fn convolve2d<T: Float>(
    slab: &Slab<'_, T>,
    kernel: &Kernel<'_, T>,
    max_missing: T,
) -> Result<MaskedResult<T>, ConvolveError> {
    MaskedConvBuilder::new()
        .max_missing(max_missing)
        .reduction(Reduction::Sum)
        .adapter(Grid)
        .build()?
        .fit(slab, kernel)
}

/// 2D running mean of a 2D `slab`; the kernel is reversed along both axes.
pub fn run_mean2d<T: Float>(
    slab: &Slab<'_, T>,
    kernel: &Kernel<'_, T>,
    max_missing: T,
) -> Result<MaskedResult<T>, ConvolveError> {
    MaskedConvBuilder::new()
        .max_missing(max_missing)
        .reduction(Reduction::Average)
        .adapter(Grid)
        .build()?
        .fit(slab, kernel)
}
