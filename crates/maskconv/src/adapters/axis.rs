//! Axis adapter: 1D convolution and running mean along one axis of an N-D array.
//!
//! ## Purpose
//!
//! This module provides the execution adapter for 1D operations. It applies
//! a 1D kernel along a chosen axis of an arbitrary-dimensional array, with
//! every other dimension treated as an independent series.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, masks, moves the axis to the front, reduces, and restores.
//! * **Orientation**: Running means apply the kernel reversed; convolution applies it as given.
//! * **Delegation**: Delegates the reduction to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Mask-Normalize-Reduce-Restore**: The 1D pipeline.
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//!
//! ## Invariants
//!
//! * The kernel must be 1D and the axis within `[0, ndim - 1]`.
//! * Output shape equals input shape.
//!
//! ## Non-goals
//!
//! * This adapter does not handle 2D kernels (use the grid adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::plane::{Plane, Taps};
use crate::engine::executor::{MaskedExecutor, ReduceConfig, ReducePassFn};
use crate::engine::output::MaskedResult;
use crate::engine::validator::Validator;
use crate::math::coverage::{MissingPolicy, Reduction};
use crate::math::kernel::{flip, kernel_flags};
use crate::primitives::errors::ConvolveError;
use crate::primitives::layout::{from_axis_leading, to_axis_leading};
use crate::primitives::mask::MaskedValues;
use crate::primitives::slab::{Kernel, Slab};

// ============================================================================
// Axis Builder
// ============================================================================

/// Builder for the 1D (along-axis) processor.
#[derive(Debug, Clone)]
pub struct AxisConvBuilder<T: Float> {
    /// Maximum tolerable fraction of missing taps
    pub max_missing: T,

    /// Axis to convolve along
    pub axis: usize,

    /// Reduction mode
    pub reduction: Reduction,

    /// Whether to return per-position coverage
    pub return_coverage: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<ConvolveError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom reducer pass.
    #[doc(hidden)]
    pub custom_reduce_pass: Option<ReducePassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for AxisConvBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> AxisConvBuilder<T> {
    /// Create a new axis builder with default parameters.
    fn new() -> Self {
        Self {
            max_missing: T::from(0.5).unwrap_or_else(T::zero),
            axis: 0,
            reduction: Reduction::default(),
            return_coverage: false,
            deferred_error: None,
            custom_reduce_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the maximum tolerable fraction of missing taps.
    pub fn max_missing(mut self, max_missing: T) -> Self {
        self.max_missing = max_missing;
        self
    }

    /// Set the axis to convolve along.
    pub fn axis(mut self, axis: usize) -> Self {
        self.axis = axis;
        self
    }

    /// Set the reduction mode.
    pub fn reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = reduction;
        self
    }

    /// Enable returning per-position coverage.
    pub fn return_coverage(mut self, enabled: bool) -> Self {
        self.return_coverage = enabled;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom reducer pass.
    #[doc(hidden)]
    pub fn custom_reduce_pass(mut self, pass: ReducePassFn<T>) -> Self {
        self.custom_reduce_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the axis processor.
    pub fn build(self) -> Result<AxisConv<T>, ConvolveError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate threshold
        Validator::validate_max_missing(self.max_missing)?;

        Ok(AxisConv { config: self })
    }
}

// ============================================================================
// Axis Processor
// ============================================================================

/// 1D convolution / running mean along one axis.
#[derive(Debug, Clone)]
pub struct AxisConv<T: Float> {
    config: AxisConvBuilder<T>,
}

impl<T: Float> AxisConv<T> {
    /// Axis this processor convolves along.
    pub fn axis(&self) -> usize {
        self.config.axis
    }

    /// Apply the kernel along the configured axis of `slab`.
    pub fn fit(
        &self,
        slab: &Slab<'_, T>,
        kernel: &Kernel<'_, T>,
    ) -> Result<MaskedResult<T>, ConvolveError> {
        let axis = self.config.axis;

        Validator::validate_kernel(kernel, 1)?;
        Validator::validate_axis(axis, slab.ndim())?;
        Validator::validate_slab(slab)?;

        // Missing flags, with missing entries zeroed
        let masked = MaskedValues::build(slab.values, slab.missing);
        let input_missing = masked.missing_count();

        // Axis-leading (n, m) tables
        let (values, layout) = to_axis_leading(&masked.values, &slab.shape, axis);
        let (missing, _) = to_axis_leading(&masked.missing, &slab.shape, axis);

        // Kernel orientation and eligibility
        let weights: Vec<T> = if self.config.reduction.flips_kernel() {
            flip(kernel.weights)
        } else {
            kernel.weights.to_vec()
        };
        let active = kernel_flags(&weights);

        let plane = Plane::new(&values, &missing, layout.rows(), layout.cols());
        let taps = Taps::line(&weights, &active);
        let config = ReduceConfig {
            policy: MissingPolicy::new(self.config.max_missing, self.config.reduction),
            custom_reduce_pass: self.config.custom_reduce_pass,
        };

        let output = MaskedExecutor::run_1d(&plane, &taps, &config);

        // Restore the original dimension order
        let coverage = if self.config.return_coverage {
            Some(from_axis_leading(output.coverage, &layout))
        } else {
            None
        };

        Ok(MaskedResult {
            values: from_axis_leading(output.values, &layout),
            mask: from_axis_leading(output.mask, &layout),
            shape: slab.shape.clone(),
            coverage,
            axis: Some(axis),
            reduction: self.config.reduction,
            max_missing: self.config.max_missing,
            input_missing,
        })
    }
}
