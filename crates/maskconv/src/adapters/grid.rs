//! Grid adapter: 2D convolution and running mean on a 2D array.
//!
//! ## Purpose
//!
//! This module provides the execution adapter for 2D operations on strictly
//! two-dimensional arrays with a two-dimensional kernel.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, masks, reduces. No axis reordering is needed.
//! * **Orientation**: Running means reverse the kernel along both axes.
//! * **Delegation**: Delegates the reduction to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Both the array and the kernel must be 2D.
//! * Output shape equals input shape.
//!
//! ## Non-goals
//!
//! * This adapter does not handle arrays of more than two dimensions.

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
use crate::primitives::mask::MaskedValues;
use crate::primitives::slab::{Kernel, Slab};

// ============================================================================
// Grid Builder
// ============================================================================

/// Builder for the 2D processor.
#[derive(Debug, Clone)]
pub struct GridConvBuilder<T: Float> {
    /// Maximum tolerable fraction of missing taps
    pub max_missing: T,

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

impl<T: Float> Default for GridConvBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GridConvBuilder<T> {
    /// Create a new grid builder with default parameters.
    fn new() -> Self {
        Self {
            max_missing: T::from(0.5).unwrap_or_else(T::zero),
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

    /// Build the grid processor.
    pub fn build(self) -> Result<GridConv<T>, ConvolveError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate threshold
        Validator::validate_max_missing(self.max_missing)?;

        Ok(GridConv { config: self })
    }
}

// ============================================================================
// Grid Processor
// ============================================================================

/// 2D convolution / running mean.
#[derive(Debug, Clone)]
pub struct GridConv<T: Float> {
    config: GridConvBuilder<T>,
}

impl<T: Float> GridConv<T> {
    /// Apply the 2D kernel to the 2D `slab`.
    pub fn fit(
        &self,
        slab: &Slab<'_, T>,
        kernel: &Kernel<'_, T>,
    ) -> Result<MaskedResult<T>, ConvolveError> {
        Validator::validate_two_dimensional(slab.ndim())?;
        Validator::validate_kernel(kernel, 2)?;
        Validator::validate_slab(slab)?;

        let masked = MaskedValues::build(slab.values, slab.missing);
        let input_missing = masked.missing_count();

        // Reversing the row-major buffer flips both axes
        let weights: Vec<T> = if self.config.reduction.flips_kernel() {
            flip(kernel.weights)
        } else {
            kernel.weights.to_vec()
        };
        let active = kernel_flags(&weights);

        let (rows, cols) = (slab.shape[0], slab.shape[1]);
        let plane = Plane::new(&masked.values, &masked.missing, rows, cols);
        let taps = Taps::grid(&weights, &active, kernel.shape[0], kernel.shape[1]);
        let config = ReduceConfig {
            policy: MissingPolicy::new(self.config.max_missing, self.config.reduction),
            custom_reduce_pass: self.config.custom_reduce_pass,
        };

        let output = MaskedExecutor::run_2d(&plane, &taps, &config);

        Ok(MaskedResult {
            values: output.values,
            mask: output.mask,
            shape: slab.shape.clone(),
            coverage: self.config.return_coverage.then_some(output.coverage),
            axis: None,
            reduction: self.config.reduction,
            max_missing: self.config.max_missing,
            input_missing,
        })
    }
}
