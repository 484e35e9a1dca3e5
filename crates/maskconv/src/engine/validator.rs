//! Input validation for masked convolution configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any numeric
//! work: array and mask consistency, kernel dimensionality, axis range,
//! 2D-only inputs and the missing-fraction threshold.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape Consistency**: `product(shape) == values.len()` for slabs and kernels.
//! * **Operation Fit**: 1D operations need a 1D kernel, 2D operations a 2D kernel and slab.
//! * **Finite Kernels**: Kernel weights must be finite; slab values may be NaN (missing).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not build masks, reorder axes or flip kernels.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ConvolveError;
use crate::primitives::slab::{Kernel, Slab};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for masked convolution configuration and input data.
///
/// Provides static methods that return `Result<(), ConvolveError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a slab: non-empty, shape consistent, mask of matching length.
    pub fn validate_slab<T: Float>(slab: &Slab<'_, T>) -> Result<(), ConvolveError> {
        // Check 1: Non-empty
        if slab.is_empty() {
            return Err(ConvolveError::EmptyInput);
        }

        // Check 2: Shape matches the number of values
        let expected: usize = slab.shape.iter().product();
        if expected != slab.len() {
            return Err(ConvolveError::ShapeMismatch {
                shape: slab.shape.clone(),
                len: slab.len(),
            });
        }

        // Check 3: Mask matches the number of values
        if let Some(missing) = slab.missing {
            if missing.len() != slab.len() {
                return Err(ConvolveError::MaskMismatch {
                    values: slab.len(),
                    mask: missing.len(),
                });
            }
        }

        Ok(())
    }

    /// Validate a kernel for an operation of dimensionality `ndim`.
    pub fn validate_kernel<T: Float>(
        kernel: &Kernel<'_, T>,
        ndim: usize,
    ) -> Result<(), ConvolveError> {
        // Check 1: Dimensionality matches the operation
        if kernel.ndim() != ndim {
            return Err(ConvolveError::KernelDimension {
                expected: ndim,
                got: kernel.ndim(),
            });
        }

        // Check 2: Non-empty
        if kernel.weights.is_empty() {
            return Err(ConvolveError::EmptyKernel);
        }

        // Check 3: Shape matches the number of weights
        let expected: usize = kernel.shape.iter().product();
        if expected != kernel.weights.len() {
            return Err(ConvolveError::ShapeMismatch {
                shape: kernel.shape.clone(),
                len: kernel.weights.len(),
            });
        }

        // Check 4: All weights finite
        for (i, w) in kernel.weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(ConvolveError::InvalidNumericValue(format!(
                    "kernel[{}]={}",
                    i,
                    w.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that `axis` addresses a dimension of an `ndim`-dimensional array.
    pub fn validate_axis(axis: usize, ndim: usize) -> Result<(), ConvolveError> {
        if axis >= ndim {
            return Err(ConvolveError::InvalidAxis { axis, ndim });
        }
        Ok(())
    }

    /// Validate that an array is exactly two-dimensional.
    pub fn validate_two_dimensional(ndim: usize) -> Result<(), ConvolveError> {
        if ndim != 2 {
            return Err(ConvolveError::NotTwoDimensional { ndim });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the maximum missing fraction.
    pub fn validate_max_missing<T: Float>(max_missing: T) -> Result<(), ConvolveError> {
        if !max_missing.is_finite() || max_missing < T::zero() || max_missing > T::one() {
            return Err(ConvolveError::InvalidMaxMissing(
                max_missing.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ConvolveError> {
        if let Some(param) = duplicate_param {
            return Err(ConvolveError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
