//! Error types for masked convolution operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or running a masked convolution or running mean: malformed arrays, kernels
//! of the wrong dimensionality, out-of-range axes and invalid thresholds.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (expected vs. actual shapes).
//! * **Eager**: Every error is raised before any numeric work starts.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Array validation**: Empty inputs, shape/length mismatches, mask mismatches.
//! 2. **Operation validation**: Kernel dimensionality, axis range, 2D-only inputs.
//! 3. **Parameter validation**: Missing-fraction threshold, duplicate builder parameters.
//!
//! ## Invariants
//!
//! * A window with no eligible taps is never an error; it yields a masked output.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for masked convolution operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvolveError {
    /// The input array has no elements.
    EmptyInput,

    /// The kernel has no taps.
    EmptyKernel,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// The number of values does not match the product of the declared shape.
    ShapeMismatch {
        /// Declared shape.
        shape: Vec<usize>,
        /// Number of values actually supplied.
        len: usize,
    },

    /// The validity mask does not have one flag per value.
    MaskMismatch {
        /// Number of values in the array.
        values: usize,
        /// Number of flags in the mask.
        mask: usize,
    },

    /// The validity mask has a different shape than the array.
    MaskShapeMismatch {
        /// Shape of the array.
        shape: Vec<usize>,
        /// Shape of the mask.
        mask: Vec<usize>,
    },

    /// The kernel dimensionality does not match the operation.
    KernelDimension {
        /// Dimensionality required by the operation.
        expected: usize,
        /// Dimensionality of the supplied kernel.
        got: usize,
    },

    /// The convolution axis is outside `[0, ndim - 1]`.
    InvalidAxis {
        /// Requested axis.
        axis: usize,
        /// Dimensionality of the input array.
        ndim: usize,
    },

    /// A 2D operation received an array that is not two-dimensional.
    NotTwoDimensional {
        /// Dimensionality of the supplied array.
        ndim: usize,
    },

    /// The maximum missing fraction must lie in `[0, 1]`.
    InvalidMaxMissing(f64),

    /// A kernel weight is NaN or infinite.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ConvolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input array is empty"),
            Self::EmptyKernel => write!(f, "Kernel is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::ShapeMismatch { shape, len } => {
                write!(f, "Shape mismatch: shape {shape:?} does not hold {len} values")
            }
            Self::MaskMismatch { values, mask } => {
                write!(f, "Mask mismatch: {values} values but {mask} mask flags")
            }
            Self::MaskShapeMismatch { shape, mask } => {
                write!(f, "Mask mismatch: array shape {shape:?} but mask shape {mask:?}")
            }
            Self::KernelDimension { expected, got } => {
                write!(f, "Kernel needs to be {expected}D, got a {got}D kernel")
            }
            Self::InvalidAxis { axis, ndim } => {
                write!(
                    f,
                    "Invalid axis: {axis} (must be within [0, {}])",
                    ndim.saturating_sub(1)
                )
            }
            Self::NotTwoDimensional { ndim } => {
                write!(f, "Input needs to be 2D, got a {ndim}D array")
            }
            Self::InvalidMaxMissing(value) => {
                write!(f, "Invalid max_missing: {value} (must be >= 0 and <= 1)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ConvolveError {}
