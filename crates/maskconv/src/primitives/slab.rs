//! Borrowed views of convolution inputs.
//!
//! ## Purpose
//!
//! This module defines the two inputs every operation takes: a [`Slab`]
//! (row-major values with a shape and an optional missing-value mask) and a
//! [`Kernel`] (row-major weights with a shape).
//!
//! ## Design notes
//!
//! * **Borrowed data**: Values, masks and weights are borrowed; only shapes are owned.
//! * **Unchecked construction**: Constructors never fail; consistency is checked by `validator`.
//!
//! ## Non-goals
//!
//! * This module does not interpret NaNs or masks (see `mask`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Slab
// ============================================================================

/// Row-major array of values with an optional missing-value mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Slab<'a, T> {
    /// Values in row-major (C) order.
    pub values: &'a [T],

    /// Array shape; its product must equal `values.len()`.
    pub shape: Vec<usize>,

    /// Optional missing flags (`true` = missing), one per value.
    pub missing: Option<&'a [bool]>,
}

impl<'a, T> Slab<'a, T> {
    /// View `values` as an array of the given shape.
    pub fn new(values: &'a [T], shape: &[usize]) -> Self {
        Self {
            values,
            shape: shape.to_vec(),
            missing: None,
        }
    }

    /// View `values` as a 1D array.
    pub fn from_slice(values: &'a [T]) -> Self {
        Self::new(values, &[values.len()])
    }

    /// Attach a missing-value mask (`true` = missing).
    pub fn with_missing(mut self, missing: &'a [bool]) -> Self {
        self.missing = Some(missing);
        self
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the slab holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// Kernel
// ============================================================================

/// Row-major convolution weights with a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel<'a, T> {
    /// Weights in row-major order.
    pub weights: &'a [T],

    /// Kernel shape: `[len]` for 1D, `[rows, cols]` for 2D.
    pub shape: Vec<usize>,
}

impl<'a, T> Kernel<'a, T> {
    /// View `weights` as a kernel of the given shape.
    pub fn new(weights: &'a [T], shape: &[usize]) -> Self {
        Self {
            weights,
            shape: shape.to_vec(),
        }
    }

    /// 1D kernel.
    pub fn line(weights: &'a [T]) -> Self {
        Self::new(weights, &[weights.len()])
    }

    /// 2D kernel of `rows` x `cols` weights.
    pub fn grid(weights: &'a [T], rows: usize, cols: usize) -> Self {
        Self::new(weights, &[rows, cols])
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }
}
