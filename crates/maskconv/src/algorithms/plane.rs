//! Reducer inputs and outputs.
//!
//! ## Purpose
//!
//! This module defines the flat, row-major structures the reducers operate
//! on: a [`Plane`] of cleaned values plus missing flags, the [`Taps`] of a
//! kernel with their eligibility flags, and the [`ReduceOutput`] buffers
//! written one row at a time through [`RowOutput`].
//!
//! ## Design notes
//!
//! * **Row granularity**: Output rows are disjoint slices, so rows can be
//!   filled independently (sequentially or in parallel).
//! * **Coverage always tracked**: The valid fraction is recorded for every
//!   position; adapters decide whether to return it.
//!
//! ## Invariants
//!
//! * `values.len() == missing.len() == rows * cols` for a plane.
//! * `weights.len() == active.len() == rows * cols` for taps.
//! * Masked output positions hold zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice::ChunksMut;
use num_traits::Float;

// Internal dependencies
use crate::math::coverage::{MissingPolicy, WindowTally};

// ============================================================================
// Inputs
// ============================================================================

/// Cleaned values and missing flags laid out as `rows x cols`.
#[derive(Debug, Clone, Copy)]
pub struct Plane<'a, T> {
    /// Values with missing entries already zeroed.
    pub values: &'a [T],

    /// `true` where the value is missing.
    pub missing: &'a [bool],

    /// Number of rows (the convolution axis in the 1D case).
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,
}

impl<'a, T> Plane<'a, T> {
    /// Wrap row-major buffers.
    pub fn new(values: &'a [T], missing: &'a [bool], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        debug_assert_eq!(missing.len(), rows * cols);
        Self {
            values,
            missing,
            rows,
            cols,
        }
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if the plane has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Kernel weights and their eligibility flags laid out as `rows x cols`.
#[derive(Debug, Clone, Copy)]
pub struct Taps<'a, T> {
    /// Kernel weights.
    pub weights: &'a [T],

    /// `true` where the weight is nonzero.
    pub active: &'a [bool],

    /// Kernel rows (the kernel length in the 1D case).
    pub rows: usize,

    /// Kernel columns (1 in the 1D case).
    pub cols: usize,
}

impl<'a, T> Taps<'a, T> {
    /// 1D taps.
    pub fn line(weights: &'a [T], active: &'a [bool]) -> Self {
        debug_assert_eq!(weights.len(), active.len());
        Self {
            weights,
            active,
            rows: weights.len(),
            cols: 1,
        }
    }

    /// 2D taps.
    pub fn grid(weights: &'a [T], active: &'a [bool], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(weights.len(), rows * cols);
        debug_assert_eq!(active.len(), rows * cols);
        Self {
            weights,
            active,
            rows,
            cols,
        }
    }
}

// ============================================================================
// Outputs
// ============================================================================

/// Freshly allocated reducer output.
#[derive(Debug, Clone, PartialEq)]
pub struct ReduceOutput<T> {
    /// Reduced values (zero where masked).
    pub values: Vec<T>,

    /// `true` where the missing-fraction threshold was exceeded.
    pub mask: Vec<bool>,

    /// Fraction of eligible taps with valid data.
    pub coverage: Vec<T>,
}

impl<T: Float> ReduceOutput<T> {
    /// Zeroed output for `len` positions.
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![T::zero(); len],
            mask: vec![false; len],
            coverage: vec![T::zero(); len],
        }
    }

    /// Iterate over disjoint output rows of `cols` positions.
    pub fn rows_mut(&mut self, cols: usize) -> RowsMut<'_, T> {
        RowsMut {
            values: self.values.chunks_mut(cols),
            mask: self.mask.chunks_mut(cols),
            coverage: self.coverage.chunks_mut(cols),
        }
    }

    /// Number of masked positions.
    pub fn masked_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }
}

/// Mutable view of one output row.
#[derive(Debug)]
pub struct RowOutput<'a, T> {
    /// Row values.
    pub values: &'a mut [T],

    /// Row mask.
    pub mask: &'a mut [bool],

    /// Row coverage.
    pub coverage: &'a mut [T],
}

impl<T: Float> RowOutput<'_, T> {
    /// Resolve `tally` under `policy` and store the outcome at column `j`.
    #[inline]
    pub fn write(&mut self, j: usize, tally: &WindowTally<T>, policy: &MissingPolicy<T>) {
        match tally.resolve(policy) {
            Some(value) => {
                self.values[j] = value;
                self.mask[j] = false;
            }
            None => {
                self.values[j] = T::zero();
                self.mask[j] = true;
            }
        }
        self.coverage[j] = tally.coverage();
    }
}

/// Iterator over the rows of a [`ReduceOutput`].
#[derive(Debug)]
pub struct RowsMut<'a, T> {
    values: ChunksMut<'a, T>,
    mask: ChunksMut<'a, bool>,
    coverage: ChunksMut<'a, T>,
}

impl<'a, T> Iterator for RowsMut<'a, T> {
    type Item = RowOutput<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(RowOutput {
            values: self.values.next()?,
            mask: self.mask.next()?,
            coverage: self.coverage.next()?,
        })
    }
}
