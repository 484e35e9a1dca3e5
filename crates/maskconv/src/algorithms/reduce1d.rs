//! Masked 1D windowed reduction.
//!
//! ## Purpose
//!
//! This module slides a 1D kernel down the rows of an `(n, m)` plane,
//! independently for every column, and applies the missing-fraction policy
//! at each output position. The plane is the axis-leading table of an N-D
//! array, so rows are positions along the convolution axis and columns are
//! all other dimensions flattened.
//!
//! ## Design notes
//!
//! * **Centered**: Tap `k` of output row `i` reads input row `i + k - len / 2`.
//! * **Edge shrinkage**: Out-of-bounds taps are skipped, not counted as missing.
//! * **Row-at-a-time**: Each call fills one output row, walking the kernel once
//!   and updating one tally per column, so input rows are read contiguously.
//! * **Scratch reuse**: Per-column tallies live in a caller-owned buffer.
//!
//! ## Invariants
//!
//! * Output has the same `(n, m)` shape as the input plane.
//! * Only eligible taps (nonzero weight, in bounds) reach the tally.
//!
//! ## Non-goals
//!
//! * This module does not reorder axes (see `layout`) or flip kernels (see `kernel`).
//! * This module does not parallelize; parallel passes call [`reduce_row_1d`] per row.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::plane::{Plane, ReduceOutput, RowOutput, Taps};
use crate::math::coverage::{MissingPolicy, WindowTally};
use crate::primitives::window::TapRange;

// ============================================================================
// Row Reducer
// ============================================================================

/// Reduce output row `i` of a 1D pass into `out`.
///
/// `scratch` is resized to the number of columns and overwritten.
pub fn reduce_row_1d<T: Float>(
    plane: &Plane<'_, T>,
    taps: &Taps<'_, T>,
    policy: &MissingPolicy<T>,
    i: usize,
    scratch: &mut Vec<WindowTally<T>>,
    mut out: RowOutput<'_, T>,
) {
    let m = plane.cols;
    let range = TapRange::centered(i, taps.rows, plane.rows);

    scratch.clear();
    scratch.resize(m, WindowTally::new());

    for k in range.start..range.end {
        if !taps.active[k] {
            continue;
        }

        let weight = taps.weights[k];
        let start = range.source(i, k) * m;
        let values = &plane.values[start..start + m];
        let missing = &plane.missing[start..start + m];

        for ((tally, &value), &is_missing) in scratch.iter_mut().zip(values).zip(missing) {
            if is_missing {
                tally.add_missing();
            } else {
                tally.add_valid(weight, value);
            }
        }
    }

    for (j, tally) in scratch.iter().enumerate() {
        out.write(j, tally, policy);
    }
}

// ============================================================================
// Sequential Pass
// ============================================================================

/// Reduce every row of `plane` sequentially.
pub fn reduce_pass_1d<T: Float>(
    plane: &Plane<'_, T>,
    taps: &Taps<'_, T>,
    policy: &MissingPolicy<T>,
    out: &mut ReduceOutput<T>,
) {
    let mut scratch = Vec::with_capacity(plane.cols);
    for (i, row) in out.rows_mut(plane.cols).enumerate() {
        reduce_row_1d(plane, taps, policy, i, &mut scratch, row);
    }
}
