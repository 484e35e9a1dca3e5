//! Masked 2D windowed reduction.
//!
//! ## Purpose
//!
//! This module slides a 2D kernel over a 2D plane and applies the same
//! missing-fraction policy as the 1D reducer, with eligibility and edge
//! shrinkage applied on both axes.
//!
//! ## Design notes
//!
//! * **Centered**: Tap `(r, c)` of output `(i, j)` reads input
//!   `(i + r - rows / 2, j + c - cols / 2)`.
//! * **Separable bounds**: The in-bounds tap rectangle is the product of one
//!   row range and one column range.
//! * **Row-at-a-time**: Each call fills one output row, so rows can be
//!   distributed across threads.
//!
//! ## Invariants
//!
//! * Output has the same shape as the input plane.
//! * Only eligible taps (nonzero weight, both coordinates in bounds) reach the tally.
//!
//! ## Non-goals
//!
//! * This module does not support kernels of more than two dimensions.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::plane::{Plane, ReduceOutput, RowOutput, Taps};
use crate::math::coverage::{MissingPolicy, WindowTally};
use crate::primitives::window::TapRange;

// ============================================================================
// Row Reducer
// ============================================================================

/// Reduce output row `i` of a 2D pass into `out`.
pub fn reduce_row_2d<T: Float>(
    plane: &Plane<'_, T>,
    taps: &Taps<'_, T>,
    policy: &MissingPolicy<T>,
    i: usize,
    mut out: RowOutput<'_, T>,
) {
    let row_range = TapRange::centered(i, taps.rows, plane.rows);

    for j in 0..plane.cols {
        let col_range = TapRange::centered(j, taps.cols, plane.cols);
        let mut tally = WindowTally::new();

        for r in row_range.start..row_range.end {
            let src_row = row_range.source(i, r) * plane.cols;
            let tap_row = r * taps.cols;

            for c in col_range.start..col_range.end {
                if !taps.active[tap_row + c] {
                    continue;
                }

                let idx = src_row + col_range.source(j, c);
                if plane.missing[idx] {
                    tally.add_missing();
                } else {
                    tally.add_valid(taps.weights[tap_row + c], plane.values[idx]);
                }
            }
        }

        out.write(j, &tally, policy);
    }
}

// ============================================================================
// Sequential Pass
// ============================================================================

/// Reduce every row of `plane` sequentially.
pub fn reduce_pass_2d<T: Float>(
    plane: &Plane<'_, T>,
    taps: &Taps<'_, T>,
    policy: &MissingPolicy<T>,
    out: &mut ReduceOutput<T>,
) {
    for (i, row) in out.rows_mut(plane.cols).enumerate() {
        reduce_row_2d(plane, taps, policy, i, row);
    }
}
