//! Parallel execution engine for masked windowed reductions.
//!
//! ## Purpose
//!
//! This module provides the parallel reducer passes that are injected into
//! the `maskconv` crate's execution engine. Output rows are independent, so
//! they are distributed across CPU cores with no synchronization beyond the
//! final join.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements for the sequential 1D and 2D passes.
//! * **Parallelism**: Uses `rayon` to split the output buffers into disjoint rows.
//! * **Optimization**: Reuses the per-column tally buffer per worker in the 1D pass.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Row Parallelism**: Each worker fills whole output rows via the core row reducers.
//! * **Integration**: Plugs into the `maskconv` executor via the `ReducePassFn` hook.
//!
//! ## Invariants
//!
//! * Results are identical to the sequential passes, bit for bit.
//! * Output buffers have the same length as the plane.
//!
//! ## Non-goals
//!
//! * This module does not mask values or reorder axes (handled by `maskconv` adapters).
//! * This module does not validate input data (handled by `validator`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
#[cfg(feature = "cpu")]
use num_traits::Float;

// Export dependencies from maskconv crate
#[cfg(feature = "cpu")]
use maskconv::internals::algorithms::plane::{Plane, ReduceOutput, RowOutput, Taps};
#[cfg(feature = "cpu")]
use maskconv::internals::algorithms::reduce1d::reduce_row_1d;
#[cfg(feature = "cpu")]
use maskconv::internals::algorithms::reduce2d::reduce_row_2d;
#[cfg(feature = "cpu")]
use maskconv::internals::math::coverage::MissingPolicy;

// ============================================================================
// Parallel Reducer Passes
// ============================================================================

/// Reduce every row of a 1D pass in parallel.
#[cfg(feature = "cpu")]
pub fn reduce_pass_1d_parallel<T>(
    plane: &Plane<'_, T>,
    taps: &Taps<'_, T>,
    policy: &MissingPolicy<T>,
    out: &mut ReduceOutput<T>,
) where
    T: Float + Send + Sync,
{
    let m = plane.cols;
    if plane.is_empty() {
        return;
    }

    out.values
        .par_chunks_mut(m)
        .zip(out.mask.par_chunks_mut(m))
        .zip(out.coverage.par_chunks_mut(m))
        .enumerate()
        .for_each_init(
            || Vec::with_capacity(m),
            |scratch, (i, ((values, mask), coverage))| {
                let row = RowOutput {
                    values,
                    mask,
                    coverage,
                };
                reduce_row_1d(plane, taps, policy, i, scratch, row);
            },
        );
}

/// Reduce every row of a 2D pass in parallel.
#[cfg(feature = "cpu")]
pub fn reduce_pass_2d_parallel<T>(
    plane: &Plane<'_, T>,
    taps: &Taps<'_, T>,
    policy: &MissingPolicy<T>,
    out: &mut ReduceOutput<T>,
) where
    T: Float + Send + Sync,
{
    let m = plane.cols;
    if plane.is_empty() {
        return;
    }

    out.values
        .par_chunks_mut(m)
        .zip(out.mask.par_chunks_mut(m))
        .zip(out.coverage.par_chunks_mut(m))
        .enumerate()
        .for_each(|(i, ((values, mask), coverage))| {
            let row = RowOutput {
                values,
                mask,
                coverage,
            };
            reduce_row_2d(plane, taps, policy, i, row);
        });
}
