//! Execution engine for masked windowed reductions.
//!
//! ## Purpose
//!
//! This module runs a reducer pass over a prepared plane and kernel. It
//! allocates the output buffers, selects the pass (the built-in sequential
//! reducer or an injected one, e.g. a parallel pass from an extension crate)
//! and reports what it did through `log`.
//!
//! ## Design notes
//!
//! * **Injectable passes**: Extension crates plug in through [`ReducePassFn`].
//! * **Fresh outputs**: Every run allocates its own output; nothing is shared.
//! * **Stateless**: The executor holds no state between runs.
//!
//! ## Invariants
//!
//! * Output length equals the plane length.
//! * Custom passes must produce exactly what the sequential pass would.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not build masks or reorder axes (handled by adapters).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::plane::{Plane, ReduceOutput, Taps};
use crate::algorithms::reduce1d::reduce_pass_1d;
use crate::algorithms::reduce2d::reduce_pass_2d;
use crate::math::coverage::MissingPolicy;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom reducer pass.
#[doc(hidden)]
pub type ReducePassFn<T> = fn(
    &Plane<'_, T>,         // cleaned values and missing flags
    &Taps<'_, T>,          // kernel weights and eligibility flags
    &MissingPolicy<T>,     // threshold and reduction mode
    &mut ReduceOutput<T>,  // output buffers
);

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a single reducer run.
#[derive(Debug, Clone, Copy)]
pub struct ReduceConfig<T> {
    /// Threshold and reduction mode.
    pub policy: MissingPolicy<T>,

    /// Custom pass replacing the sequential reducer.
    #[doc(hidden)]
    pub custom_reduce_pass: Option<ReducePassFn<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for the 1D and 2D reducers.
pub struct MaskedExecutor;

impl MaskedExecutor {
    /// Run the 1D reducer over the rows of `plane`.
    pub fn run_1d<T: Float>(
        plane: &Plane<'_, T>,
        taps: &Taps<'_, T>,
        config: &ReduceConfig<T>,
    ) -> ReduceOutput<T> {
        let pass = config.custom_reduce_pass.unwrap_or(reduce_pass_1d::<T>);
        Self::run("1d", pass, plane, taps, config)
    }

    /// Run the 2D reducer over `plane`.
    pub fn run_2d<T: Float>(
        plane: &Plane<'_, T>,
        taps: &Taps<'_, T>,
        config: &ReduceConfig<T>,
    ) -> ReduceOutput<T> {
        let pass = config.custom_reduce_pass.unwrap_or(reduce_pass_2d::<T>);
        Self::run("2d", pass, plane, taps, config)
    }

    fn run<T: Float>(
        label: &str,
        pass: ReducePassFn<T>,
        plane: &Plane<'_, T>,
        taps: &Taps<'_, T>,
        config: &ReduceConfig<T>,
    ) -> ReduceOutput<T> {
        log::debug!(
            "reduce {}: {}x{} plane, {}x{} kernel, {} ({} pass)",
            label,
            plane.rows,
            plane.cols,
            taps.rows,
            taps.cols,
            config.policy.reduction.name(),
            if config.custom_reduce_pass.is_some() {
                "custom"
            } else {
                "sequential"
            }
        );

        let mut output = ReduceOutput::new(plane.len());
        pass(plane, taps, &config.policy, &mut output);

        log::debug!(
            "reduce {}: {} of {} positions masked",
            label,
            output.masked_count(),
            plane.len()
        );

        output
    }
}
