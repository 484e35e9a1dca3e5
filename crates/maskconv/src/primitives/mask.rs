//! Missing-value masks for convolution input.
//!
//! ## Purpose
//!
//! This module turns an array with an optional missing-value indicator into
//! the pair the reducers work on: a same-length missing flag per element and
//! a cleaned copy of the values in which missing entries are replaced by zero.
//!
//! ## Design notes
//!
//! * **Two sources**: An element is missing if it is NaN or flagged by the caller's mask.
//! * **Neutral fill**: Missing entries become `0` so they can never leak into a sum.
//! * **Infinities are data**: Only NaN is treated as missing.
//!
//! ## Invariants
//!
//! * `missing_mask(v, m).len() == v.len()`.
//! * Without an indicator and without NaNs the mask is all `false`.
//!
//! ## Non-goals
//!
//! * This module does not check that the indicator has the right length (see `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Mask Construction
// ============================================================================

/// Build the missing flags for `values`: `true` where the value is NaN or
/// where `validity` marks it as missing.
pub fn missing_mask<T: Float>(values: &[T], validity: Option<&[bool]>) -> Vec<bool> {
    match validity {
        Some(flags) => values
            .iter()
            .zip(flags.iter())
            .map(|(v, &flagged)| flagged || v.is_nan())
            .collect(),
        None => values.iter().map(|v| v.is_nan()).collect(),
    }
}

/// Copy `values`, replacing every entry flagged in `missing` by zero.
pub fn clean_values<T: Float>(values: &[T], missing: &[bool]) -> Vec<T> {
    values
        .iter()
        .zip(missing.iter())
        .map(|(&v, &m)| if m { T::zero() } else { v })
        .collect()
}

/// Missing flags and cleaned values for one input array.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedValues<T> {
    /// Values with missing entries set to zero.
    pub values: Vec<T>,

    /// `true` where the original value is missing.
    pub missing: Vec<bool>,
}

impl<T: Float> MaskedValues<T> {
    /// Split `values` and an optional indicator into cleaned values and flags.
    pub fn build(values: &[T], validity: Option<&[bool]>) -> Self {
        let missing = missing_mask(values, validity);
        let values = clean_values(values, &missing);
        Self { values, missing }
    }

    /// Number of missing entries.
    pub fn missing_count(&self) -> usize {
        self.missing.iter().filter(|&&m| m).count()
    }
}
