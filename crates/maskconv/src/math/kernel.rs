//! Convolution kernel utilities.
//!
//! ## Purpose
//!
//! This module derives the per-tap eligibility flags the reducers need,
//! flips kernels for running means, and generates common normalized
//! smoothing windows.
//!
//! ## Design notes
//!
//! * **Zero taps**: A weight of exactly zero is inactive; it counts neither as
//!   an eligible tap nor as valid data.
//! * **Flipping**: Reversing a row-major buffer reverses every axis at once, so
//!   the same routine flips 1D and 2D kernels.
//! * **Normalization**: Generated windows sum to one.
//!
//! ## Key concepts
//!
//! | Window    | Weight at tap k (before normalization) |
//! |-----------|----------------------------------------|
//! | Uniform   | 1                                      |
//! | Triangle  | min(k + 1, len - k)                    |
//! | Gaussian  | exp(-x^2 / (2 sigma^2)), x = k - (len - 1) / 2 |
//!
//! ## Non-goals
//!
//! * This module does not validate kernels against an operation (see `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ConvolveError;

// ============================================================================
// Tap Flags and Orientation
// ============================================================================

/// `true` for every tap whose weight is nonzero.
pub fn kernel_flags<T: Float>(weights: &[T]) -> Vec<bool> {
    weights.iter().map(|&w| w != T::zero()).collect()
}

/// Reverse the kernel along all of its axes.
pub fn flip<T: Copy>(weights: &[T]) -> Vec<T> {
    weights.iter().rev().copied().collect()
}

// ============================================================================
// Window Generators
// ============================================================================

/// Boxcar window of `len` equal weights.
pub fn uniform<T: Float>(len: usize) -> Vec<T> {
    normalized((0..len).map(|_| T::one()).collect())
}

/// Triangular window peaking at the center.
pub fn triangle<T: Float>(len: usize) -> Vec<T> {
    normalized(
        (0..len)
            .map(|k| T::from((k + 1).min(len - k)).unwrap_or_else(T::one))
            .collect(),
    )
}

/// Gaussian window of standard deviation `sigma` (in taps).
pub fn gaussian<T: Float>(len: usize, sigma: T) -> Result<Vec<T>, ConvolveError> {
    if !sigma.is_finite() || sigma <= T::zero() {
        return Err(ConvolveError::InvalidInput(format!(
            "gaussian sigma must be positive and finite, got {}",
            sigma.to_f64().unwrap_or(f64::NAN)
        )));
    }

    let two = T::one() + T::one();
    let mid = T::from(len.saturating_sub(1)).unwrap_or_else(T::zero) / two;
    let denom = two * sigma * sigma;

    Ok(normalized(
        (0..len)
            .map(|k| {
                let x = T::from(k).unwrap_or_else(T::zero) - mid;
                (-(x * x) / denom).exp()
            })
            .collect(),
    ))
}

/// Separable 2D kernel `rows[r] * cols[c]`, row-major.
pub fn outer<T: Float>(rows: &[T], cols: &[T]) -> Vec<T> {
    rows.iter()
        .flat_map(|&r| cols.iter().map(move |&c| r * c))
        .collect()
}

// Scale weights to sum to one (left untouched if the sum is zero).
fn normalized<T: Float>(mut weights: Vec<T>) -> Vec<T> {
    let total = weights.iter().fold(T::zero(), |acc, &w| acc + w);
    if total != T::zero() {
        weights.iter_mut().for_each(|w| *w = *w / total);
    }
    weights
}
