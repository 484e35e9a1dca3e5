//! Output types for masked convolution operations.
//!
//! ## Purpose
//!
//! This module defines the `MaskedResult` struct returned by every
//! operation: the reduced values, their missing mask, the array shape and
//! optional per-position coverage.
//!
//! ## Design notes
//!
//! * **Masked pairs**: Values and mask are kept side by side; masked values are 0.
//! * **Same shape**: Results always have the input shape (edges shrink, never drop).
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `values.len() == mask.len() == product(shape)`.
//! * `coverage`, when present, has the same length and lies in `[0, 1]`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::coverage::Reduction;

// ============================================================================
// Result Structure
// ============================================================================

/// Masked output of a convolution or running mean.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedResult<T> {
    /// Reduced values in row-major order (0 where masked).
    pub values: Vec<T>,

    /// `true` where too much of the window was missing.
    pub mask: Vec<bool>,

    /// Shape of the result (equal to the input shape).
    pub shape: Vec<usize>,

    /// Fraction of eligible taps with valid data at each position.
    pub coverage: Option<Vec<T>>,

    /// Axis the 1D kernel was applied along (`None` for 2D operations).
    pub axis: Option<usize>,

    /// Reduction mode used.
    pub reduction: Reduction,

    /// Missing-fraction threshold used.
    pub max_missing: T,

    /// Number of missing values in the input.
    pub input_missing: usize,
}

impl<T: Float> MaskedResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the result holds no positions.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of masked positions.
    pub fn masked_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Number of unmasked positions.
    pub fn valid_count(&self) -> usize {
        self.len() - self.masked_count()
    }

    /// Whether position `idx` (flat, row-major) is masked.
    pub fn is_masked(&self, idx: usize) -> bool {
        self.mask[idx]
    }

    /// Value at flat position `idx`, `None` if masked.
    pub fn get(&self, idx: usize) -> Option<T> {
        if self.mask[idx] {
            None
        } else {
            Some(self.values[idx])
        }
    }

    /// All values as `Option`s, `None` where masked.
    pub fn masked_values(&self) -> Vec<Option<T>> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }

    /// Values with masked positions replaced by NaN.
    pub fn filled_with_nan(&self) -> Vec<T> {
        self.values
            .iter()
            .zip(self.mask.iter())
            .map(|(&v, &m)| if m { T::nan() } else { v })
            .collect()
    }

    /// Check if coverage was recorded.
    pub fn has_coverage(&self) -> bool {
        self.coverage.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for MaskedResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Operation:   {}", self.reduction.name())?;
        writeln!(f, "  Shape:       {:?}", self.shape)?;
        if let Some(axis) = self.axis {
            writeln!(f, "  Axis:        {}", axis)?;
        }
        writeln!(f, "  Max missing: {}", self.max_missing)?;
        writeln!(f, "  Input missing:  {}", self.input_missing)?;
        writeln!(f, "  Output masked:  {}", self.masked_count())?;
        writeln!(f)?;

        writeln!(f, "Values:")?;

        let has_coverage = self.coverage.is_some();
        write!(f, "{:>8} {:>12}", "Index", "Value")?;
        if has_coverage {
            write!(f, " {:>10}", "Coverage")?;
        }
        writeln!(f)?;

        let line_width = 21 + if has_coverage { 11 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 positions)
        let n = self.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            if self.mask[idx] {
                write!(f, "{:>8} {:>12}", idx, "--")?;
            } else {
                write!(f, "{:>8} {:>12.6}", idx, self.values[idx])?;
            }

            if let Some(coverage) = &self.coverage {
                write!(f, " {:>10.4}", coverage[idx])?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
