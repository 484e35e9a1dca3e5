//! Missing-fraction policy shared by the 1D and 2D reducers.
//!
//! ## Purpose
//!
//! This module decides, for one output position, whether enough of its
//! window is present to produce a value, and if so what that value is. Both
//! reducers feed taps into a [`WindowTally`] and resolve it the same way.
//!
//! ## Design notes
//!
//! * **Eligible taps only**: The tally only sees in-bounds, nonzero-weight taps.
//! * **Strict threshold**: A position is masked when `missing / eligible > max_missing`;
//!   a fraction exactly equal to the threshold is still computed.
//! * **Degenerate windows**: No eligible taps means masked, never an error.
//! * **Full collapse**: A window with no valid taps is masked even at `max_missing == 1`.
//!
//! ## Key concepts
//!
//! * **Sum**: `sum(w * v)` over valid taps, no renormalization.
//! * **Average**: `sum(w * v) / sum(w)` over valid taps; masked if `sum(w) == 0`.
//!
//! ## Invariants
//!
//! * `valid <= eligible`.
//! * A resolved position never reads a missing value.

// External dependencies
use num_traits::Float;

// ============================================================================
// Reduction Mode
// ============================================================================

/// How valid taps of a window are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Plain convolution: weighted sum of the valid taps.
    #[default]
    Sum,

    /// Running mean: weighted sum renormalized by the weights actually used.
    /// The kernel is applied reversed.
    Average,
}

impl Reduction {
    /// Whether the kernel is reversed before use.
    #[inline]
    pub fn flips_kernel(&self) -> bool {
        matches!(self, Self::Average)
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum => "Convolution",
            Self::Average => "Running mean",
        }
    }
}

// ============================================================================
// Policy
// ============================================================================

/// Threshold and reduction mode applied to every window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissingPolicy<T> {
    /// Maximum tolerable fraction of missing eligible taps.
    pub max_missing: T,

    /// Reduction mode.
    pub reduction: Reduction,
}

impl<T: Float> MissingPolicy<T> {
    /// Create a policy.
    pub fn new(max_missing: T, reduction: Reduction) -> Self {
        Self {
            max_missing,
            reduction,
        }
    }
}

// ============================================================================
// Window Tally
// ============================================================================

/// Running counts and sums for a single output window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowTally<T> {
    /// Eligible taps seen (T).
    pub eligible: usize,

    /// Eligible taps with valid data (V).
    pub valid: usize,

    /// Sum of `weight * value` over valid taps.
    pub weighted_sum: T,

    /// Sum of `weight` over valid taps.
    pub weight_sum: T,
}

impl<T: Float> Default for WindowTally<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WindowTally<T> {
    /// Empty tally.
    #[inline]
    pub fn new() -> Self {
        Self {
            eligible: 0,
            valid: 0,
            weighted_sum: T::zero(),
            weight_sum: T::zero(),
        }
    }

    /// Record an eligible tap whose input is missing.
    #[inline]
    pub fn add_missing(&mut self) {
        self.eligible += 1;
    }

    /// Record an eligible tap with valid input `value` and kernel `weight`.
    #[inline]
    pub fn add_valid(&mut self, weight: T, value: T) {
        self.eligible += 1;
        self.valid += 1;
        self.weighted_sum = self.weighted_sum + weight * value;
        self.weight_sum = self.weight_sum + weight;
    }

    /// Fraction of eligible taps that are missing, `None` if there are none.
    #[inline]
    pub fn missing_fraction(&self) -> Option<T> {
        if self.eligible == 0 {
            return None;
        }
        let missing = T::from(self.eligible - self.valid)?;
        let eligible = T::from(self.eligible)?;
        Some(missing / eligible)
    }

    /// Fraction of eligible taps with valid data (0 when there are none).
    #[inline]
    pub fn coverage(&self) -> T {
        match self.missing_fraction() {
            Some(frac) => T::one() - frac,
            None => T::zero(),
        }
    }

    /// Apply `policy`: `Some(value)` if the position is computable, `None` if masked.
    #[inline]
    pub fn resolve(&self, policy: &MissingPolicy<T>) -> Option<T> {
        let frac = self.missing_fraction()?;
        if frac > policy.max_missing || self.valid == 0 {
            return None;
        }

        match policy.reduction {
            Reduction::Sum => Some(self.weighted_sum),
            Reduction::Average => {
                if self.weight_sum == T::zero() {
                    None
                } else {
                    Some(self.weighted_sum / self.weight_sum)
                }
            }
        }
    }
}
