//! Axis-leading layout transform for 1D convolution on N-D arrays.
//!
//! ## Purpose
//!
//! This module moves the convolution axis of a row-major N-D array to the
//! front and flattens every other dimension into a single trailing one,
//! producing an `(n, m)` table the 1D reducer can walk row by row. The
//! recorded [`AxisLayout`] inverts the transform exactly.
//!
//! ## Design notes
//!
//! * **Order-preserving**: Non-axis dimensions keep their relative order in the flattened column index.
//! * **Explicit bookkeeping**: The array is viewed as `(outer, n, inner)`; no generic stride walking.
//! * **Zero-copy identity**: When `axis == 0` the input buffer is borrowed, not copied.
//! * **Element-agnostic**: Works for values and masks alike (`E: Copy`).
//!
//! ## Key concepts
//!
//! For shape `[d0, .., d(k-1)]` and axis `a`:
//! `outer = d0 * .. * d(a-1)`, `n = d(a)`, `inner = d(a+1) * .. * d(k-1)`.
//! Element `(o, i, r)` of the input lands at row `i`, column `o * inner + r`.
//!
//! ## Invariants
//!
//! * `from_axis_leading(to_axis_leading(x, s, a).0, &layout) == x` exactly.
//! * `rows() * cols() == values.len()`.
//!
//! ## Non-goals
//!
//! * This module does not validate the axis or the shape (see `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::borrow::Cow;

// ============================================================================
// Layout Record
// ============================================================================

/// Everything needed to undo an axis-leading transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLayout {
    /// Original shape of the array.
    pub shape: Vec<usize>,

    /// Axis that was moved to the front.
    pub axis: usize,

    /// Product of the dimensions before `axis`.
    pub outer: usize,

    /// Product of the dimensions after `axis`.
    pub inner: usize,
}

impl AxisLayout {
    /// Describe the transform of an array with `shape` along `axis`.
    pub fn new(shape: &[usize], axis: usize) -> Self {
        let outer = shape[..axis].iter().product();
        let inner = shape[axis + 1..].iter().product();
        Self {
            shape: shape.to_vec(),
            axis,
            outer,
            inner,
        }
    }

    /// Length of the convolution axis (rows of the table).
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[self.axis]
    }

    /// Flattened size of all other dimensions (columns of the table).
    #[inline]
    pub fn cols(&self) -> usize {
        self.outer * self.inner
    }

    /// Whether the transform leaves the buffer untouched.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.outer == 1
    }

    /// Dimension order of the reordered array, e.g. `[2, 0, 1]` for axis 2 of a 3D array.
    pub fn permutation(&self) -> Vec<usize> {
        let ndim = self.shape.len();
        core::iter::once(self.axis)
            .chain((0..ndim).filter(|&d| d != self.axis))
            .collect()
    }
}

// ============================================================================
// Transform Functions
// ============================================================================

/// Reorder `values` so that `axis` leads, returning the `(n, m)` table and its layout.
pub fn to_axis_leading<'a, E: Copy>(
    values: &'a [E],
    shape: &[usize],
    axis: usize,
) -> (Cow<'a, [E]>, AxisLayout) {
    let layout = AxisLayout::new(shape, axis);
    if layout.is_identity() {
        return (Cow::Borrowed(values), layout);
    }

    log::debug!(
        "to_axis_leading: reorder shape {:?} to permutation {:?}",
        layout.shape,
        layout.permutation()
    );

    let (outer, n, inner) = (layout.outer, layout.rows(), layout.inner);
    let m = layout.cols();
    let mut table = Vec::with_capacity(values.len());

    for i in 0..n {
        for o in 0..outer {
            let start = (o * n + i) * inner;
            table.extend_from_slice(&values[start..start + inner]);
        }
    }
    debug_assert_eq!(table.len(), n * m);

    (Cow::Owned(table), layout)
}

/// Restore the original N-D order of a table produced by [`to_axis_leading`].
pub fn from_axis_leading<E: Copy>(table: Vec<E>, layout: &AxisLayout) -> Vec<E> {
    if layout.is_identity() {
        return table;
    }

    log::debug!(
        "from_axis_leading: restore shape {:?} from permutation {:?}",
        layout.shape,
        layout.permutation()
    );

    let (outer, n, inner) = (layout.outer, layout.rows(), layout.inner);
    let mut values = Vec::with_capacity(table.len());

    for o in 0..outer {
        for i in 0..n {
            let start = i * layout.cols() + o * inner;
            values.extend_from_slice(&table[start..start + inner]);
        }
    }

    values
}
