//! Input abstractions for masked convolution.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for array inputs, allowing
//! `fit` to accept slices, vectors and `ndarray` arrays of any dimension
//! through a single interface. The same trait serves values, kernels and
//! missing masks.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Standard-layout data is borrowed directly.
//! * **Any layout**: Non-contiguous or transposed arrays are copied into
//!   row-major order instead of being rejected.
//!
//! ## Invariants
//!
//! * The flat buffer lists elements in row-major (logical) order.
//! * `product(shape) == flat.len()`.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.

// External dependencies
use ndarray::{ArrayBase, Data, Dimension};
use std::borrow::Cow;

/// Trait for types that can be used as array input.
pub trait ArrayInput<E: Copy> {
    /// Elements in row-major order, borrowed when already laid out that way.
    fn as_flat(&self) -> Cow<'_, [E]>;

    /// Extent of every dimension.
    fn dims(&self) -> Vec<usize>;
}

impl<E: Copy> ArrayInput<E> for [E] {
    fn as_flat(&self) -> Cow<'_, [E]> {
        Cow::Borrowed(self)
    }

    fn dims(&self) -> Vec<usize> {
        vec![self.len()]
    }
}

impl<E: Copy> ArrayInput<E> for Vec<E> {
    fn as_flat(&self) -> Cow<'_, [E]> {
        Cow::Borrowed(self.as_slice())
    }

    fn dims(&self) -> Vec<usize> {
        vec![self.len()]
    }
}

impl<E: Copy, S, D> ArrayInput<E> for ArrayBase<S, D>
where
    S: Data<Elem = E>,
    D: Dimension,
{
    fn as_flat(&self) -> Cow<'_, [E]> {
        match self.as_slice() {
            Some(slice) => Cow::Borrowed(slice),
            None => Cow::Owned(self.iter().copied().collect()),
        }
    }

    fn dims(&self) -> Vec<usize> {
        self.shape().to_vec()
    }
}
