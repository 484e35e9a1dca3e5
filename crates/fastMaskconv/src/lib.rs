//! # Fast masked convolution and running means
//!
//! Parallel, `ndarray`-aware extension of the [`maskconv`] crate. The
//! numerics are exactly those of `maskconv` (same missing-fraction policy,
//! same edge handling, same kernel orientation); this crate adds:
//!
//! - **Parallel execution**: output rows are reduced on all CPU cores via
//!   [rayon](https://docs.rs/rayon), on by default.
//! - **ndarray inputs**: `fit` accepts `&[T]`, `Vec<T>` or any `ndarray`
//!   array. The shape is taken from the array itself, and non-contiguous
//!   views are copied into row-major order.
//! - **ndarray outputs**: results convert back to `ArrayD` via [`IntoArrays`](prelude::IntoArrays).
//!
//! ## Quick Start
//!
//! ```rust
//! use fastMaskconv::prelude::*;
//! use ndarray::{array, Array2};
//!
//! let field: Array2<f64> = array![
//!     [1.0, 2.0, 3.0],
//!     [4.0, f64::NAN, 6.0],
//!     [7.0, 8.0, 9.0],
//! ];
//! let kernel: Array2<f64> = Array2::from_elem((3, 3), 1.0);
//!
//! let model = MaskedConv::new()
//!     .max_missing(0.25)
//!     .reduction(Average)
//!     .adapter(Grid)
//!     .build()?;
//!
//! let result = model.fit(&field, &kernel)?;
//! let (values, mask) = result.into_arrays()?;
//!
//! assert_eq!(values.shape(), &[3, 3]);
//! assert!((values[&[1, 1][..]] - 5.0).abs() < 1e-12);
//! assert!(!mask[&[0, 0][..]]);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Along an axis of an N-D array
//!
//! ```rust
//! use fastMaskconv::prelude::*;
//! use ndarray::Array3;
//!
//! let cube = Array3::<f64>::ones((4, 5, 6));
//! let kernel = vec![1.0, 1.0, 1.0];
//!
//! // Running mean along the last axis
//! let result = run_mean1d(&cube, &kernel, 2, 0.5)?;
//!
//! assert_eq!(result.shape, vec![4, 5, 6]);
//! assert_eq!(result.masked_count(), 0);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Sequential execution
//!
//! `.parallel(false)` on the adapter builder runs the `maskconv` sequential
//! reducers; results are identical either way. Building without the default
//! `cpu` feature removes the `rayon` dependency altogether.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel reducer passes.
mod engine;

// Layer 5: Adapters - parallel axis and grid adapters.
mod adapters;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

// Standard fastMaskconv prelude.
pub mod prelude {
    pub use crate::api::{
        convolve1d, convolve2d, run_mean1d, run_mean2d,
        Adapter::{Axis, Grid},
        ConvolveError, IntoArrays, MaskedConvBuilder as MaskedConv, MaskedResult,
        Reduction::{Average, Sum},
    };
    pub use crate::input::ArrayInput;
}

/// Normalized smoothing windows for use as kernels.
pub use maskconv::windows;

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
