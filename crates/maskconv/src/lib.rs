//! # maskconv: windowed convolution and running means with missing data
//!
//! Convolution and running-mean smoothing over arrays that contain missing
//! values (NaN or an explicit mask), with control over how much of each
//! window may be missing before the output is suppressed.
//!
//! ## What does it do?
//!
//! For every output position the kernel is centered on that position and
//! only its **eligible taps** are considered: taps with a nonzero weight that
//! fall inside the array. If the fraction of eligible taps whose input is
//! missing exceeds `max_missing`, the output is masked. Otherwise it is
//! computed from the valid taps alone:
//!
//! - **Convolution** (`Sum`): the weighted sum of the valid taps.
//! - **Running mean** (`Average`): the weighted sum divided by the weights
//!   actually used, so a partly missing window still yields a mean of what is
//!   present. The kernel is applied reversed.
//!
//! Taps that fall outside the array are not counted as missing: the window
//! simply shrinks towards the edges.
//!
//! ## Quick Start
//!
//! ### 1D running mean
//!
//! ```rust
//! use maskconv::prelude::*;
//!
//! let values = [1.0, 2.0, f64::NAN, 4.0];
//! let kernel = [1.0, 1.0, 1.0];
//!
//! let model = MaskedConv::new()
//!     .max_missing(0.5)     // Tolerate up to half of each window missing
//!     .reduction(Average)   // Running mean
//!     .adapter(Axis)
//!     .build()?;
//!
//! let result = model.fit(&Slab::from_slice(&values), &Kernel::line(&kernel))?;
//!
//! assert_eq!(result.get(2), Some(3.0)); // (2 + 4) / 2
//! assert_eq!(result.masked_count(), 0);
//! println!("{}", result);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Along one axis of an N-D array
//!
//! ```rust
//! use maskconv::prelude::*;
//!
//! // 2 x 3 array, convolve along the columns' axis (axis 1)
//! let values = [1.0, 2.0, 3.0, 10.0, 20.0, 30.0];
//! let slab = Slab::new(&values, &[2, 3]);
//! let kernel = [1.0, 1.0, 1.0];
//!
//! let result = convolve1d(&slab, &Kernel::line(&kernel), 1, 0.5)?;
//!
//! assert_eq!(result.shape, vec![2, 3]);
//! assert_eq!(result.values, vec![3.0, 6.0, 5.0, 30.0, 60.0, 50.0]);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### 2D running mean with an explicit mask
//!
//! ```rust
//! use maskconv::prelude::*;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! let missing = [false, false, false, false, true, false, false, false, false];
//! let slab = Slab::new(&values, &[3, 3]).with_missing(&missing);
//! let kernel = maskconv::windows::uniform::<f64>(3);
//! let kernel2d = maskconv::windows::outer(&kernel, &kernel);
//!
//! let result = run_mean2d(&slab, &Kernel::grid(&kernel2d, 3, 3), 0.5)?;
//!
//! // The center is averaged from its eight valid neighbours
//! assert!((result.values[4] - 5.0).abs() < 1e-12);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<MaskedResult<T>, ConvolveError>`. Errors
//! are raised before any computation (wrong kernel dimensionality, axis out
//! of range, non-2D input for a 2D operation, inconsistent shapes, invalid
//! `max_missing`). A window without eligible taps is not an error; its
//! position is simply masked.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! maskconv = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate emits `log` records at debug level (axis reordering, reducer
//! dispatch, number of masked positions). It never installs a logger.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - masked windowed reducers.
mod algorithms;

// Layer 4: Engine - validation and execution control.
mod engine;

// Layer 5: Adapters - 1D (axis) and 2D (grid) orchestration.
mod adapters;

// High-level fluent API.
mod api;

// Standard maskconv prelude.
pub mod prelude {
    pub use crate::api::{
        convolve1d, convolve2d, run_mean1d, run_mean2d,
        Adapter::{Axis, Grid},
        AxisConv, ConvolveError, GridConv, Kernel, MaskedConvBuilder as MaskedConv, MaskedResult,
        Reduction::{Average, Sum},
        Slab,
    };
}

/// Normalized smoothing windows for use as kernels.
pub mod windows {
    pub use crate::math::kernel::{gaussian, outer, triangle, uniform};
}

/// Missing-value masks and axis-leading layout transforms.
pub mod transform {
    pub use crate::primitives::layout::{from_axis_leading, to_axis_leading, AxisLayout};
    pub use crate::primitives::mask::{clean_values, missing_mask};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
