#![cfg(feature = "dev")]
//! Tests for the building blocks behind the public operations.
//!
//! These tests verify the layers below the adapters directly:
//! - Missing-value masks and value cleaning
//! - The axis-leading layout transform and its inverse
//! - Window generators and kernel orientation
//! - The 1D and 2D reducers and the executor's pass hook
//! - The validator
//!
//! ## Test Organization
//!
//! 1. **Masks**
//! 2. **Layout**
//! 3. **Kernels**
//! 4. **Reducers**
//! 5. **Executor**
//! 6. **Validator**

use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::borrow::Cow;

use maskconv::internals::algorithms::plane::{Plane, ReduceOutput, Taps};
use maskconv::internals::algorithms::reduce1d::reduce_pass_1d;
use maskconv::internals::algorithms::reduce2d::reduce_pass_2d;
use maskconv::internals::engine::executor::{MaskedExecutor, ReduceConfig};
use maskconv::internals::engine::validator::Validator;
use maskconv::internals::math::coverage::{MissingPolicy, Reduction};
use maskconv::internals::math::kernel::{flip, kernel_flags};
use maskconv::internals::primitives::errors::ConvolveError;
use maskconv::internals::primitives::mask::MaskedValues;
use maskconv::internals::primitives::slab::{Kernel, Slab};
use maskconv::prelude::run_mean1d;
use maskconv::transform::{
    clean_values, from_axis_leading, missing_mask, to_axis_leading, AxisLayout,
};
use maskconv::windows::{gaussian, outer, triangle, uniform};

// ============================================================================
// Mask Tests
// ============================================================================

/// Test that the mask is all false without NaN or validity flags.
#[test]
fn test_missing_mask_clean_input() {
    let values = [1.0, 2.0, f64::INFINITY];
    assert_eq!(missing_mask(&values, None), vec![false, false, false]);
}

/// Test that NaN and flagged entries are both missing.
#[test]
fn test_missing_mask_nan_and_flags() {
    let values = [f64::NAN, 2.0, 3.0, 4.0];
    let flags = [false, false, true, false];

    assert_eq!(
        missing_mask(&values, Some(&flags[..])),
        vec![true, false, true, false]
    );
}

/// Test that missing entries are zeroed for the reducers.
#[test]
fn test_clean_values() {
    let values = [f64::NAN, 2.0, 7.0];
    let missing = [true, false, true];

    assert_eq!(clean_values(&values, &missing), vec![0.0, 2.0, 0.0]);
}

/// Test the combined mask builder.
#[test]
fn test_masked_values_build() {
    let values = [1.0, f64::NAN, 3.0];
    let masked = MaskedValues::build(&values, None);

    assert_eq!(masked.values, vec![1.0, 0.0, 3.0]);
    assert_eq!(masked.missing, vec![false, true, false]);
    assert_eq!(masked.missing_count(), 1);
}

// ============================================================================
// Layout Tests
// ============================================================================

/// Test that the leading axis borrows the input unchanged.
#[test]
fn test_axis_leading_identity_borrows() {
    let values = [1, 2, 3, 4, 5, 6];
    let (table, layout) = to_axis_leading(&values, &[2, 3], 0);

    assert!(matches!(table, Cow::Borrowed(_)));
    assert!(layout.is_identity());
    assert_eq!((layout.rows(), layout.cols()), (2, 3));
}

/// Test the table produced for the trailing axis of a 2D array.
#[test]
fn test_axis_leading_transposes_2d() {
    let values = [1, 2, 3, 4, 5, 6];
    let (table, layout) = to_axis_leading(&values, &[2, 3], 1);

    assert_eq!(&*table, &[1, 4, 2, 5, 3, 6]);
    assert_eq!((layout.rows(), layout.cols()), (3, 2));
    assert_eq!(layout.permutation(), vec![1, 0]);
}

/// Test that the inverse restores every axis of a 4D array exactly.
#[test]
fn test_axis_leading_round_trip() {
    let shape = [2, 3, 1, 4];
    let values: Vec<f64> = (0..24).map(|v| v as f64 * 0.5 - 3.0).collect();

    for axis in 0..shape.len() {
        let (table, layout) = to_axis_leading(&values, &shape, axis);
        assert_eq!(table.len(), values.len());
        assert_eq!(layout.rows(), shape[axis]);

        let restored = from_axis_leading(table.into_owned(), &layout);
        assert_eq!(restored, values, "axis {}", axis);
    }
}

/// Test the layout bookkeeping for a middle axis.
#[test]
fn test_axis_layout_middle() {
    let layout = AxisLayout::new(&[2, 3, 4], 1);

    assert_eq!(layout.rows(), 3);
    assert_eq!(layout.cols(), 8);
    assert!(!layout.is_identity());
    assert_eq!(layout.permutation(), vec![1, 0, 2]);
}

// ============================================================================
// Kernel Tests
// ============================================================================

/// Test the uniform window.
#[test]
fn test_uniform_window() {
    let w: Vec<f64> = uniform(4);
    assert_eq!(w, vec![0.25; 4]);
}

/// Test the triangular window for odd and even lengths.
#[test]
fn test_triangle_window() {
    let odd: Vec<f64> = triangle(3);
    for (w, e) in odd.iter().zip([0.25, 0.5, 0.25]) {
        assert_relative_eq!(*w, e, epsilon = 1e-12);
    }

    let even: Vec<f64> = triangle(4);
    for (w, e) in even.iter().zip([1.0, 2.0, 2.0, 1.0]) {
        assert_relative_eq!(*w, e / 6.0, epsilon = 1e-12);
    }
}

/// Test the Gaussian window.
#[test]
fn test_gaussian_window() {
    let w: Vec<f64> = gaussian(5, 1.0).unwrap();

    assert_relative_eq!(w.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(w[0], w[4], epsilon = 1e-15);
    assert_relative_eq!(w[1], w[3], epsilon = 1e-15);
    assert!(w[2] > w[1] && w[1] > w[0]);
    assert_relative_eq!(w[1] / w[2], (-0.5f64).exp(), epsilon = 1e-12);
}

/// Test that a non-positive sigma is rejected.
#[test]
fn test_gaussian_invalid_sigma() {
    assert!(matches!(
        gaussian::<f64>(5, 0.0),
        Err(ConvolveError::InvalidInput(_))
    ));
    assert!(gaussian::<f64>(5, f64::NAN).is_err());
}

/// Test the separable outer product.
#[test]
fn test_outer_product() {
    let k = outer(&[1.0, 2.0], &[3.0, 4.0, 5.0]);
    assert_eq!(k, vec![3.0, 4.0, 5.0, 6.0, 8.0, 10.0]);
}

/// Test kernel flags and reversal.
#[test]
fn test_flags_and_flip() {
    let w = [0.0, 1.5, -2.0, 0.0];

    assert_eq!(kernel_flags(&w), vec![false, true, true, false]);
    assert_eq!(flip(&w), vec![0.0, -2.0, 1.5, 0.0]);

    // Reversing a row-major 2 x 2 grid flips both axes
    assert_eq!(flip(&[1, 2, 3, 4]), vec![4, 3, 2, 1]);
}

// ============================================================================
// Reducer Tests
// ============================================================================

fn reduce_1d(
    values: &[f64],
    missing: &[bool],
    weights: &[f64],
    policy: MissingPolicy<f64>,
) -> ReduceOutput<f64> {
    let active = kernel_flags(weights);
    let plane = Plane::new(values, missing, values.len(), 1);
    let taps = Taps::line(weights, &active);
    let mut out = ReduceOutput::new(plane.len());
    reduce_pass_1d(&plane, &taps, &policy, &mut out);
    out
}

/// Test the 1D reducer on an array with one gap.
#[test]
fn test_reduce_1d_sum_and_average() {
    let values = [1.0, 2.0, 0.0, 4.0];
    let missing = [false, false, true, false];
    let weights = [1.0, 1.0, 1.0];

    let sum = reduce_1d(&values, &missing, &weights, MissingPolicy::new(0.5, Reduction::Sum));
    assert_eq!(sum.values, vec![3.0, 3.0, 6.0, 4.0]);
    assert_eq!(sum.mask, vec![false; 4]);

    let avg = reduce_1d(&values, &missing, &weights, MissingPolicy::new(0.5, Reduction::Average));
    assert_eq!(avg.values, vec![1.5, 1.5, 3.0, 4.0]);
}

/// Test that the running mean equals the unreversed average reducer on the reversed kernel.
#[test]
fn test_running_mean_equals_average_on_reversed_kernel() {
    let raw = [1.0, f64::NAN, 3.0, 5.0, 8.0, f64::NAN, 13.0];
    let masked = MaskedValues::build(&raw, None);

    let direct = reduce_1d(
        &masked.values,
        &masked.missing,
        &[0.0, 1.0],
        MissingPolicy::new(0.5, Reduction::Average),
    );
    let via_api = run_mean1d(
        &Slab::from_slice(&raw),
        &Kernel::line(&[1.0, 0.0]),
        0,
        0.5,
    )
    .unwrap();

    assert_eq!(via_api.values, direct.values);
    assert_eq!(via_api.mask, direct.mask);
}

/// Test that the 1D reducer keeps columns independent.
#[test]
fn test_reduce_1d_columns_independent() {
    // 3 rows x 2 columns
    let values = [1.0, 10.0, 2.0, 20.0, 3.0, 30.0];
    let missing = [false; 6];
    let weights = [1.0, 1.0, 1.0];
    let active = kernel_flags(&weights);

    let plane = Plane::new(&values, &missing, 3, 2);
    let taps = Taps::line(&weights, &active);
    let mut out = ReduceOutput::new(plane.len());
    reduce_pass_1d(&plane, &taps, &MissingPolicy::new(0.0, Reduction::Sum), &mut out);

    assert_eq!(out.values, vec![3.0, 30.0, 6.0, 60.0, 5.0, 50.0]);
}

/// Test the 2D reducer with a partial kernel.
#[test]
fn test_reduce_2d_cross_kernel() {
    // 3 x 3 plane, cross-shaped kernel
    let values: Vec<f64> = (1..=9).map(|v| v as f64).collect();
    let missing = [false; 9];
    let weights = [0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0];
    let active = kernel_flags(&weights);

    let plane = Plane::new(&values, &missing, 3, 3);
    let taps = Taps::grid(&weights, &active, 3, 3);
    let mut out = ReduceOutput::new(plane.len());
    reduce_pass_2d(&plane, &taps, &MissingPolicy::new(0.0, Reduction::Average), &mut out);

    // Center: (2 + 4 + 5 + 6 + 8) / 5
    assert_relative_eq!(out.values[4], 5.0, epsilon = 1e-12);
    // Corner (0, 0): (1 + 2 + 4) / 3
    assert_relative_eq!(out.values[0], 7.0 / 3.0, epsilon = 1e-12);
    assert_eq!(out.masked_count(), 0);
    assert_abs_diff_eq!(out.coverage[4], 1.0, epsilon = 1e-15);
}

// ============================================================================
// Executor Tests
// ============================================================================

fn mask_everything(
    plane: &Plane<'_, f64>,
    _taps: &Taps<'_, f64>,
    _policy: &MissingPolicy<f64>,
    out: &mut ReduceOutput<f64>,
) {
    assert_eq!(out.values.len(), plane.len());
    out.mask.iter_mut().for_each(|m| *m = true);
}

/// Test that an injected pass replaces the sequential reducer.
#[test]
fn test_executor_uses_custom_pass() {
    let values = [1.0, 2.0, 3.0];
    let missing = [false; 3];
    let weights = [1.0];
    let active = [true];

    let plane = Plane::new(&values, &missing, 3, 1);
    let taps = Taps::line(&weights, &active);

    let sequential = ReduceConfig {
        policy: MissingPolicy::new(0.5, Reduction::Sum),
        custom_reduce_pass: None,
    };
    let custom = ReduceConfig {
        custom_reduce_pass: Some(mask_everything),
        ..sequential
    };

    assert_eq!(
        MaskedExecutor::run_1d(&plane, &taps, &sequential).values,
        vec![1.0, 2.0, 3.0]
    );
    assert_eq!(MaskedExecutor::run_1d(&plane, &taps, &custom).masked_count(), 3);
    assert_eq!(MaskedExecutor::run_2d(&plane, &taps, &custom).masked_count(), 3);
}

// ============================================================================
// Validator Tests
// ============================================================================

/// Test slab validation order: emptiness, then shape, then mask.
#[test]
fn test_validate_slab() {
    let values = [1.0, 2.0];
    let missing = [true];

    assert!(Validator::validate_slab(&Slab::from_slice(&values)).is_ok());
    assert_eq!(
        Validator::validate_slab(&Slab::<f64>::from_slice(&[])),
        Err(ConvolveError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_slab(&Slab::from_slice(&values).with_missing(&missing)),
        Err(ConvolveError::MaskMismatch { values: 2, mask: 1 })
    );
}

/// Test kernel validation.
#[test]
fn test_validate_kernel() {
    let weights = [1.0, f64::INFINITY];

    assert_eq!(
        Validator::validate_kernel(&Kernel::line(&weights), 2),
        Err(ConvolveError::KernelDimension { expected: 2, got: 1 })
    );
    assert_eq!(
        Validator::validate_kernel(&Kernel::line(&weights), 1),
        Err(ConvolveError::InvalidNumericValue("kernel[1]=inf".to_string()))
    );
}

/// Test axis, dimensionality and threshold checks.
#[test]
fn test_validate_parameters() {
    assert!(Validator::validate_axis(1, 2).is_ok());
    assert!(Validator::validate_axis(2, 2).is_err());
    assert!(Validator::validate_two_dimensional(2).is_ok());
    assert!(Validator::validate_two_dimensional(1).is_err());
    assert!(Validator::validate_max_missing(0.5f64).is_ok());
    assert!(Validator::validate_max_missing(-0.5f64).is_err());
    assert!(Validator::validate_no_duplicates(None).is_ok());
}
