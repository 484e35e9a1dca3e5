//! Tests for argument validation.
//!
//! Every invalid argument must be rejected before any computation, with a
//! specific `ConvolveError` variant. Degenerate windows are not errors.
//!
//! ## Test Organization
//!
//! 1. **Dimensionality** - Kernel, axis and 2D requirements
//! 2. **Data Shape** - Empty inputs, shape and mask mismatches
//! 3. **Parameters** - Threshold range, duplicates, adapter misuse
//! 4. **Messages** - Display output

use maskconv::prelude::*;

// ============================================================================
// Dimensionality Tests
// ============================================================================

/// Test that 1D operations reject 2D kernels.
#[test]
fn test_1d_rejects_2d_kernel() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let kernel = [1.0; 4];

    let err = convolve1d(&Slab::from_slice(&values), &Kernel::grid(&kernel, 2, 2), 0, 0.5)
        .unwrap_err();

    assert_eq!(err, ConvolveError::KernelDimension { expected: 1, got: 2 });
}

/// Test that 2D operations reject 1D kernels.
#[test]
fn test_2d_rejects_1d_kernel() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let kernel = [1.0, 1.0];

    let err = run_mean2d(&Slab::new(&values, &[2, 2]), &Kernel::line(&kernel), 0.5).unwrap_err();

    assert_eq!(err, ConvolveError::KernelDimension { expected: 2, got: 1 });
}

/// Test that 2D operations reject arrays that are not 2D.
#[test]
fn test_2d_rejects_other_dimensions() {
    let values = [1.0; 8];
    let kernel = [1.0; 4];

    let err = convolve2d(&Slab::from_slice(&values), &Kernel::grid(&kernel, 2, 2), 0.5)
        .unwrap_err();
    assert_eq!(err, ConvolveError::NotTwoDimensional { ndim: 1 });

    let err = convolve2d(&Slab::new(&values, &[2, 2, 2]), &Kernel::grid(&kernel, 2, 2), 0.5)
        .unwrap_err();
    assert_eq!(err, ConvolveError::NotTwoDimensional { ndim: 3 });
}

/// Test that the axis must address an existing dimension.
#[test]
fn test_axis_out_of_range() {
    let values = [1.0; 8];
    let kernel = [1.0];

    let err = run_mean1d(&Slab::new(&values, &[2, 2, 2]), &Kernel::line(&kernel), 3, 0.5)
        .unwrap_err();

    assert_eq!(err, ConvolveError::InvalidAxis { axis: 3, ndim: 3 });
}

// ============================================================================
// Data Shape Tests
// ============================================================================

/// Test that an empty array is rejected.
#[test]
fn test_empty_input() {
    let values: [f64; 0] = [];
    let kernel = [1.0];

    let err = convolve1d(&Slab::from_slice(&values), &Kernel::line(&kernel), 0, 0.5).unwrap_err();

    assert_eq!(err, ConvolveError::EmptyInput);
}

/// Test that an empty kernel is rejected.
#[test]
fn test_empty_kernel() {
    let values = [1.0, 2.0];
    let kernel: [f64; 0] = [];

    let err = convolve1d(&Slab::from_slice(&values), &Kernel::line(&kernel), 0, 0.5).unwrap_err();

    assert_eq!(err, ConvolveError::EmptyKernel);
}

/// Test that the shape must describe every value.
#[test]
fn test_shape_mismatch() {
    let values = [1.0, 2.0, 3.0];
    let kernel = [1.0];

    let err = convolve1d(&Slab::new(&values, &[2, 2]), &Kernel::line(&kernel), 0, 0.5)
        .unwrap_err();

    assert_eq!(
        err,
        ConvolveError::ShapeMismatch {
            shape: vec![2, 2],
            len: 3
        }
    );
}

/// Test that the kernel shape must describe every weight.
#[test]
fn test_kernel_shape_mismatch() {
    let values = [1.0; 4];
    let kernel = [1.0; 3];

    let err = convolve2d(&Slab::new(&values, &[2, 2]), &Kernel::grid(&kernel, 2, 2), 0.5)
        .unwrap_err();

    assert!(matches!(err, ConvolveError::ShapeMismatch { len: 3, .. }));
}

/// Test that the explicit mask must have one flag per value.
#[test]
fn test_mask_mismatch() {
    let values = [1.0, 2.0, 3.0];
    let missing = [false];
    let kernel = [1.0];

    let err = convolve1d(
        &Slab::from_slice(&values).with_missing(&missing),
        &Kernel::line(&kernel),
        0,
        0.5,
    )
    .unwrap_err();

    assert_eq!(err, ConvolveError::MaskMismatch { values: 3, mask: 1 });
}

/// Test that non-finite kernel weights are rejected.
#[test]
fn test_non_finite_kernel() {
    let values = [1.0, 2.0, 3.0];
    let kernel = [1.0, f64::NAN, 1.0];

    let err = convolve1d(&Slab::from_slice(&values), &Kernel::line(&kernel), 0, 0.5).unwrap_err();

    assert!(matches!(err, ConvolveError::InvalidNumericValue(_)));
}

// ============================================================================
// Parameter Tests
// ============================================================================

/// Test that the threshold must lie in [0, 1].
#[test]
fn test_max_missing_range() {
    let values = [1.0, 2.0];
    let kernel = [1.0];
    let slab = Slab::from_slice(&values);

    for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        let err = convolve1d(&slab, &Kernel::line(&kernel), 0, bad).unwrap_err();
        assert!(matches!(err, ConvolveError::InvalidMaxMissing(_)), "{}", bad);
    }

    for good in [0.0, 1.0] {
        assert!(convolve1d(&slab, &Kernel::line(&kernel), 0, good).is_ok());
    }
}

/// Test that the threshold is checked when building.
#[test]
fn test_max_missing_checked_at_build() {
    let err = MaskedConv::<f64>::new()
        .max_missing(2.0)
        .adapter(Grid)
        .build()
        .unwrap_err();

    assert_eq!(err, ConvolveError::InvalidMaxMissing(2.0));
}

/// Test that setting a parameter twice is rejected.
#[test]
fn test_duplicate_parameter() {
    let err = MaskedConv::<f64>::new()
        .max_missing(0.2)
        .max_missing(0.3)
        .adapter(Axis)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConvolveError::DuplicateParameter {
            parameter: "max_missing"
        }
    );

    let err = MaskedConv::<f64>::new()
        .reduction(Sum)
        .reduction(Average)
        .adapter(Grid)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConvolveError::DuplicateParameter {
            parameter: "reduction"
        }
    );

    let err = MaskedConv::<f64>::new()
        .return_coverage()
        .return_coverage()
        .adapter(Axis)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConvolveError::DuplicateParameter {
            parameter: "return_coverage"
        }
    );
}

/// Test that built processors can be named through the prelude.
#[test]
fn test_processor_types_in_prelude() {
    let axis: AxisConv<f64> = MaskedConv::new().adapter(Axis).build().unwrap();
    let grid: GridConv<f64> = MaskedConv::new().adapter(Grid).build().unwrap();

    let values = [1.0, 2.0, 3.0];
    let result = axis
        .fit(&Slab::from_slice(&values), &Kernel::line(&[1.0]))
        .unwrap();
    assert_eq!(result.values, vec![1.0, 2.0, 3.0]);

    let plane = [1.0, 2.0, 3.0, 4.0];
    let result = grid
        .fit(&Slab::new(&plane, &[2, 2]), &Kernel::new(&[1.0], &[1, 1]))
        .unwrap();
    assert_eq!(result.values, vec![1.0, 2.0, 3.0, 4.0]);
}

/// Test that an axis is refused by the 2D adapter.
#[test]
fn test_axis_with_grid_adapter() {
    let err = MaskedConv::<f64>::new()
        .axis(1)
        .adapter(Grid)
        .build()
        .unwrap_err();

    assert!(matches!(err, ConvolveError::InvalidInput(_)));
}

// ============================================================================
// Message Tests
// ============================================================================

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(
        ConvolveError::InvalidAxis { axis: 3, ndim: 2 }.to_string(),
        "Invalid axis: 3 (must be within [0, 1])"
    );
    assert_eq!(
        ConvolveError::NotTwoDimensional { ndim: 3 }.to_string(),
        "Input needs to be 2D, got a 3D array"
    );
    assert_eq!(
        ConvolveError::KernelDimension { expected: 1, got: 2 }.to_string(),
        "Kernel needs to be 1D, got a 2D kernel"
    );
    assert_eq!(ConvolveError::EmptyInput.to_string(), "Input array is empty");
    assert_eq!(
        ConvolveError::MaskShapeMismatch {
            shape: vec![2, 3],
            mask: vec![3, 2]
        }
        .to_string(),
        "Mask mismatch: array shape [2, 3] but mask shape [3, 2]"
    );
}
