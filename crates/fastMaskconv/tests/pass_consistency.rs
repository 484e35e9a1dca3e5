#![cfg(feature = "dev")]
#![cfg(feature = "cpu")]
use fastMaskconv::internals::engine::executor::{reduce_pass_1d_parallel, reduce_pass_2d_parallel};
use maskconv::internals::algorithms::plane::{Plane, ReduceOutput, Taps};
use maskconv::internals::algorithms::reduce1d::reduce_pass_1d;
use maskconv::internals::algorithms::reduce2d::reduce_pass_2d;
use maskconv::internals::math::coverage::{MissingPolicy, Reduction};
use maskconv::internals::math::kernel::kernel_flags;

fn plane_data(len: usize) -> (Vec<f64>, Vec<bool>) {
    let missing: Vec<bool> = (0..len).map(|i| i % 5 == 1 || i % 11 == 0).collect();
    let values = (0..len)
        .map(|i| if missing[i] { 0.0 } else { (i as f64 * 0.37).cos() })
        .collect();
    (values, missing)
}

#[test]
fn test_reduce_pass_1d_consistency() {
    let (values, missing) = plane_data(64 * 9);
    let weights = [1.0, 0.0, 2.0, -1.0, 0.5, 3.0];
    let active = kernel_flags(&weights);

    let plane = Plane::new(&values, &missing, 64, 9);
    let taps = Taps::line(&weights, &active);

    for reduction in [Reduction::Sum, Reduction::Average] {
        let policy = MissingPolicy::new(0.4, reduction);

        let mut seq = ReduceOutput::new(plane.len());
        reduce_pass_1d(&plane, &taps, &policy, &mut seq);

        let mut par = ReduceOutput::new(plane.len());
        reduce_pass_1d_parallel(&plane, &taps, &policy, &mut par);

        assert_eq!(seq, par);
    }
}

#[test]
fn test_reduce_pass_2d_consistency() {
    let (values, missing) = plane_data(40 * 33);
    let weights: Vec<f64> = (0..15).map(|k| (k % 4) as f64).collect();
    let active = kernel_flags(&weights);

    let plane = Plane::new(&values, &missing, 40, 33);
    let taps = Taps::grid(&weights, &active, 5, 3);
    let policy = MissingPolicy::new(0.25, Reduction::Average);

    let mut seq = ReduceOutput::new(plane.len());
    reduce_pass_2d(&plane, &taps, &policy, &mut seq);

    let mut par = ReduceOutput::new(plane.len());
    reduce_pass_2d_parallel(&plane, &taps, &policy, &mut par);

    assert_eq!(seq, par);
    assert!(seq.masked_count() > 0);
}

#[test]
fn test_single_column_plane() {
    let (values, missing) = plane_data(17);
    let weights = [1.0, 1.0, 1.0];
    let active = kernel_flags(&weights);

    let plane = Plane::new(&values, &missing, 17, 1);
    let taps = Taps::line(&weights, &active);
    let policy = MissingPolicy::new(0.5, Reduction::Sum);

    let mut seq = ReduceOutput::new(plane.len());
    reduce_pass_1d(&plane, &taps, &policy, &mut seq);

    let mut par = ReduceOutput::new(plane.len());
    reduce_pass_1d_parallel(&plane, &taps, &policy, &mut par);

    assert_eq!(seq, par);
}
