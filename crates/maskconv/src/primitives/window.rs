//! Windowing primitives for centered kernels.
//!
//! This module maps a centered kernel onto the in-bounds part of an axis,
//! so reducers only ever visit taps whose input position exists. Taps that
//! fall outside the array are skipped rather than counted as missing, which
//! is what makes the effective window shrink near the edges.

// Half-open range `[start, end)` of kernel taps that land inside the axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TapRange {
    // First in-bounds tap.
    pub start: usize,

    // One past the last in-bounds tap.
    pub end: usize,

    // Kernel center offset (`len / 2`).
    pub center: usize,
}

impl TapRange {
    // Taps of a `len`-long kernel centered on output `idx` of an `n`-long axis.
    #[inline]
    pub fn centered(idx: usize, len: usize, n: usize) -> Self {
        debug_assert!(idx < n, "centered: output index out of bounds");

        let center = len / 2;
        let start = center.saturating_sub(idx).min(len);
        let end = len.min(n + center - idx);

        Self { start, end, center }
    }

    // Input position of tap `k` for output `idx`.
    #[inline]
    pub fn source(&self, idx: usize, k: usize) -> usize {
        debug_assert!(k >= self.start && k < self.end);
        idx + k - self.center
    }

    // Number of in-bounds taps.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    // Check if no tap lands inside the axis.
    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::TapRange;

    #[test]
    fn interior_window_is_complete() {
        let r = TapRange::centered(5, 5, 10);
        assert_eq!((r.start, r.end), (0, 5));
        assert_eq!(r.source(5, 0), 3);
        assert_eq!(r.source(5, 4), 7);
    }

    #[test]
    fn edges_shrink() {
        let left = TapRange::centered(0, 5, 5);
        assert_eq!((left.start, left.end), (2, 5));

        let right = TapRange::centered(4, 5, 5);
        assert_eq!((right.start, right.end), (0, 3));
        assert_eq!(right.source(4, 2), 4);
    }

    #[test]
    fn even_kernel_center() {
        // len 2: center 1, taps cover idx-1 and idx
        let r = TapRange::centered(0, 2, 3);
        assert_eq!((r.start, r.end), (1, 2));
        assert_eq!(r.source(0, 1), 0);
    }

    #[test]
    fn kernel_longer_than_axis() {
        let r = TapRange::centered(1, 9, 3);
        assert_eq!((r.start, r.end), (3, 6));
        assert_eq!(r.len(), 3);
    }
}
