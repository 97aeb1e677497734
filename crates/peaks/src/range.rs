//! Circular index ranges over a spectrum.

/// A contiguous run of bins, possibly wrapped across the Nyquist boundary.
///
/// Stored as a start bin and a length on a circle of `n_bins` bins, so a
/// range starting at bin `n - 2` with length 4 covers `n-2, n-1, 0, 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakRange {
    left: usize,
    len: usize,
    n_bins: usize,
}

impl PeakRange {
    /// Creates a range of `len` bins starting at `left`.
    ///
    /// # Panics
    ///
    /// Panics if `left >= n_bins`, `len == 0` or `len > n_bins`.
    pub fn new(left: usize, len: usize, n_bins: usize) -> Self {
        assert!(
            left < n_bins && len >= 1 && len <= n_bins,
            "PeakRange::new: invalid range (left {left}, len {len}, n_bins {n_bins})"
        );
        Self { left, len, n_bins }
    }

    /// Returns the first bin of the range.
    pub fn left(&self) -> usize {
        self.left
    }

    /// Returns the last bin of the range.
    pub fn right(&self) -> usize {
        (self.left + self.len - 1) % self.n_bins
    }

    /// Returns the number of bins in the range.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; ranges hold at least one bin.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of bins of the underlying spectrum.
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Returns `true` if the range runs from the last bin into bin 0.
    pub fn wraps(&self) -> bool {
        self.left + self.len > self.n_bins
    }

    /// Returns `true` if the range covers every bin of the spectrum.
    pub fn is_full(&self) -> bool {
        self.len == self.n_bins
    }

    /// Iterates over the bin indices from left to right edge.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (self.left..self.left + self.len).map(move |i| i % self.n_bins)
    }

    /// Returns `true` if `bin` lies inside the range.
    pub fn contains(&self, bin: usize) -> bool {
        bin < self.n_bins && (bin + self.n_bins - self.left) % self.n_bins < self.len
    }

    /// Returns `true` if the two ranges share at least one bin.
    pub fn intersects(&self, other: &PeakRange) -> bool {
        other.indices().any(|i| self.contains(i))
    }

    /// Returns the bin left of the range, or `None` if the range is full.
    pub(crate) fn outer_left(&self) -> Option<usize> {
        (!self.is_full()).then(|| (self.left + self.n_bins - 1) % self.n_bins)
    }

    /// Returns the bin right of the range, or `None` if the range is full.
    pub(crate) fn outer_right(&self) -> Option<usize> {
        (!self.is_full()).then(|| (self.left + self.len) % self.n_bins)
    }

    /// Grows the range by one bin on the left.
    pub(crate) fn grow_left(&mut self) {
        debug_assert!(!self.is_full());
        self.left = (self.left + self.n_bins - 1) % self.n_bins;
        self.len += 1;
    }

    /// Grows the range by one bin on the right.
    pub(crate) fn grow_right(&mut self) {
        debug_assert!(!self.is_full());
        self.len += 1;
    }
}
