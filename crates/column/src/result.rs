//! Per-spectrum output.

use radmom_moments::MomentSet;
use radmom_noise::NoiseEstimate;

use crate::quality::QualityFlags;

/// Everything retrieved from one spectrum.
///
/// The moment, slope and edge arrays always have `max_peaks` rows; rows
/// past [`n_peaks`](Self::n_peaks) are zero. Row 0 is the strongest peak.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnResult {
    cleaned: Vec<f64>,
    moments: Vec<[f64; 5]>,
    slope: Vec<f64>,
    edges: Vec<[f64; 2]>,
    quality: QualityFlags,
    noise: NoiseEstimate,
    n_peaks: usize,
}

impl ColumnResult {
    pub(crate) fn new(
        cleaned: Vec<f64>,
        peaks: &[MomentSet],
        max_peaks: usize,
        quality: QualityFlags,
        noise: NoiseEstimate,
    ) -> Self {
        let mut moments = vec![[0.0; 5]; max_peaks];
        let mut slope = vec![0.0; max_peaks];
        let mut edges = vec![[0.0; 2]; max_peaks];
        for (slot, set) in peaks.iter().take(max_peaks).enumerate() {
            moments[slot] = set.moments();
            slope[slot] = set.slope();
            edges[slot] = set.edges();
        }
        Self {
            cleaned,
            moments,
            slope,
            edges,
            quality,
            noise,
            n_peaks: peaks.len().min(max_peaks),
        }
    }

    /// Noise-removed spectrum: power above the noise mean inside reported
    /// peaks, zero elsewhere.
    pub fn cleaned_spectrum(&self) -> &[f64] {
        &self.cleaned
    }

    /// Moments `[m0, m1, m2, m3, m4]` per peak slot.
    pub fn moments(&self) -> &[[f64; 5]] {
        &self.moments
    }

    /// Average flank slope in dB per velocity unit per peak slot.
    pub fn slope(&self) -> &[f64] {
        &self.slope
    }

    /// `[left, right]` edge velocities per peak slot.
    pub fn edges(&self) -> &[[f64; 2]] {
        &self.edges
    }

    /// Quality bitmask.
    pub fn quality(&self) -> QualityFlags {
        self.quality
    }

    /// Noise level used, after miscalibration scaling.
    pub fn noise(&self) -> NoiseEstimate {
        self.noise
    }

    /// Number of peaks reported.
    pub fn n_peaks(&self) -> usize {
        self.n_peaks
    }

    /// Number of peak slots, i.e. `max_peaks`.
    pub fn n_slots(&self) -> usize {
        self.moments.len()
    }

    /// Consumes the result and returns the cleaned spectrum.
    pub fn into_cleaned_spectrum(self) -> Vec<f64> {
        self.cleaned
    }
}
