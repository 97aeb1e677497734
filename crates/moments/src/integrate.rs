//! Moment, slope and edge computation for one peak.

use radmom_peaks::PeakRange;

use crate::axis::VelocityAxis;
use crate::error::MomentError;

/// Number of bins inside each peak edge used for the flank slope fit.
pub const SLOPE_WINDOW_BINS: usize = 3;

/// Moments, slope and edges of one spectral peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentSet {
    moments: [f64; 5],
    slope: f64,
    edges: [f64; 2],
}

impl MomentSet {
    /// Returns the 0th to 4th moments.
    pub fn moments(&self) -> [f64; 5] {
        self.moments
    }

    /// Returns the integrated power (0th moment).
    pub fn power(&self) -> f64 {
        self.moments[0]
    }

    /// Returns the power-weighted mean velocity (1st moment).
    pub fn mean_velocity(&self) -> f64 {
        self.moments[1]
    }

    /// Returns the spectrum width (2nd moment).
    pub fn spread(&self) -> f64 {
        self.moments[2]
    }

    /// Returns the skewness (3rd moment).
    pub fn skewness(&self) -> f64 {
        self.moments[3]
    }

    /// Returns the kurtosis (4th moment).
    pub fn kurtosis(&self) -> f64 {
        self.moments[4]
    }

    /// Returns the mean flank steepness in dB per unit velocity.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the velocities of the first and last bin of the peak.
    pub fn edges(&self) -> [f64; 2] {
        self.edges
    }
}

/// Integrates one peak of a noise-removed spectrum.
///
/// `power` must hold non-negative noise-removed values for every bin of
/// the spectrum. For a range that wraps the Nyquist boundary, the part
/// holding less power is shifted by one unambiguous interval so that the
/// velocities are continuous; the reported edges and mean velocity may then
/// lie outside `[min_v, max_v]`.
///
/// A peak with zero integrated power reports zero for every higher moment
/// and the slope; a peak with zero spread reports zero skewness and
/// kurtosis.
///
/// # Errors
///
/// Returns [`MomentError::LengthMismatch`] if `power`, `range` and `axis`
/// do not describe the same number of bins.
pub fn integrate_peak(
    power: &[f64],
    range: &PeakRange,
    axis: &VelocityAxis,
) -> Result<MomentSet, MomentError> {
    if power.len() != axis.n_bins() || range.n_bins() != axis.n_bins() {
        return Err(MomentError::LengthMismatch {
            spectrum: power.len(),
            axis: axis.n_bins(),
            range: range.n_bins(),
        });
    }

    let velocities = unwrapped_velocities(power, range, axis);
    let p: Vec<f64> = range.indices().map(|i| power[i]).collect();

    let edges = [velocities[0], velocities[velocities.len() - 1]];
    let m0: f64 = p.iter().sum();
    if m0 <= 0.0 {
        return Ok(MomentSet {
            moments: [0.0; 5],
            slope: 0.0,
            edges,
        });
    }

    let m1 = weighted_sum(&p, &velocities, |v| v) / m0;
    let variance = weighted_sum(&p, &velocities, |v| (v - m1).powi(2)) / m0;
    let m2 = variance.sqrt();
    let (m3, m4) = if m2 > 0.0 {
        (
            weighted_sum(&p, &velocities, |v| (v - m1).powi(3)) / m0 / m2.powi(3),
            weighted_sum(&p, &velocities, |v| (v - m1).powi(4)) / m0 / m2.powi(4),
        )
    } else {
        (0.0, 0.0)
    };

    Ok(MomentSet {
        moments: [m0, m1, m2, m3, m4],
        slope: flank_slope(&p, &velocities),
        edges,
    })
}

/// Velocities of the range's bins, continuous across the Nyquist boundary.
fn unwrapped_velocities(power: &[f64], range: &PeakRange, axis: &VelocityAxis) -> Vec<f64> {
    let raw = range.indices().map(|i| axis.velocity(i));
    if !range.wraps() {
        return raw.collect();
    }

    // Bins before the fold belong to the upper end of the axis.
    let left = range.left();
    let (upper, lower): (f64, f64) = range.indices().fold((0.0, 0.0), |(u, l), i| {
        if i >= left { (u + power[i], l) } else { (u, l + power[i]) }
    });

    let span = axis.span();
    range
        .indices()
        .zip(raw)
        .map(|(i, v)| match (i >= left, upper >= lower) {
            (false, true) => v + span,
            (true, false) => v - span,
            _ => v,
        })
        .collect()
}

fn weighted_sum(p: &[f64], v: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    p.iter().zip(v).map(|(&pi, &vi)| pi * f(vi)).sum()
}

/// Mean steepness of the rising (left) and falling (right) flanks.
fn flank_slope(p: &[f64], v: &[f64]) -> f64 {
    let window = SLOPE_WINDOW_BINS.min(p.len());
    let left = log_linear_fit(&p[..window], &v[..window]);
    let right = log_linear_fit(&p[p.len() - window..], &v[v.len() - window..]);
    match (left, right) {
        (Some(l), Some(r)) => 0.5 * (l - r),
        (Some(l), None) => l,
        (None, Some(r)) => -r,
        (None, None) => 0.0,
    }
}

/// Least-squares slope of `10 log10(p)` against velocity over positive bins.
fn log_linear_fit(p: &[f64], v: &[f64]) -> Option<f64> {
    let points: Vec<(f64, f64)> = p
        .iter()
        .zip(v)
        .filter(|&(&pi, _)| pi > 0.0)
        .map(|(&pi, &vi)| (vi, 10.0 * pi.log10()))
        .collect();
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mx = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let my = points.iter().map(|(_, y)| y).sum::<f64>() / n;
    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), &(x, y)| {
        (sxy + (x - mx) * (y - my), sxx + (x - mx) * (x - mx))
    });
    if sxx == 0.0 {
        return None;
    }
    Some(sxy / sxx)
}
