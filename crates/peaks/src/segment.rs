//! Candidate detection, widening, ranking and the isolation test.

use radmom_noise::NoiseEstimate;
use tracing::debug;

use crate::config::SegmentConfig;
use crate::error::PeakError;
use crate::range::PeakRange;

/// One detected peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    range: PeakRange,
    power: f64,
}

impl Peak {
    /// Returns the bins covered by the peak.
    pub fn range(&self) -> &PeakRange {
        &self.range
    }

    /// Returns the summed noise-removed power of the peak's bins.
    pub fn power(&self) -> f64 {
        self.power
    }
}

/// Outcome of peak segmentation for one spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Reported peaks, strongest first.
    peaks: Vec<Peak>,
    /// Number of candidates that passed the bin-count test.
    n_candidates: usize,
    /// Whether the strongest peak is separated from all other candidates.
    principal_isolated: bool,
}

impl Segmentation {
    /// Returns the reported peaks ranked by descending power.
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    /// Returns `true` if no peak was found.
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Returns how many candidates survived, including unreported ones.
    pub fn n_candidates(&self) -> usize {
        self.n_candidates
    }

    /// Returns `true` if more candidates existed than could be reported.
    pub fn truncated(&self) -> bool {
        self.n_candidates > self.peaks.len()
    }

    /// Returns `true` if any reported peak wraps the Nyquist boundary.
    pub fn aliased(&self) -> bool {
        self.peaks.iter().any(|p| p.range.wraps())
    }

    /// Returns `true` if the strongest peak's hump above the noise mean
    /// contains no other candidate. Always `false` without peaks.
    pub fn principal_isolated(&self) -> bool {
        self.principal_isolated
    }
}

/// Finds up to `config.max_peaks()` disjoint peaks in a spectrum.
///
/// A bin belongs to a candidate when its power exceeds
/// `noise.max() * peak_min_snr`. Runs of such bins are grouped circularly,
/// runs shorter than `peak_min_bins` are dropped and, if enabled, the
/// survivors are widened over their monotonically decaying skirts.
/// Candidates are ranked by noise-removed power (ties: lower start bin
/// first).
///
/// # Errors
///
/// Returns [`PeakError`] for an invalid configuration, a spectrum shorter
/// than two bins, or non-finite spectrum or noise values. Finding no peak
/// is not an error.
pub fn segment_peaks(
    spectrum: &[f64],
    noise: &NoiseEstimate,
    config: &SegmentConfig,
) -> Result<Segmentation, PeakError> {
    config.validate()?;
    let n = spectrum.len();
    if n < 2 {
        return Err(PeakError::TooFewBins { n_bins: n });
    }
    if let Some(index) = spectrum.iter().position(|v| !v.is_finite()) {
        return Err(PeakError::NonFiniteValue { index });
    }
    if !noise.is_finite() {
        return Err(PeakError::NonFiniteNoise {
            mean: noise.mean(),
            max: noise.max(),
        });
    }

    let threshold = noise.max() * config.peak_min_snr();
    let above: Vec<bool> = spectrum.iter().map(|&s| s > threshold).collect();

    let mut ranges: Vec<PeakRange> = circular_runs(&above)
        .into_iter()
        .filter(|r| r.len() >= config.peak_min_bins())
        .collect();

    if config.use_wider_peak() {
        widen(&mut ranges, spectrum, noise.mean());
    }

    let mut candidates: Vec<Peak> = ranges
        .into_iter()
        .map(|range| Peak {
            range,
            power: noise_removed_power(spectrum, &range, noise.mean()),
        })
        .collect();
    candidates.sort_by(|a, b| {
        b.power
            .total_cmp(&a.power)
            .then_with(|| a.range.left().cmp(&b.range.left()))
    });

    let principal_isolated = match candidates.split_first() {
        Some((principal, others)) => {
            let hump = hump_above_mean(spectrum, &principal.range, noise.mean());
            !others.iter().any(|c| hump.intersects(&c.range))
        }
        None => false,
    };

    let n_candidates = candidates.len();
    candidates.truncate(config.max_peaks());

    debug!(
        n_candidates,
        n_reported = candidates.len(),
        threshold,
        "peak segmentation"
    );

    Ok(Segmentation {
        peaks: candidates,
        n_candidates,
        principal_isolated,
    })
}

/// Groups `true` bins into runs on a circle.
fn circular_runs(above: &[bool]) -> Vec<PeakRange> {
    let n = above.len();
    // Start the scan at a below-threshold bin so no run is cut in two.
    let Some(start) = above.iter().position(|&a| !a) else {
        return vec![PeakRange::new(0, n, n)];
    };

    let mut runs = Vec::new();
    let mut open: Option<(usize, usize)> = None;
    for offset in 1..=n {
        let i = (start + offset) % n;
        if above[i] {
            if let Some((_, len)) = open.as_mut() {
                *len += 1;
            } else {
                open = Some((i, 1));
            }
        } else if let Some((left, len)) = open.take() {
            runs.push(PeakRange::new(left, len, n));
        }
    }
    runs
}

/// Extends each range over bins that keep decreasing away from it.
///
/// Stronger peaks are widened first; a bin claimed by one range is never
/// taken by another, so ranges stay disjoint.
fn widen(ranges: &mut [PeakRange], spectrum: &[f64], noise_mean: f64) {
    let n = spectrum.len();
    let mut claimed = vec![false; n];
    for r in ranges.iter() {
        for i in r.indices() {
            claimed[i] = true;
        }
    }

    let mut order: Vec<usize> = (0..ranges.len()).collect();
    order.sort_by(|&a, &b| {
        let pa = noise_removed_power(spectrum, &ranges[a], noise_mean);
        let pb = noise_removed_power(spectrum, &ranges[b], noise_mean);
        pb.total_cmp(&pa)
    });

    for idx in order {
        let range = &mut ranges[idx];
        while let Some(next) = range.outer_left() {
            if claimed[next] || spectrum[next] >= spectrum[range.left()] {
                break;
            }
            claimed[next] = true;
            range.grow_left();
        }
        while let Some(next) = range.outer_right() {
            if claimed[next] || spectrum[next] >= spectrum[range.right()] {
                break;
            }
            claimed[next] = true;
            range.grow_right();
        }
    }
}

/// Sum of `max(s - noise_mean, 0)` over the range.
fn noise_removed_power(spectrum: &[f64], range: &PeakRange, noise_mean: f64) -> f64 {
    range
        .indices()
        .map(|i| (spectrum[i] - noise_mean).max(0.0))
        .sum()
}

/// Extends a range outward while the spectrum stays above the noise mean.
fn hump_above_mean(spectrum: &[f64], range: &PeakRange, noise_mean: f64) -> PeakRange {
    let mut hump = *range;
    while let Some(next) = hump.outer_left() {
        if spectrum[next] <= noise_mean {
            break;
        }
        hump.grow_left();
    }
    while let Some(next) = hump.outer_right() {
        if spectrum[next] <= noise_mean {
            break;
        }
        hump.grow_right();
    }
    hump
}
