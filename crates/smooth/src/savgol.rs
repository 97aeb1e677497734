//! Savitzky-Golay coefficients and convolution.

use crate::config::{BoundaryMode, SmoothConfig};
use crate::error::SmoothError;

/// Computes the smoothing coefficients of a Savitzky-Golay filter.
///
/// Fits a polynomial of degree `order` over `window` equally spaced points
/// centred on zero and returns the weights that produce the fitted value at
/// the centre. The weights sum to one and are symmetric.
///
/// # Errors
///
/// Returns [`SmoothError`] if the window is even or shorter than 3, the
/// order is not smaller than the window, or the normal equations are
/// numerically singular.
pub fn savitzky_golay_coefficients(window: usize, order: usize) -> Result<Vec<f64>, SmoothError> {
    SmoothConfig::new(window, order).validate()?;

    let half = (window / 2) as f64;
    let m = order + 1;

    // Vandermonde rows: x^0 .. x^order for x in -half..=half.
    let vander: Vec<Vec<f64>> = (0..window)
        .map(|i| {
            let x = i as f64 - half;
            let mut row = Vec::with_capacity(m);
            let mut xp = 1.0;
            for _ in 0..m {
                row.push(xp);
                xp *= x;
            }
            row
        })
        .collect();

    // Augmented normal equations (A^T A | e_0).
    let mut aug = vec![vec![0.0; m + 1]; m];
    for (i, aug_row) in aug.iter_mut().enumerate() {
        for j in 0..m {
            aug_row[j] = vander.iter().map(|row| row[i] * row[j]).sum();
        }
    }
    aug[0][m] = 1.0;

    let b = gauss_jordan(aug).ok_or(SmoothError::SingularSystem { window, order })?;

    Ok(vander
        .iter()
        .map(|row| row.iter().zip(&b).map(|(a, bi)| a * bi).sum::<f64>())
        .collect())
}

/// Solves an augmented `m x (m + 1)` system with partial pivoting.
fn gauss_jordan(mut aug: Vec<Vec<f64>>) -> Option<Vec<f64>> {
    let m = aug.len();
    for col in 0..m {
        let best = (col..m).max_by(|&a, &b| aug[a][col].abs().total_cmp(&aug[b][col].abs()))?;
        aug.swap(col, best);

        let pivot = aug[col][col];
        if pivot.abs() < 1e-12 {
            return None;
        }
        for v in aug[col].iter_mut() {
            *v /= pivot;
        }

        let pivot_row = aug[col].clone();
        for (row, target) in aug.iter_mut().enumerate() {
            let factor = target[col];
            if row == col || factor == 0.0 {
                continue;
            }
            for (t, p) in target.iter_mut().zip(&pivot_row).skip(col) {
                *t -= factor * p;
            }
        }
    }
    Some(aug.into_iter().map(|row| row[m]).collect())
}

/// A Savitzky-Golay filter with precomputed coefficients.
#[derive(Debug, Clone)]
pub struct SavitzkyGolay {
    coeffs: Vec<f64>,
    boundary: BoundaryMode,
}

impl SavitzkyGolay {
    /// Builds a filter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError`] if the configuration is invalid.
    pub fn new(config: &SmoothConfig) -> Result<Self, SmoothError> {
        let coeffs = savitzky_golay_coefficients(config.window(), config.order())?;
        Ok(Self {
            coeffs,
            boundary: config.boundary(),
        })
    }

    /// Returns the convolution coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Smooths a spectrum, preserving its length.
    ///
    /// Spectra shorter than the filter window are returned unchanged.
    pub fn apply(&self, spectrum: &[f64]) -> Vec<f64> {
        let n = spectrum.len();
        let window = self.coeffs.len();
        if n < window {
            return spectrum.to_vec();
        }

        let half = (window / 2) as isize;
        let n_signed = n as isize;
        (0..n_signed)
            .map(|i| {
                self.coeffs
                    .iter()
                    .enumerate()
                    .map(|(j, &c)| {
                        let k = i + j as isize - half;
                        c * spectrum[self.source_index(k, n_signed)]
                    })
                    .sum::<f64>()
            })
            .collect()
    }

    /// Maps a possibly out-of-range index onto the spectrum.
    fn source_index(&self, k: isize, n: isize) -> usize {
        match self.boundary {
            BoundaryMode::Mirror => {
                if k < 0 {
                    (-k) as usize
                } else if k >= n {
                    (2 * n - 2 - k) as usize
                } else {
                    k as usize
                }
            }
            BoundaryMode::Periodic => k.rem_euclid(n) as usize,
        }
    }
}

/// Smooths a spectrum with a Savitzky-Golay filter.
///
/// Convenience wrapper around [`SavitzkyGolay`] for one-off calls.
///
/// # Errors
///
/// Returns [`SmoothError`] if the configuration is invalid.
pub fn smooth_spectrum(spectrum: &[f64], config: &SmoothConfig) -> Result<Vec<f64>, SmoothError> {
    Ok(SavitzkyGolay::new(config)?.apply(spectrum))
}
