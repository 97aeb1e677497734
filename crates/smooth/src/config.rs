//! Configuration for spectral smoothing.

use crate::error::SmoothError;

/// How the filter window is completed at the first and last bins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Reflect the spectrum about its end bins (`x[-k] = x[k]`).
    #[default]
    Mirror,
    /// Wrap around, treating the spectrum as circular in velocity.
    Periodic,
}

/// Savitzky-Golay filter settings.
///
/// # Example
///
/// ```
/// use radmom_smooth::{BoundaryMode, SmoothConfig};
///
/// let config = SmoothConfig::new(7, 3).with_boundary(BoundaryMode::Periodic);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothConfig {
    /// Window length in bins (odd).
    window: usize,
    /// Polynomial order of the local fit.
    order: usize,
    /// Boundary completion.
    boundary: BoundaryMode,
}

impl SmoothConfig {
    /// Creates a configuration with the given window and order.
    pub fn new(window: usize, order: usize) -> Self {
        Self {
            window,
            order,
            boundary: BoundaryMode::Mirror,
        }
    }

    /// Sets the boundary handling.
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Returns the window length.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the polynomial order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the boundary handling.
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Validates this configuration.
    ///
    /// The window must be odd and at least 3 bins; the order must be
    /// smaller than the window.
    pub fn validate(&self) -> Result<(), SmoothError> {
        if self.window < 3 || self.window.is_multiple_of(2) {
            return Err(SmoothError::InvalidWindow {
                window: self.window,
            });
        }
        if self.order >= self.window {
            return Err(SmoothError::OrderTooHigh {
                order: self.order,
                window: self.window,
            });
        }
        Ok(())
    }
}

impl Default for SmoothConfig {
    /// Five-bin quadratic filter with mirrored boundaries.
    fn default() -> Self {
        Self::new(5, 2)
    }
}
