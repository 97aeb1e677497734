//! Error types for the radmom-smooth crate.

/// Error type for all fallible operations in the radmom-smooth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SmoothError {
    /// Returned when the window length is even or shorter than 3 bins.
    #[error("window must be odd and >= 3, got {window}")]
    InvalidWindow {
        /// The invalid window length.
        window: usize,
    },

    /// Returned when the polynomial order does not fit the window.
    #[error("polynomial order {order} must be smaller than window {window}")]
    OrderTooHigh {
        /// Polynomial order.
        order: usize,
        /// Window length.
        window: usize,
    },

    /// Returned when the least-squares normal equations are singular.
    #[error("singular normal equations for window {window}, order {order}")]
    SingularSystem {
        /// Window length.
        window: usize,
        /// Polynomial order.
        order: usize,
    },
}
