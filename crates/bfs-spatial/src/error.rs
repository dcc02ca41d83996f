//! Error types for spatial operations.

/// Errors that can occur while constructing grids.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// The grid resolution must be positive and finite.
    #[error("grid resolution must be positive and finite, got {0}")]
    InvalidResolution(f64),

    /// The grid dimensions are invalid (zero-sized or too large to index).
    #[error("invalid grid dimensions: {nx}x{ny}x{nz}")]
    InvalidDimensions {
        /// Cells along X.
        nx: usize,
        /// Cells along Y.
        ny: usize,
        /// Cells along Z.
        nz: usize,
    },

    /// The number of supplied cell values does not match the declared size.
    #[error("dimension mismatch: declared {expected} cells, got {actual}")]
    DimensionMismatch {
        /// Cell count implied by the declared dimensions.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },
}
