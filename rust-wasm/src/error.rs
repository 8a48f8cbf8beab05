//! Error types for skeletonization.
//!
//! Every variant describes malformed input. Validation happens once at the
//! boundary, before any voxel is touched, so a failed call never leaves a
//! partially thinned buffer behind.

use thiserror::Error;

/// Result type alias for skeletonization operations.
pub type SkeletonResult<T> = Result<T, SkeletonError>;

/// Invalid input detected before thinning starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkeletonError {
    /// Shape does not have the expected number of axes.
    #[error("invalid input: expected a 3D volume, got {0}D")]
    InvalidRank(usize),

    /// Voxel count of the shape does not fit in `usize`.
    #[error("invalid input: shape {0:?} has more voxels than can be addressed")]
    ShapeOverflow([usize; 3]),

    /// Buffer length disagrees with the product of the shape.
    #[error("invalid input: shape needs {expected} voxels but buffer holds {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A padded axis has no interior voxel.
    #[error("invalid input: axis {axis} has extent {extent}, padded volumes need at least 3")]
    TooSmall { axis: usize, extent: usize },

    /// Voxel value outside {0, 1}.
    #[error("invalid input: voxel {index} has value {value}, expected 0 or 1")]
    NonBinary { index: usize, value: u8 },

    /// Foreground found in the one-voxel zero border.
    #[error("invalid input: foreground voxel at ({plane}, {row}, {col}) lies in the zero padding")]
    MissingPadding { plane: usize, row: usize, col: usize },
}

impl SkeletonError {
    /// Create a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create a missing padding error for the voxel at `(plane, row, col)`.
    #[must_use]
    pub const fn missing_padding(plane: usize, row: usize, col: usize) -> Self {
        Self::MissingPadding { plane, row, col }
    }
}
