//! Zero padding for binary volumes
//!
//! Thinning expects one voxel of background on every face. These helpers add
//! and strip that border for callers that start from an unpadded image.

use crate::error::{SkeletonError, SkeletonResult};
use crate::volume::Shape;

/// Pad a volume with one zero voxel on every face
///
/// # Arguments
/// * `data` - Input volume (planes * rows * cols), column index fastest
/// * `shape` - Original dimensions
///
/// # Returns
/// (padded_data, padded_shape), or an error if `data` does not hold exactly
/// `shape` voxels or the padded shape cannot be addressed
pub fn pad_volume(data: &[u8], shape: Shape) -> SkeletonResult<(Vec<u8>, Shape)> {
    let expected = shape.voxel_count()?;
    if data.len() != expected {
        return Err(SkeletonError::length_mismatch(expected, data.len()));
    }

    let padded_shape = shape.padded(1);
    let mut padded = vec![0u8; padded_shape.voxel_count()?];

    for p in 0..shape.planes {
        for r in 0..shape.rows {
            let src = shape.index(p, r, 0);
            let dst = padded_shape.index(p + 1, r + 1, 1);
            padded[dst..dst + shape.cols].copy_from_slice(&data[src..src + shape.cols]);
        }
    }

    Ok((padded, padded_shape))
}

/// Extract the interior of a volume padded by [`pad_volume`]
pub fn unpad_volume(padded: &[u8], padded_shape: Shape) -> Vec<u8> {
    let shape = Shape::new(
        padded_shape.planes.saturating_sub(2),
        padded_shape.rows.saturating_sub(2),
        padded_shape.cols.saturating_sub(2),
    );
    let mut data = vec![0u8; shape.len()];

    for p in 0..shape.planes {
        for r in 0..shape.rows {
            let src = padded_shape.index(p + 1, r + 1, 1);
            let dst = shape.index(p, r, 0);
            data[dst..dst + shape.cols].copy_from_slice(&padded[src..src + shape.cols]);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::validate_padded;

    #[test]
    fn test_padded_shape_and_border() {
        let shape = Shape::new(2, 3, 4);
        let data = vec![1u8; shape.len()];

        let (padded, padded_shape) = pad_volume(&data, shape).unwrap();

        assert_eq!(padded_shape, Shape::new(4, 5, 6));
        assert_eq!(padded.iter().filter(|&&v| v == 1).count(), shape.len());
        assert_eq!(validate_padded(&padded, padded_shape), Ok(()));
        assert_eq!(padded[padded_shape.index(1, 1, 1)], 1);
        assert_eq!(padded[padded_shape.index(2, 3, 4)], 1);
    }

    #[test]
    fn test_pad_unpad_roundtrip() {
        let shape = Shape::new(3, 4, 5);
        let data: Vec<u8> = (0..shape.len()).map(|i| ((i * 7) % 3 == 0) as u8).collect();

        let (padded, padded_shape) = pad_volume(&data, shape).unwrap();
        let recovered = unpad_volume(&padded, padded_shape);

        assert_eq!(recovered, data);
    }

    #[test]
    fn test_pad_rejects_short_buffer() {
        let shape = Shape::new(2, 3, 4);
        let data = vec![1u8; 23];

        assert_eq!(pad_volume(&data, shape), Err(SkeletonError::length_mismatch(24, 23)));
        assert_eq!(
            pad_volume(&[], Shape::new(usize::MAX / 2, 4, 4)),
            Err(SkeletonError::ShapeOverflow([usize::MAX / 2, 4, 4]))
        );
    }
}
