//! Thinning driver
//!
//! Repeats directional passes in the fixed order West, East, South, North,
//! Up, Bottom until one full round removes nothing. Each pass first collects
//! candidates from the unmodified volume, then walks them in scan order and
//! deletes those that are still simple given the deletions already made in
//! the same pass. Deleting a whole candidate batch at once could disconnect
//! structures held together only by mutually adjacent candidates.

use ndarray::ArrayD;
use tracing::{debug, info};

use crate::error::{SkeletonError, SkeletonResult};
use crate::thinning::direction::Direction;
use crate::thinning::scanner::collect_border_candidates;
use crate::thinning::simple_point::count_local_components;
use crate::utils::padding::{pad_volume, unpad_volume};
use crate::volume::{Shape, Volume};

/// Summary of a thinning run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThinningReport {
    /// Outer rounds executed, including the final round without removals
    pub rounds: usize,
    /// Voxels set to background
    pub removed: usize,
    /// Directions visited per round (4 for a single plane, else 6)
    pub directions: usize,
}

/// One directional pass: collect, then sequentially recheck and delete.
///
/// Returns the number of voxels removed.
pub(crate) fn run_direction_pass(
    volume: &mut Volume<'_>,
    direction: Direction,
    candidates: &mut Vec<usize>,
) -> usize {
    collect_border_candidates(volume, direction, candidates);

    let mut removed = 0usize;
    for &idx in candidates.iter() {
        // Exactly one component: the voxel is still simple and its
        // neighbors were not all deleted earlier in this pass.
        let neighborhood = volume.neighborhood(idx);
        if count_local_components(&neighborhood) == 1 {
            volume.clear(idx);
            removed += 1;
        }
    }

    debug!(
        direction = ?direction,
        candidates = candidates.len(),
        removed,
        "direction pass complete"
    );

    removed
}

/// Thin an already validated volume to its skeleton
///
/// # Arguments
/// * `volume` - Padded binary volume, modified in-place
/// * `progress` - Called after each round with (round, total voxels removed)
pub fn thin_volume<F>(volume: &mut Volume<'_>, mut progress: F) -> ThinningReport
where
    F: FnMut(usize, usize),
{
    let directions = Direction::active(volume.shape().planes);
    let mut candidates = Vec::new();
    let mut report = ThinningReport {
        directions: directions.len(),
        ..ThinningReport::default()
    };

    info!(
        shape = ?volume.shape(),
        foreground = volume.foreground_count(),
        directions = directions.len(),
        "starting thinning"
    );

    loop {
        report.rounds += 1;
        let mut unchanged = 0usize;
        let mut removed_this_round = 0usize;

        for &direction in directions {
            let removed = run_direction_pass(volume, direction, &mut candidates);
            if removed == 0 {
                unchanged += 1;
            }
            removed_this_round += removed;
        }

        report.removed += removed_this_round;
        debug!(round = report.rounds, removed = removed_this_round, "thinning round complete");
        progress(report.rounds, report.removed);

        if unchanged == directions.len() {
            break;
        }
    }

    info!(rounds = report.rounds, removed = report.removed, "thinning complete");
    report
}

/// Skeletonize a zero-padded binary volume in place
///
/// # Arguments
/// * `data` - Binary voxels (0/1), column index fastest, modified in-place
/// * `dims` - Shape (P, R, C) including the one-voxel zero border
///
/// # Returns
/// Run summary, or `SkeletonError` if the input is not a padded binary
/// 3D volume. Nothing is modified on error.
pub fn skeletonize(data: &mut [u8], dims: &[usize]) -> SkeletonResult<ThinningReport> {
    skeletonize_with_progress(data, dims, |_, _| {})
}

/// Skeletonize with a per-round progress callback
pub fn skeletonize_with_progress<F>(
    data: &mut [u8],
    dims: &[usize],
    progress: F,
) -> SkeletonResult<ThinningReport>
where
    F: FnMut(usize, usize),
{
    let mut volume = Volume::from_dims(data, dims)?;
    Ok(thin_volume(&mut volume, progress))
}

/// Skeletonize an ndarray image in place.
///
/// The array must be 3D and padded. Arrays that are not in standard layout
/// are thinned through a contiguous copy and written back.
pub fn skeletonize_array(image: &mut ArrayD<u8>) -> SkeletonResult<ThinningReport> {
    let dims = image.shape().to_vec();

    if let Some(data) = image.as_slice_mut() {
        return skeletonize(data, &dims);
    }

    let mut flat: Vec<u8> = image.iter().copied().collect();
    let report = skeletonize(&mut flat, &dims)?;
    for (dst, &src) in image.iter_mut().zip(flat.iter()) {
        *dst = src;
    }
    Ok(report)
}

/// Skeletonize an image that has no zero border yet.
///
/// Accepts a 2D (R, C) image, treated as a single plane, or a 3D (P, R, C)
/// volume. A padded copy is thinned and its interior written back. An image
/// with a zero-length axis has nothing to thin and yields an empty report.
pub fn skeletonize_unpadded(data: &mut [u8], dims: &[usize]) -> SkeletonResult<ThinningReport> {
    let shape = match *dims {
        [rows, cols] => Shape::new(1, rows, cols),
        [planes, rows, cols] => Shape::new(planes, rows, cols),
        _ => return Err(SkeletonError::InvalidRank(dims.len())),
    };

    let expected = shape.voxel_count()?;
    if data.len() != expected {
        return Err(SkeletonError::length_mismatch(expected, data.len()));
    }
    if expected == 0 {
        return Ok(ThinningReport::default());
    }
    if let Some((index, &value)) = data.iter().enumerate().find(|&(_, &v)| v > 1) {
        return Err(SkeletonError::NonBinary { index, value });
    }

    let (mut padded, padded_shape) = pad_volume(data, shape)?;
    let report = skeletonize(&mut padded, &padded_shape.as_array())?;
    data.copy_from_slice(&unpad_volume(&padded, padded_shape));

    Ok(report)
}
