//! Zero-padded binary volumes and 3x3x3 neighborhood access
//!
//! A volume is a flat `u8` buffer with shape (planes, rows, cols). The linear
//! index of voxel (p, r, c) is `c + r*cols + p*rows*cols`, i.e. the column
//! varies fastest. This is ndarray's standard layout for shape (P, R, C) and
//! the NIfTI Fortran layout for (nx, ny, nz) = (C, R, P).
//!
//! Every face carries one voxel of zero padding, so interior voxels can read
//! their full 26-neighborhood without bounds checks.

use crate::error::{SkeletonError, SkeletonResult};

/// 27-voxel window around a voxel.
///
/// Slot for offset (dp, dr, dc) is `(dp+1)*9 + (dr+1)*3 + (dc+1)`.
pub type Neighborhood = [u8; 27];

/// Slot of the centre voxel within a [`Neighborhood`]
pub const CENTER: usize = 13;

/// Neighborhood slot for a (dp, dr, dc) offset with components in {-1, 0, 1}
#[inline(always)]
pub const fn slot(dp: isize, dr: isize, dc: isize) -> usize {
    ((dp + 1) * 9 + (dr + 1) * 3 + (dc + 1)) as usize
}

/// Volume dimensions (P, R, C)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub planes: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(planes: usize, rows: usize, cols: usize) -> Self {
        Self { planes, rows, cols }
    }

    /// Build a shape from a dimension list, rejecting anything but rank 3
    pub fn from_dims(dims: &[usize]) -> SkeletonResult<Self> {
        match *dims {
            [planes, rows, cols] => Ok(Self::new(planes, rows, cols)),
            _ => Err(SkeletonError::InvalidRank(dims.len())),
        }
    }

    /// Total number of voxels. Only for shapes that passed [`Shape::voxel_count`].
    pub const fn len(&self) -> usize {
        self.planes * self.rows * self.cols
    }

    /// Total number of voxels, or `ShapeOverflow` if the product wraps
    pub fn voxel_count(&self) -> SkeletonResult<usize> {
        self.planes
            .checked_mul(self.rows)
            .and_then(|n| n.checked_mul(self.cols))
            .ok_or(SkeletonError::ShapeOverflow(self.as_array()))
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn as_array(&self) -> [usize; 3] {
        [self.planes, self.rows, self.cols]
    }

    #[inline(always)]
    pub const fn index(&self, p: usize, r: usize, c: usize) -> usize {
        c + r * self.cols + p * self.rows * self.cols
    }

    /// Inverse of [`Shape::index`]
    #[inline]
    pub const fn coords(&self, idx: usize) -> (usize, usize, usize) {
        let plane_len = self.rows * self.cols;
        (idx / plane_len, (idx % plane_len) / self.cols, idx % self.cols)
    }

    /// True for voxels in the outermost layer on any face
    #[inline]
    pub const fn on_boundary(&self, p: usize, r: usize, c: usize) -> bool {
        p == 0 || r == 0 || c == 0
            || p + 1 == self.planes || r + 1 == self.rows || c + 1 == self.cols
    }

    /// Shape with `pad` voxels added on every face.
    ///
    /// Extents saturate at `usize::MAX`, which [`Shape::voxel_count`] rejects.
    pub const fn padded(&self, pad: usize) -> Self {
        let border = pad.saturating_mul(2);
        Self::new(
            self.planes.saturating_add(border),
            self.rows.saturating_add(border),
            self.cols.saturating_add(border),
        )
    }
}

/// Check that `data` is a binary volume of `shape` with a zero one-voxel border
///
/// Checks run in order: buffer length, minimum extent, value domain, padding.
pub fn validate_padded(data: &[u8], shape: Shape) -> SkeletonResult<()> {
    let expected = shape.voxel_count()?;
    if data.len() != expected {
        return Err(SkeletonError::length_mismatch(expected, data.len()));
    }

    for (axis, &extent) in shape.as_array().iter().enumerate() {
        if extent < 3 {
            return Err(SkeletonError::TooSmall { axis, extent });
        }
    }

    if let Some((index, &value)) = data.iter().enumerate().find(|&(_, &v)| v > 1) {
        return Err(SkeletonError::NonBinary { index, value });
    }

    for p in 0..shape.planes {
        for r in 0..shape.rows {
            for c in 0..shape.cols {
                if shape.on_boundary(p, r, c) && data[shape.index(p, r, c)] != 0 {
                    return Err(SkeletonError::missing_padding(p, r, c));
                }
            }
        }
    }

    Ok(())
}

/// Pre-computed linear offsets of the 27 neighborhood slots
#[derive(Clone, Debug)]
pub struct NeighborhoodKernel {
    offsets: [isize; 27],
}

impl NeighborhoodKernel {
    pub fn new(shape: Shape) -> Self {
        let stride_r = shape.cols as isize;
        let stride_p = (shape.rows * shape.cols) as isize;
        let mut offsets = [0isize; 27];

        for dp in -1..=1isize {
            for dr in -1..=1isize {
                for dc in -1..=1isize {
                    offsets[slot(dp, dr, dc)] = dc + dr * stride_r + dp * stride_p;
                }
            }
        }

        Self { offsets }
    }

    /// Linear offset for a neighborhood slot
    #[inline(always)]
    pub fn offset(&self, slot: usize) -> isize {
        self.offsets[slot]
    }

    /// Copy the 3x3x3 window centred on interior voxel `idx`
    #[inline]
    pub fn gather(&self, data: &[u8], idx: usize) -> Neighborhood {
        let mut neighborhood = [0u8; 27];
        for (value, &offset) in neighborhood.iter_mut().zip(self.offsets.iter()) {
            *value = data[idx.wrapping_add_signed(offset)];
        }
        neighborhood
    }
}

/// A validated, padded binary volume borrowed mutably for in-place thinning
pub struct Volume<'a> {
    data: &'a mut [u8],
    shape: Shape,
    kernel: NeighborhoodKernel,
}

impl<'a> Volume<'a> {
    /// Wrap `data` after validating it against `shape`
    pub fn new(data: &'a mut [u8], shape: Shape) -> SkeletonResult<Self> {
        validate_padded(data, shape)?;
        Ok(Self {
            data,
            shape,
            kernel: NeighborhoodKernel::new(shape),
        })
    }

    /// Wrap `data` with a dimension list (rank must be 3)
    pub fn from_dims(data: &'a mut [u8], dims: &[usize]) -> SkeletonResult<Self> {
        Self::new(data, Shape::from_dims(dims)?)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    #[inline(always)]
    pub fn get(&self, idx: usize) -> u8 {
        self.data[idx]
    }

    /// Set a voxel to background
    #[inline(always)]
    pub fn clear(&mut self, idx: usize) {
        self.data[idx] = 0;
    }

    /// Value of the neighbor at `slot` of interior voxel `idx`
    #[inline(always)]
    pub fn neighbor(&self, idx: usize, slot: usize) -> u8 {
        self.data[idx.wrapping_add_signed(self.kernel.offset(slot))]
    }

    /// Current 3x3x3 window centred on interior voxel `idx`
    #[inline]
    pub fn neighborhood(&self, idx: usize) -> Neighborhood {
        self.kernel.gather(&self.data[..], idx)
    }

    /// Linear indices of all non-padding voxels in (p, r, c) scan order
    pub fn interior_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let shape = self.shape;
        (1..shape.planes - 1).flat_map(move |p| {
            (1..shape.rows - 1).flat_map(move |r| {
                (1..shape.cols - 1).map(move |c| shape.index(p, r, c))
            })
        })
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}
