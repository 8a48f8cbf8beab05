//! Border directions
//!
//! Each direction names the face whose neighbor must be background for a
//! voxel to be a border point of that type. The traversal order of
//! [`Direction::ALL`] determines which voxels survive, so it must not change.

use crate::volume::{slot, Volume};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Neighbor at (p, r, c-1)
    West,
    /// Neighbor at (p, r, c+1)
    East,
    /// Neighbor at (p, r+1, c)
    South,
    /// Neighbor at (p, r-1, c)
    North,
    /// Neighbor at (p+1, r, c)
    Up,
    /// Neighbor at (p-1, r, c)
    Bottom,
}

impl Direction {
    /// Fixed pass order
    pub const ALL: [Direction; 6] = [
        Direction::West,
        Direction::East,
        Direction::South,
        Direction::North,
        Direction::Up,
        Direction::Bottom,
    ];

    /// Pass order for a single-plane volume
    pub const IN_PLANE: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::South,
        Direction::North,
    ];

    /// Directions used for a padded volume with `planes` planes.
    ///
    /// A single interior plane (padded depth 3) is a 2D image, so the Up and
    /// Bottom passes are skipped.
    pub fn active(planes: usize) -> &'static [Direction] {
        if planes > 3 {
            &Self::ALL
        } else {
            &Self::IN_PLANE
        }
    }

    /// 1-based border code, in pass order
    pub const fn code(self) -> u8 {
        match self {
            Direction::West => 1,
            Direction::East => 2,
            Direction::South => 3,
            Direction::North => 4,
            Direction::Up => 5,
            Direction::Bottom => 6,
        }
    }

    /// (dp, dr, dc) offset of the face neighbor checked for this direction
    pub const fn offset(self) -> (isize, isize, isize) {
        match self {
            Direction::West => (0, 0, -1),
            Direction::East => (0, 0, 1),
            Direction::South => (0, 1, 0),
            Direction::North => (0, -1, 0),
            Direction::Up => (1, 0, 0),
            Direction::Bottom => (-1, 0, 0),
        }
    }

    /// Neighborhood slot of the face neighbor
    pub const fn neighbor_slot(self) -> usize {
        let (dp, dr, dc) = self.offset();
        slot(dp, dr, dc)
    }

    /// True when interior voxel `idx` has a background face neighbor on this side
    #[inline]
    pub fn is_border(self, volume: &Volume<'_>, idx: usize) -> bool {
        volume.neighbor(idx, self.neighbor_slot()) == 0
    }
}
