//! Endpoint test

use crate::volume::Neighborhood;

/// True if the centre voxel has exactly one foreground 26-neighbor.
///
/// The sum includes the centre itself, so an endpoint sums to 2.
#[inline]
pub fn is_endpoint(neighborhood: &Neighborhood) -> bool {
    neighborhood.iter().map(|&v| v as u32).sum::<u32>() == 2
}
