//! Border candidate collection
//!
//! One read-only sweep of the interior for a single direction. A voxel is a
//! candidate when it is foreground, a border point of that direction, not an
//! endpoint, Euler invariant and simple. Candidates are returned as linear
//! indices in (p, r, c) scan order.

use crate::thinning::direction::Direction;
use crate::thinning::endpoint::is_endpoint;
use crate::thinning::euler::is_euler_invariant;
use crate::thinning::simple_point::is_simple_point;
use crate::volume::Volume;

/// Collect deletable border voxels for `direction` into `candidates`.
///
/// `candidates` is cleared first so the buffer can be reused across passes.
pub fn collect_border_candidates(
    volume: &Volume<'_>,
    direction: Direction,
    candidates: &mut Vec<usize>,
) {
    candidates.clear();

    for idx in volume.interior_indices() {
        if volume.get(idx) == 0 {
            continue;
        }

        if !direction.is_border(volume, idx) {
            continue;
        }

        let neighborhood = volume.neighborhood(idx);

        if is_endpoint(&neighborhood) {
            continue;
        }

        if !is_euler_invariant(&neighborhood) {
            continue;
        }

        if !is_simple_point(&neighborhood) {
            continue;
        }

        candidates.push(idx);
    }
}
