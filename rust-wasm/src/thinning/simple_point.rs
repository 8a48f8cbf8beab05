//! Simple point test by octant flood fill
//!
//! The centre voxel is removed from the neighborhood, leaving a 26-entry
//! cube. Foreground positions are labelled octant by octant: every position
//! in a 2x2x2 octant is 26-adjacent to every other, so one octant is always
//! one label, and the fill spreads to neighboring octants through the
//! positions they share. If a second label is ever needed the centre is not
//! simple.

use crate::volume::{Neighborhood, CENTER};

/// Cube positions of each octant with the octants that share them.
///
/// Octant `k` spans offset `k & 1` along columns, `(k >> 1) & 1` along rows
/// and `(k >> 2) & 1` along planes. The second element is a bitmask of the
/// other octants containing that position; the fill recurses into those.
#[rustfmt::skip]
pub static OCTANT_GRAPH: [[(u8, u8); 7]; 8] = [
    [(0, 0b0000_0000), (1, 0b0000_0010), (3, 0b0000_0100), (4, 0b0000_1110), (9, 0b0001_0000), (10, 0b0011_0010), (12, 0b0101_0100)],
    [(1, 0b0000_0001), (2, 0b0000_0000), (4, 0b0000_1101), (5, 0b0000_1000), (10, 0b0011_0001), (11, 0b0010_0000), (13, 0b1010_1000)],
    [(3, 0b0000_0001), (4, 0b0000_1011), (6, 0b0000_0000), (7, 0b0000_1000), (12, 0b0101_0001), (14, 0b0100_0000), (15, 0b1100_1000)],
    [(4, 0b0000_0111), (5, 0b0000_0010), (7, 0b0000_0100), (8, 0b0000_0000), (13, 0b1010_0010), (15, 0b1100_0100), (16, 0b1000_0000)],
    [(9, 0b0000_0001), (10, 0b0010_0011), (12, 0b0100_0101), (17, 0b0000_0000), (18, 0b0010_0000), (20, 0b0100_0000), (21, 0b1110_0000)],
    [(10, 0b0001_0011), (11, 0b0000_0010), (13, 0b1000_1010), (18, 0b0001_0000), (19, 0b0000_0000), (21, 0b1101_0000), (22, 0b1000_0000)],
    [(12, 0b0001_0101), (14, 0b0000_0100), (15, 0b1000_1100), (20, 0b0001_0000), (21, 0b1011_0000), (23, 0b0000_0000), (24, 0b1000_0000)],
    [(13, 0b0010_1010), (15, 0b0100_1100), (16, 0b0000_1000), (21, 0b0111_0000), (22, 0b0010_0000), (24, 0b0100_0000), (25, 0b0000_0000)],
];

/// First octant containing each cube position; a disjoint partition of the
/// 26 positions used to seed the fill.
#[rustfmt::skip]
pub static SEED_OCTANT: [u8; 26] = [
    0, 0, 1, 0, 0, 1, 2, 2, 3,
    0, 0, 1, 0, 1, 2, 2, 3,
    4, 4, 5, 4, 4, 5, 6, 6, 7,
];

/// Neighborhood with the centre dropped, order preserved
#[inline]
fn to_cube(neighborhood: &Neighborhood) -> [u8; 26] {
    let mut cube = [0u8; 26];
    cube[..CENTER].copy_from_slice(&neighborhood[..CENTER]);
    cube[CENTER..].copy_from_slice(&neighborhood[CENTER + 1..]);
    cube
}

/// Give `label` to every unlabelled foreground position reachable from `octant`
fn label_octant(octant: usize, label: u8, cube: &mut [u8; 26]) {
    for &(pos, shared) in &OCTANT_GRAPH[octant] {
        let pos = pos as usize;
        if cube[pos] != 1 {
            continue;
        }
        cube[pos] = label;

        let mut rest = shared;
        while rest != 0 {
            label_octant(rest.trailing_zeros() as usize, label, cube);
            rest &= rest - 1;
        }
    }
}

/// Number of 26-connected foreground components around the centre.
///
/// Stops counting at 2.
pub fn count_local_components(neighborhood: &Neighborhood) -> usize {
    let mut cube = to_cube(neighborhood);
    let mut label = 2u8;

    for i in 0..cube.len() {
        if cube[i] != 1 {
            continue;
        }
        label_octant(SEED_OCTANT[i] as usize, label, &mut cube);
        label += 1;
        if label - 2 >= 2 {
            break;
        }
    }

    (label - 2) as usize
}

/// True if removing the centre does not split its foreground neighbors
#[inline]
pub fn is_simple_point(neighborhood: &Neighborhood) -> bool {
    count_local_components(neighborhood) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::slot;

    fn with_neighbors(slots: &[usize]) -> Neighborhood {
        let mut nb = [0u8; 27];
        nb[CENTER] = 1;
        for &s in slots {
            nb[s] = 1;
        }
        nb
    }

    fn cube_coords(pos: usize) -> [usize; 3] {
        let s = if pos < CENTER { pos } else { pos + 1 };
        [s / 9, (s / 3) % 3, s % 3]
    }

    fn octant_contains(octant: usize, pos: usize) -> bool {
        let [p, r, c] = cube_coords(pos);
        let (op, or, oc) = ((octant >> 2) & 1, (octant >> 1) & 1, octant & 1);
        (op..=op + 1).contains(&p) && (or..=or + 1).contains(&r) && (oc..=oc + 1).contains(&c)
    }

    #[test]
    fn test_graph_exact_values() {
        assert_eq!(OCTANT_GRAPH[0][3], (4, 0b0000_1110));
        assert_eq!(OCTANT_GRAPH[3][4], (13, 0b1010_0010));
        assert_eq!(OCTANT_GRAPH[7][6], (25, 0));
        assert_eq!(OCTANT_GRAPH[4][6], (21, 0b1110_0000));
    }

    #[test]
    fn test_graph_matches_geometry() {
        for (octant, entries) in OCTANT_GRAPH.iter().enumerate() {
            for &(pos, shared) in entries {
                let pos = pos as usize;
                assert!(octant_contains(octant, pos));
                for other in 0..8 {
                    let expected = other != octant && octant_contains(other, pos);
                    assert_eq!(shared & (1 << other) != 0, expected,
                        "octant {} position {} other {}", octant, pos, other);
                }
            }
        }
    }

    #[test]
    fn test_seed_partition() {
        let mut sizes = [0usize; 8];
        for (pos, &seed) in SEED_OCTANT.iter().enumerate() {
            assert!(octant_contains(seed as usize, pos));
            assert!((0..seed as usize).all(|o| !octant_contains(o, pos)));
            sizes[seed as usize] += 1;
        }
        assert_eq!(sizes, [7, 4, 4, 2, 4, 2, 2, 1]);
    }

    #[test]
    fn test_no_neighbors_is_zero_components() {
        let nb = with_neighbors(&[]);
        assert_eq!(count_local_components(&nb), 0);
        assert!(is_simple_point(&nb));
    }

    #[test]
    fn test_single_neighbor_is_simple() {
        let nb = with_neighbors(&[slot(1, 1, 1)]);
        assert_eq!(count_local_components(&nb), 1);
        assert!(is_simple_point(&nb));
    }

    #[test]
    fn test_opposite_neighbors_not_simple() {
        let nb = with_neighbors(&[slot(0, 0, -1), slot(0, 0, 1)]);
        assert_eq!(count_local_components(&nb), 2);
        assert!(!is_simple_point(&nb));

        let nb = with_neighbors(&[slot(-1, -1, -1), slot(1, 1, 1)]);
        assert!(!is_simple_point(&nb));
    }

    #[test]
    fn test_ring_around_center_is_one_component() {
        // the eight in-plane neighbors form a connected ring
        let ring: Vec<usize> = [(-1, -1), (-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1)]
            .iter()
            .map(|&(dr, dc)| slot(0, dr, dc))
            .collect();
        assert!(is_simple_point(&with_neighbors(&ring)));
    }

    #[test]
    fn test_diagonal_bridge_connects() {
        // two corners joined through a shared edge neighbor
        let nb = with_neighbors(&[slot(-1, -1, -1), slot(-1, -1, 0), slot(-1, -1, 1)]);
        assert_eq!(count_local_components(&nb), 1);
    }

    #[test]
    fn test_full_neighborhood_is_simple() {
        assert!(is_simple_point(&[1u8; 27]));
    }

    #[test]
    fn test_count_saturates() {
        // four corners, no two of them adjacent
        let nb = with_neighbors(&[
            slot(-1, -1, -1),
            slot(-1, -1, 1),
            slot(1, 1, -1),
            slot(1, 1, 1),
        ]);
        assert_eq!(count_local_components(&nb), 2);

        // the in-plane face neighbors touch diagonally and form one ring
        let nb = with_neighbors(&[slot(0, 0, -1), slot(0, 0, 1), slot(0, -1, 0), slot(0, 1, 0)]);
        assert_eq!(count_local_components(&nb), 1);
    }
}
