//! Euler characteristic invariance test
//!
//! Based on: Lee, T.C., Kashyap, R.L., Chu, C.N. (1994) "Building skeleton
//! models via 3-D medial surface/axis thinning algorithms"
//! CVGIP: Graphical Models and Image Processing, 56(6):462-478
//!
//! The 26-neighborhood is split into eight overlapping 2x2x2 octants that
//! all contain the centre voxel. Each octant's occupancy is packed into an
//! 8-bit index (bit 0 is the centre, always set) and looked up in
//! [`EULER_LUT`]. The sum over all octants is eight times the change in the
//! Euler characteristic caused by deleting the centre.

use crate::volume::Neighborhood;

/// Euler characteristic contribution per octant configuration.
///
/// Only odd indices are populated. Published table, do not edit.
#[rustfmt::skip]
pub static EULER_LUT: [i8; 256] = [
    0,  1, 0, -1, 0, -1, 0,  1, 0, -3, 0, -1, 0, -1, 0,  1,
    0, -1, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1,
    0, -3, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1,
    0, -1, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1,
    0, -3, 0,  3, 0, -1, 0,  1, 0,  1, 0,  3, 0, -1, 0,  1,
    0, -1, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1,
    0,  1, 0,  3, 0,  3, 0,  1, 0,  5, 0,  3, 0,  3, 0,  1,
    0, -1, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1,
    0, -7, 0, -1, 0, -1, 0,  1, 0, -3, 0, -1, 0, -1, 0,  1,
    0, -1, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1,
    0, -3, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1,
    0, -1, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1,
    0, -3, 0,  3, 0, -1, 0,  1, 0,  1, 0,  3, 0, -1, 0,  1,
    0, -1, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1,
    0,  1, 0,  3, 0,  3, 0,  1, 0,  5, 0,  3, 0,  3, 0,  1,
    0, -1, 0,  1, 0,  1, 0, -1, 0,  3, 0,  1, 0,  1, 0, -1,
];

/// Neighborhood slots of each octant, listed from bit 7 down to bit 1
#[rustfmt::skip]
const OCTANT_SLOTS: [[usize; 7]; 8] = [
    [24, 25, 15, 16, 21, 22, 12],
    [26, 23, 17, 14, 25, 22, 16],
    [18, 21,  9, 12, 19, 22, 10],
    [20, 23, 19, 22, 11, 14, 10],
    [ 6, 15,  7, 16,  3, 12,  4],
    [ 8,  7, 17, 16,  5,  4, 14],
    [ 0,  9,  3, 12,  1, 10,  4],
    [ 2,  1, 11, 10,  5,  4, 14],
];

const OCTANT_BITS: [u8; 7] = [128, 64, 32, 16, 8, 4, 2];

/// LUT index for one octant
#[inline]
fn octant_index(neighborhood: &Neighborhood, slots: &[usize; 7]) -> usize {
    let mut n = 1u8;
    for (&slot, &bit) in slots.iter().zip(OCTANT_BITS.iter()) {
        if neighborhood[slot] == 1 {
            n |= bit;
        }
    }
    n as usize
}

/// Sum of octant contributions (8x the Euler characteristic change)
pub fn euler_change(neighborhood: &Neighborhood) -> i32 {
    OCTANT_SLOTS
        .iter()
        .map(|slots| EULER_LUT[octant_index(neighborhood, slots)] as i32)
        .sum()
}

/// True if deleting the centre voxel leaves the Euler characteristic unchanged
#[inline]
pub fn is_euler_invariant(neighborhood: &Neighborhood) -> bool {
    euler_change(neighborhood) == 0
}
