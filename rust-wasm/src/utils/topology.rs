//! Global topology measurements for binary volumes
//!
//! Foreground uses 26-connectivity and background 6-connectivity, the pair
//! under which thinning preserves topology. The Euler characteristic is
//! computed independently of the octant lookup table by counting the
//! vertices, edges, faces and cubes of the union of closed foreground voxels.

use std::collections::VecDeque;

use crate::volume::Shape;

/// Voxel adjacency
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    /// Face neighbors only
    Six,
    /// Face, edge and corner neighbors
    TwentySix,
}

impl Connectivity {
    fn offsets(self) -> Vec<(isize, isize, isize)> {
        let mut offsets = Vec::with_capacity(26);
        for dp in -1..=1isize {
            for dr in -1..=1isize {
                for dc in -1..=1isize {
                    let manhattan = dp.abs() + dr.abs() + dc.abs();
                    let keep = match self {
                        Connectivity::Six => manhattan == 1,
                        Connectivity::TwentySix => manhattan > 0,
                    };
                    if keep {
                        offsets.push((dp, dr, dc));
                    }
                }
            }
        }
        offsets
    }
}

/// Euler characteristic of the foreground (V - E + F - C)
pub fn euler_characteristic(data: &[u8], shape: Shape) -> i64 {
    let mut chi = 0i64;
    for cell in 0..8u8 {
        // extent 1 along an axis spans a voxel, 0 is a lattice plane
        let extent = [(cell >> 2) & 1, (cell >> 1) & 1, cell & 1];
        let dimension = extent.iter().sum::<u8>();
        let count = count_cells(data, shape, extent) as i64;
        chi += if dimension % 2 == 0 { count } else { -count };
    }
    chi
}

/// Number of lattice cells of the given extent touched by foreground
fn count_cells(data: &[u8], shape: Shape, extent: [u8; 3]) -> usize {
    let dims = shape.as_array();
    let positions = |axis: usize| dims[axis] + 1 - extent[axis] as usize;
    // voxels incident to cell position `i` along `axis`
    let incident = |axis: usize, i: usize| {
        if extent[axis] == 1 {
            i..i + 1
        } else {
            i.saturating_sub(1)..(i + 1).min(dims[axis])
        }
    };

    let mut count = 0usize;
    for i in 0..positions(0) {
        for j in 0..positions(1) {
            for k in 0..positions(2) {
                let touched = incident(0, i).any(|p| {
                    incident(1, j).any(|r| {
                        incident(2, k).any(|c| data[shape.index(p, r, c)] != 0)
                    })
                });
                if touched {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Count connected regions of voxels equal to `target`
fn count_regions(data: &[u8], shape: Shape, target: u8, connectivity: Connectivity) -> usize {
    let offsets = connectivity.offsets();
    let mut visited = vec![false; data.len()];
    let mut queue = VecDeque::new();
    let mut regions = 0usize;

    for start in 0..data.len() {
        if visited[start] || data[start] != target {
            continue;
        }
        regions += 1;
        visited[start] = true;
        queue.push_back(start);

        while let Some(idx) = queue.pop_front() {
            let (p, r, c) = shape.coords(idx);
            for &(dp, dr, dc) in &offsets {
                let np = p as isize + dp;
                let nr = r as isize + dr;
                let nc = c as isize + dc;
                if np < 0 || nr < 0 || nc < 0
                    || np >= shape.planes as isize
                    || nr >= shape.rows as isize
                    || nc >= shape.cols as isize
                {
                    continue;
                }
                let n_idx = shape.index(np as usize, nr as usize, nc as usize);
                if !visited[n_idx] && data[n_idx] == target {
                    visited[n_idx] = true;
                    queue.push_back(n_idx);
                }
            }
        }
    }

    regions
}

/// Number of foreground components
pub fn count_components(data: &[u8], shape: Shape, connectivity: Connectivity) -> usize {
    count_regions(data, shape, 1, connectivity)
}

/// Number of 6-connected background components
pub fn count_background_components(data: &[u8], shape: Shape) -> usize {
    count_regions(data, shape, 0, Connectivity::Six)
}

/// Topological invariants of a padded binary volume
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopologySummary {
    pub euler: i64,
    /// 26-connected foreground components
    pub objects: usize,
    /// Enclosed background components
    pub cavities: usize,
    /// Handles, from euler = objects - tunnels + cavities
    pub tunnels: i64,
}

impl TopologySummary {
    pub fn measure(data: &[u8], shape: Shape) -> Self {
        let euler = euler_characteristic(data, shape);
        let objects = count_components(data, shape, Connectivity::TwentySix);
        let cavities = count_background_components(data, shape).saturating_sub(1);
        Self {
            euler,
            objects,
            cavities,
            tunnels: objects as i64 + cavities as i64 - euler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(shape: Shape, lo: usize, hi: usize) -> Vec<u8> {
        let mut data = vec![0u8; shape.len()];
        for p in lo..=hi {
            for r in lo..=hi {
                for c in lo..=hi {
                    data[shape.index(p, r, c)] = 1;
                }
            }
        }
        data
    }

    #[test]
    fn test_empty_and_single_voxel() {
        let shape = Shape::new(3, 3, 3);
        let mut data = vec![0u8; 27];
        assert_eq!(euler_characteristic(&data, shape), 0);
        data[13] = 1;
        assert_eq!(euler_characteristic(&data, shape), 1);
        assert_eq!(count_components(&data, shape, Connectivity::Six), 1);
    }

    #[test]
    fn test_hollow_cube_has_cavity() {
        let shape = Shape::new(5, 5, 5);
        let mut data = block(shape, 1, 3);
        data[shape.index(2, 2, 2)] = 0;

        let summary = TopologySummary::measure(&data, shape);
        assert_eq!(summary, TopologySummary { euler: 2, objects: 1, cavities: 1, tunnels: 0 });
    }

    #[test]
    fn test_tunnel() {
        let shape = Shape::new(5, 5, 5);
        let mut data = block(shape, 1, 3);
        for p in 1..=3 {
            data[shape.index(p, 2, 2)] = 0;
        }

        let summary = TopologySummary::measure(&data, shape);
        assert_eq!(summary, TopologySummary { euler: 0, objects: 1, cavities: 0, tunnels: 1 });
    }

    #[test]
    fn test_diagonal_voxels_connectivity() {
        let shape = Shape::new(4, 4, 4);
        let mut data = vec![0u8; shape.len()];
        data[shape.index(1, 1, 1)] = 1;
        data[shape.index(2, 2, 2)] = 1;

        assert_eq!(count_components(&data, shape, Connectivity::Six), 2);
        assert_eq!(count_components(&data, shape, Connectivity::TwentySix), 1);
        // corner-touching closed cubes share one vertex
        assert_eq!(euler_characteristic(&data, shape), 1);
    }

    #[test]
    fn test_offsets_sizes() {
        assert_eq!(Connectivity::Six.offsets().len(), 6);
        assert_eq!(Connectivity::TwentySix.offsets().len(), 26);
    }
}
