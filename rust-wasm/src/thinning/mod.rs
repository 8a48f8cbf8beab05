//! Topology-preserving thinning
//!
//! Based on: Lee, T.C., Kashyap, R.L., Chu, C.N. (1994) "Building skeleton
//! models via 3-D medial surface/axis thinning algorithms"
//!
//! - `direction`: the six border directions and their pass order
//! - `euler`: Euler characteristic invariance via the octant lookup table
//! - `endpoint`: endpoint test
//! - `simple_point`: local connectivity via octant flood fill
//! - `scanner`: per-direction border candidate collection
//! - `driver`: the iterative collect/recheck loop and public entry points

pub mod direction;
pub mod euler;
pub mod endpoint;
pub mod simple_point;
pub mod scanner;
pub mod driver;

pub use direction::Direction;
pub use euler::{euler_change, is_euler_invariant, EULER_LUT};
pub use endpoint::is_endpoint;
pub use simple_point::{count_local_components, is_simple_point};
pub use scanner::collect_border_candidates;
pub use driver::{
    skeletonize, skeletonize_array, skeletonize_unpadded, skeletonize_with_progress,
    thin_volume, ThinningReport,
};
