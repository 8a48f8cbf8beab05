//! Utility functions for skeletonization
//!
//! - Zero padding and unpadding of binary volumes
//! - Global topology measurements (Euler characteristic, components, cavities)

pub mod padding;
pub mod topology;

pub use padding::*;
pub use topology::*;
