//! Skeleton-WASM: WebAssembly-accelerated topology-preserving thinning
//!
//! This crate erodes binary 3D (and single-plane 2D) masks to a one-voxel
//! wide skeleton while preserving connected components, cavities, tunnels and
//! the Euler characteristic.
//!
//! # Modules
//! - `volume`: Padded binary volumes and 3x3x3 neighborhood access
//! - `thinning`: Euler/endpoint/simple-point tests and the thinning loop
//! - `utils`: Zero padding and global topology measurements
//! - `error`: Input validation errors

pub mod error;
pub mod volume;
pub mod thinning;
pub mod utils;

pub use error::{SkeletonError, SkeletonResult};
pub use thinning::{
    skeletonize, skeletonize_array, skeletonize_unpadded, skeletonize_with_progress,
    ThinningReport,
};
pub use volume::{Shape, Volume};

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// ============================================================================
// WASM Exports: Thinning
// ============================================================================

/// Skeletonize a zero-padded binary mask in place
///
/// # Arguments
/// * `data` - Uint8Array mask (nx * ny * nz), 0/1, x fastest, modified in-place
/// * `nx`, `ny`, `nz` - Array dimensions including the one-voxel zero border
///
/// # Returns
/// Number of voxels removed
#[wasm_bindgen]
pub fn skeletonize_wasm(
    data: &mut [u8],
    nx: usize, ny: usize, nz: usize,
) -> Result<usize, JsValue> {
    console_log!("WASM skeletonize: {}x{}x{}", nx, ny, nz);

    let report = thinning::skeletonize(data, &[nz, ny, nx])
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    console_log!("WASM skeletonize complete: {} rounds, {} voxels removed",
                 report.rounds, report.removed);
    Ok(report.removed)
}

/// Skeletonize with progress callback
///
/// `progress_callback` is called after every round as `(round, removed)`.
#[wasm_bindgen]
pub fn skeletonize_wasm_with_progress(
    data: &mut [u8],
    nx: usize, ny: usize, nz: usize,
    progress_callback: &js_sys::Function,
) -> Result<usize, JsValue> {
    console_log!("WASM skeletonize with progress: {}x{}x{}", nx, ny, nz);

    let callback = progress_callback.clone();
    let report = thinning::skeletonize_with_progress(
        data, &[nz, ny, nx],
        |round, removed| {
            let this = JsValue::null();
            let _ = callback.call2(&this,
                &JsValue::from(round as u32),
                &JsValue::from(removed as u32));
        }
    ).map_err(|e| JsValue::from_str(&e.to_string()))?;

    console_log!("WASM skeletonize complete: {} rounds, {} voxels removed",
                 report.rounds, report.removed);
    Ok(report.removed)
}

/// Skeletonize a binary mask that has no zero border
///
/// A copy is padded internally. Pass `nz = 1` for a 2D image.
#[wasm_bindgen]
pub fn skeletonize_unpadded_wasm(
    data: &mut [u8],
    nx: usize, ny: usize, nz: usize,
) -> Result<usize, JsValue> {
    console_log!("WASM skeletonize_unpadded: {}x{}x{}", nx, ny, nz);

    let report = thinning::skeletonize_unpadded(data, &[nz, ny, nx])
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    console_log!("WASM skeletonize_unpadded complete: {} voxels removed", report.removed);
    Ok(report.removed)
}

// ============================================================================
// WASM Exports: Topology
// ============================================================================

/// Euler characteristic of a binary mask (26-connected foreground)
#[wasm_bindgen]
pub fn euler_characteristic_wasm(
    data: &[u8],
    nx: usize, ny: usize, nz: usize,
) -> Result<i64, JsValue> {
    let shape = Shape::new(nz, ny, nx);
    let expected = shape.voxel_count().map_err(|e| JsValue::from_str(&e.to_string()))?;
    if data.len() != expected {
        return Err(JsValue::from_str(
            &SkeletonError::length_mismatch(expected, data.len()).to_string()));
    }
    Ok(utils::euler_characteristic(data, shape))
}

/// Get version string
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
