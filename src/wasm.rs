//! WebAssembly exports for the document tool pages.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Each
//! takes the flat RGBA byte array read back from a canvas plus its
//! dimensions, and returns a flat array of the same length. Parameter
//! values are clamped inside the transforms; a data length that does
//! not match `width * height * 4` is a caller bug and panics at the
//! shape check.

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::params::{Adjustments, CutoutParams, ScanParams};
use crate::transforms::{adjust, background, scan, sharpen, stylize};

fn to_rgba(data: &[u8], width: usize, height: usize) -> Array3<u8> {
    Array3::from_shape_vec((height, width, 4), data.to_vec()).expect("Invalid dimensions")
}

// ============================================================================
// Scan Conversion
// ============================================================================

/// Convert a page to black and white for scanning.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `threshold` - Binarization threshold (0-255)
/// * `contrast` - Contrast adjustment (-100 to 100)
/// * `sharpen` - Sharpening strength (0.0-2.0), 0 disables
///
/// # Returns
/// Flat array of RGBA bytes, pure black/white and fully opaque
#[wasm_bindgen]
pub fn scan_document_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    threshold: i32,
    contrast: i32,
    sharpen: f32,
) -> Vec<u8> {
    let input = to_rgba(data, width, height);
    let params = ScanParams {
        threshold,
        contrast,
        sharpen,
    };
    let result = scan::scan_document(input.view(), &params);
    result.into_raw_vec_and_offset().0
}

// ============================================================================
// Editor Adjustments
// ============================================================================

/// Apply the editor's brightness/contrast/saturation/hue sliders.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `brightness` - Additive brightness (-255 to 255)
/// * `contrast` - Contrast (-100 to 100)
/// * `saturation` - Saturation percent (-100 to 100)
/// * `hue` - Hue rotation in degrees (-360 to 360)
///
/// # Returns
/// Flat array of adjusted RGBA bytes
#[wasm_bindgen]
pub fn adjust_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    brightness: i32,
    contrast: i32,
    saturation: i32,
    hue: i32,
) -> Vec<u8> {
    let input = to_rgba(data, width, height);
    let params = Adjustments {
        brightness,
        contrast,
        saturation,
        hue,
    };
    let result = adjust::adjust(input.view(), &params);
    result.into_raw_vec_and_offset().0
}

// ============================================================================
// Editor Filter Presets
// ============================================================================

/// Grayscale preset.
#[wasm_bindgen]
pub fn grayscale_wasm(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let input = to_rgba(data, width, height);
    stylize::grayscale(input.view()).into_raw_vec_and_offset().0
}

/// Sepia preset.
#[wasm_bindgen]
pub fn sepia_wasm(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let input = to_rgba(data, width, height);
    stylize::sepia(input.view()).into_raw_vec_and_offset().0
}

/// Invert preset.
#[wasm_bindgen]
pub fn invert_wasm(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let input = to_rgba(data, width, height);
    stylize::invert(input.view()).into_raw_vec_and_offset().0
}

/// Blur preset: 3x3 box blur.
#[wasm_bindgen]
pub fn box_blur_wasm(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let input = to_rgba(data, width, height);
    sharpen::box_blur_3x3(input.view()).into_raw_vec_and_offset().0
}

/// Sharpen with tunable strength (the editor preset uses 1.0).
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `amount` - Sharpening strength (0.0-2.0)
#[wasm_bindgen]
pub fn sharpen_wasm(data: &[u8], width: usize, height: usize, amount: f32) -> Vec<u8> {
    let input = to_rgba(data, width, height);
    sharpen::sharpen(input.view(), amount).into_raw_vec_and_offset().0
}

// ============================================================================
// Background Removal
// ============================================================================

/// Remove the background estimated from the image border.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `tolerance` - Tolerance slider in percent (0-100)
/// * `feather` - Feather slider; blur radius is `round(feather / 4)`
///
/// # Returns
/// Flat array with the cutout written into the alpha channel
#[wasm_bindgen]
pub fn remove_background_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    tolerance: i32,
    feather: i32,
) -> Vec<u8> {
    let input = to_rgba(data, width, height);
    let params = CutoutParams { tolerance, feather };
    let result = background::knockout_background(input.view(), &params);
    result.into_raw_vec_and_offset().0
}
