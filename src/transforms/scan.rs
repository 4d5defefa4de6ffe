//! Black-and-white scan conversion.
//!
//! Turns a photographed or rendered document page into a pure
//! black-and-white image: per-pixel luma, optional contrast stretch,
//! then a hard threshold. The output is suitable for PDF assembly or
//! PNG export by the calling tool.

use ndarray::{Array3, ArrayView3};

use super::{luma, sharpen};
use crate::params::ScanParams;

/// Contrast factor for a slider value in -100..=100.
///
/// The standard 259-formula: identity at 0, flattens toward gray for
/// negative values, stretches around 128 for positive ones.
#[inline]
pub(crate) fn contrast_factor(contrast: i32) -> f32 {
    (259.0 * (contrast as f32 + 255.0)) / (255.0 * (259.0 - contrast as f32))
}

/// Binarize an RGBA image with optional contrast adjustment.
///
/// Per pixel: luma = 0.299 R + 0.587 G + 0.114 B; if `contrast` is
/// non-zero the luma is remapped around 128 first; the pixel becomes
/// white where the result reaches `threshold` and black otherwise.
/// Alpha is forced opaque.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `threshold` - Binarization threshold, clamped to 0-255
/// * `contrast` - Contrast adjustment, clamped to -100..100
///
/// # Returns
/// Binary black/white image of identical dimensions
pub fn threshold_bw(input: ArrayView3<u8>, threshold: i32, contrast: i32) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    let threshold = threshold.clamp(0, 255) as f32;
    let contrast = contrast.clamp(-100, 100);
    let factor = contrast_factor(contrast);

    for y in 0..height {
        for x in 0..width {
            let mut gray = luma(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
            if contrast != 0 {
                gray = (factor * (gray - 128.0) + 128.0).clamp(0.0, 255.0);
            }
            let v = if gray >= threshold { 255 } else { 0 };
            output[[y, x, 0]] = v;
            output[[y, x, 1]] = v;
            output[[y, x, 2]] = v;
            output[[y, x, 3]] = 255;
        }
    }
    output
}

/// Full scan pipeline: threshold pass, then sharpening when requested.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `params` - Scan parameters; clamped before use
///
/// # Returns
/// Binary black/white page of identical dimensions
pub fn scan_document(input: ArrayView3<u8>, params: &ScanParams) -> Array3<u8> {
    let params = params.clamped();
    let bw = threshold_bw(input, params.threshold, params.contrast);
    if params.sharpen > 0.0 {
        sharpen::sharpen(bw.view(), params.sharpen)
    } else {
        bw
    }
}
