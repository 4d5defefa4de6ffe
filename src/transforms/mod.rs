//! Pixel transform passes shared by the document tools.
//!
//! ## Buffer Format
//!
//! Every pass accepts an RGBA image as an `ArrayView3<u8>` of shape
//! `(height, width, 4)` and returns a fresh `Array3<u8>` of identical
//! dimensions. Input buffers are never mutated and never retained.
//!
//! ## Architecture
//!
//! All passes follow these principles:
//! - **Total functions** - no failure mode for any non-empty buffer;
//!   out-of-range parameters are clamped, never rejected
//! - **Alpha aware** - alpha is preserved unless the pass defines it
//!   (the scan pass forces it opaque, background removal rewrites it)
//! - **Snapshot discipline** - convolution passes read the input view
//!   while writing the output, so already-written neighbors never feed
//!   back into the kernel
//! - **Stateless** - no state between invocations; identity parameters
//!   return the input values unchanged
//!
//! ## Pass Categories
//!
//! - **scan**: grayscale-threshold-contrast binarization for documents
//! - **sharpen**: cross-kernel sharpening and 3x3 box blur
//! - **adjust**: brightness/contrast/saturation/hue in one pass
//! - **background**: background-color knockout with alpha feathering
//! - **stylize**: grayscale, sepia, and invert presets

pub mod adjust;
pub mod background;
pub mod scan;
pub mod sharpen;
pub mod stylize;

/// Rec. 601 luma coefficients used by the scan, saturation, and grayscale
/// passes.
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Per-pixel Rec. 601 luma from u8 channels.
#[inline]
pub(crate) fn luma(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}
