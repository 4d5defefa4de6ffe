//! docpix - pixel transform core for browser document tools
//!
//! The per-pixel processing shared by a set of browser-resident
//! document utilities: black-and-white scan conversion, the canvas
//! editor's color adjustments and filter presets, and background
//! removal. The calling glue decodes an image onto an offscreen
//! surface, reads back its pixels, runs one or more passes from this
//! crate, and re-encodes or displays the result.
//!
//! ## Image Format
//!
//! All passes work on 8-bit RGBA buffers shaped `(height, width, 4)`,
//! matching the layout read back from a 2D canvas. Every pass is a
//! total function: it accepts any non-empty buffer, clamps its
//! parameters into range, and returns a new buffer of identical
//! dimensions. Input buffers are never mutated, so callers that keep
//! an original for undo can pass a view of it repeatedly.
//!
//! ## Passes
//!
//! - [`transforms::scan`] - grayscale-threshold-contrast binarization
//! - [`transforms::sharpen`] - cross-kernel sharpening and 3x3 box blur
//! - [`transforms::adjust`] - brightness/contrast/saturation/hue
//! - [`transforms::background`] - background knockout with feathering
//! - [`transforms::stylize`] - grayscale, sepia, and invert presets

pub mod params;
pub mod transforms;

#[cfg(feature = "wasm")]
pub mod wasm;
