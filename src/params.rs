//! Transform parameters.
//!
//! Each tool's slider values become one plain struct here, clamped before
//! use rather than rejected. Defaults match the tool UIs: threshold 180,
//! everything else 0.

/// Parameters for the black-and-white scan pass.
#[derive(Clone, Copy, Debug)]
pub struct ScanParams {
    /// Binarization threshold (0-255). Luma at or above becomes white.
    pub threshold: i32,
    /// Contrast adjustment (-100 to 100) applied to luma before thresholding.
    pub contrast: i32,
    /// Sharpening strength (0.0-2.0). 0 disables the sharpen pass.
    pub sharpen: f32,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            threshold: 180,
            contrast: 0,
            sharpen: 0.0,
        }
    }
}

impl ScanParams {
    /// Clamp all fields into their valid ranges.
    pub fn clamped(self) -> Self {
        Self {
            threshold: self.threshold.clamp(0, 255),
            contrast: self.contrast.clamp(-100, 100),
            sharpen: self.sharpen.clamp(0.0, 2.0),
        }
    }
}

/// Parameters for the editor's combined color adjustment pass.
///
/// Stages are applied in fixed order: brightness, contrast, saturation,
/// hue. A stage with value 0 is skipped; an all-zero set is an identity.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adjustments {
    /// Additive brightness (-255 to 255).
    pub brightness: i32,
    /// Contrast (-100 to 100).
    pub contrast: i32,
    /// Saturation in percent (-100 to 100). -100 is grayscale.
    pub saturation: i32,
    /// Hue rotation in degrees (-360 to 360).
    pub hue: i32,
}

impl Adjustments {
    /// True when every stage is zero and the pass can return a copy.
    pub fn is_identity(&self) -> bool {
        self.brightness == 0 && self.contrast == 0 && self.saturation == 0 && self.hue == 0
    }

    /// Clamp all fields into their valid ranges.
    pub fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(-255, 255),
            contrast: self.contrast.clamp(-100, 100),
            saturation: self.saturation.clamp(-100, 100),
            hue: self.hue.clamp(-360, 360),
        }
    }
}

/// Parameters for background removal.
#[derive(Clone, Copy, Debug)]
pub struct CutoutParams {
    /// Tolerance slider in percent (0-100), scaled by 2.55 to an RGB
    /// distance threshold.
    pub tolerance: i32,
    /// Feather slider value. The effective blur radius is
    /// `round(feather / 4)`; a radius of 0 leaves the cutout binary.
    pub feather: i32,
}

impl Default for CutoutParams {
    fn default() -> Self {
        Self {
            tolerance: 30,
            feather: 0,
        }
    }
}

impl CutoutParams {
    /// Clamp all fields into their valid ranges.
    pub fn clamped(self) -> Self {
        Self {
            tolerance: self.tolerance.clamp(0, 100),
            feather: self.feather.max(0),
        }
    }

    /// Tolerance as an RGB-space Euclidean distance (0-255 scale).
    pub fn tolerance_distance(&self) -> f64 {
        self.tolerance.clamp(0, 100) as f64 * 2.55
    }

    /// Effective box-blur radius for feathering.
    pub fn feather_radius(&self) -> usize {
        (self.feather.max(0) as f64 / 4.0).round() as usize
    }
}
