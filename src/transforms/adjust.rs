//! Combined color adjustments: brightness, contrast, saturation, hue.
//!
//! The editor applies all four sliders in a single per-pixel pass, in
//! fixed order: brightness, contrast, saturation, hue. Each stage runs
//! only when its value is non-zero; an all-zero parameter set returns a
//! copy without touching any pixel.

use ndarray::{Array3, ArrayView3};

use super::{LUMA_B, LUMA_G, LUMA_R};
use crate::params::Adjustments;
use crate::transforms::scan::contrast_factor;

// ============================================================================
// Color Space Conversion Utilities
// ============================================================================

/// Convert RGB to HSL.
/// Input: r, g, b in 0.0-1.0
/// Output: (h, s, l) where h is 0.0-360.0, s and l are 0.0-1.0
#[inline]
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < 1e-6 {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < 1e-6 {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if (max - g).abs() < 1e-6 {
        ((b - r) / d + 2.0) * 60.0
    } else {
        ((r - g) / d + 4.0) * 60.0
    };

    (h, s, l)
}

/// Convert HSL to RGB.
/// Input: h in 0.0-360.0, s and l in 0.0-1.0
/// Output: (r, g, b) in 0.0-1.0
#[inline]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s.abs() < 1e-6 {
        return (l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h_norm = h / 360.0;

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 { t += 1.0; }
        if t > 1.0 { t -= 1.0; }
        if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
        if t < 0.5 { return q; }
        if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
        p
    }

    let r = hue_to_rgb(p, q, h_norm + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h_norm);
    let b = hue_to_rgb(p, q, h_norm - 1.0 / 3.0);

    (r, g, b)
}

// ============================================================================
// Combined Adjustment Pass
// ============================================================================

/// Apply brightness, contrast, saturation, and hue in one pass.
///
/// Stages run in that fixed order, each only when its slider is
/// non-zero. Channel values stay in floating point through the chain and
/// are rounded back to u8 once at the end. Alpha is preserved.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `params` - Adjustment values; clamped before use
///
/// # Returns
/// Adjusted image of identical dimensions
pub fn adjust(input: ArrayView3<u8>, params: &Adjustments) -> Array3<u8> {
    if params.is_identity() {
        return input.to_owned();
    }

    let params = params.clamped();
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    let brightness = params.brightness as f32;
    let factor = contrast_factor(params.contrast);
    let sat_factor = 1.0 + params.saturation as f32 / 100.0;
    let hue_degrees = params.hue as f32;

    for y in 0..height {
        for x in 0..width {
            let mut r = input[[y, x, 0]] as f32;
            let mut g = input[[y, x, 1]] as f32;
            let mut b = input[[y, x, 2]] as f32;

            if params.brightness != 0 {
                r = (r + brightness).clamp(0.0, 255.0);
                g = (g + brightness).clamp(0.0, 255.0);
                b = (b + brightness).clamp(0.0, 255.0);
            }
            if params.contrast != 0 {
                r = (factor * (r - 128.0) + 128.0).clamp(0.0, 255.0);
                g = (factor * (g - 128.0) + 128.0).clamp(0.0, 255.0);
                b = (factor * (b - 128.0) + 128.0).clamp(0.0, 255.0);
            }
            if params.saturation != 0 {
                let gray = LUMA_R * r + LUMA_G * g + LUMA_B * b;
                r = (gray + sat_factor * (r - gray)).clamp(0.0, 255.0);
                g = (gray + sat_factor * (g - gray)).clamp(0.0, 255.0);
                b = (gray + sat_factor * (b - gray)).clamp(0.0, 255.0);
            }
            if params.hue != 0 {
                let (h, s, l) = rgb_to_hsl(r / 255.0, g / 255.0, b / 255.0);
                let new_h = (h + hue_degrees).rem_euclid(360.0);
                let (nr, ng, nb) = hsl_to_rgb(new_h, s, l);
                r = nr * 255.0;
                g = ng * 255.0;
                b = nb * 255.0;
            }

            output[[y, x, 0]] = r.round().clamp(0.0, 255.0) as u8;
            output[[y, x, 1]] = g.round().clamp(0.0, 255.0) as u8;
            output[[y, x, 2]] = b.round().clamp(0.0, 255.0) as u8;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_px(px: [u8; 4]) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        for c in 0..4 {
            img[[0, 0, c]] = px[c];
        }
        img
    }

    #[test]
    fn test_rgb_hsl_roundtrip() {
        let (r, g, b) = (0.8, 0.4, 0.2);
        let (h, s, l) = rgb_to_hsl(r, g, b);
        let (nr, ng, nb) = hsl_to_rgb(h, s, l);

        assert!((r - nr).abs() < 0.001);
        assert!((g - ng).abs() < 0.001);
        assert!((b - nb).abs() < 0.001);
    }

    #[test]
    fn test_u8_roundtrip_within_one() {
        // Hue stage with 360 degrees wraps to the same hue; every channel
        // must come back within rounding tolerance.
        let cases: [[u8; 3]; 5] = [
            [200, 100, 50],
            [0, 0, 0],
            [255, 255, 255],
            [17, 230, 94],
            [128, 128, 129],
        ];
        for rgb in cases {
            let img = one_px([rgb[0], rgb[1], rgb[2], 255]);
            let result = adjust(
                img.view(),
                &Adjustments {
                    hue: 360,
                    ..Default::default()
                },
            );
            for c in 0..3 {
                assert!(
                    (result[[0, 0, c]] as i32 - rgb[c] as i32).abs() <= 1,
                    "channel {} drifted: {} -> {}",
                    c,
                    rgb[c],
                    result[[0, 0, c]]
                );
            }
        }
    }

    #[test]
    fn test_identity_params_copy_values() {
        let img = one_px([13, 77, 200, 128]);
        let result = adjust(img.view(), &Adjustments::default());
        assert_eq!(result, img);
    }

    #[test]
    fn test_brightness_additive() {
        let img = one_px([100, 200, 250, 255]);
        let result = adjust(
            img.view(),
            &Adjustments {
                brightness: 20,
                ..Default::default()
            },
        );
        assert_eq!(result[[0, 0, 0]], 120);
        assert_eq!(result[[0, 0, 1]], 220);
        assert_eq!(result[[0, 0, 2]], 255); // clamped
    }

    #[test]
    fn test_negative_brightness_clamps_at_black() {
        let img = one_px([10, 128, 0, 255]);
        let result = adjust(
            img.view(),
            &Adjustments {
                brightness: -50,
                ..Default::default()
            },
        );
        assert_eq!(result[[0, 0, 0]], 0);
        assert_eq!(result[[0, 0, 1]], 78);
    }

    #[test]
    fn test_contrast_fixed_point_at_128() {
        let img = one_px([128, 128, 128, 255]);
        let result = adjust(
            img.view(),
            &Adjustments {
                contrast: 60,
                ..Default::default()
            },
        );
        assert_eq!(result[[0, 0, 0]], 128);
    }

    #[test]
    fn test_saturation_minus_100_is_grayscale() {
        let img = one_px([200, 100, 50, 255]);
        let result = adjust(
            img.view(),
            &Adjustments {
                saturation: -100,
                ..Default::default()
            },
        );
        let gray = (0.299 * 200.0 + 0.587 * 100.0 + 0.114 * 50.0f32).round() as u8;
        assert_eq!(result[[0, 0, 0]], gray);
        assert_eq!(result[[0, 0, 1]], gray);
        assert_eq!(result[[0, 0, 2]], gray);
    }

    #[test]
    fn test_saturation_preserves_gray() {
        let img = one_px([90, 90, 90, 255]);
        let result = adjust(
            img.view(),
            &Adjustments {
                saturation: 80,
                ..Default::default()
            },
        );
        assert_eq!(result[[0, 0, 0]], 90);
        assert_eq!(result[[0, 0, 1]], 90);
        assert_eq!(result[[0, 0, 2]], 90);
    }

    #[test]
    fn test_hue_180_red_to_cyan() {
        let img = one_px([255, 0, 0, 255]);
        let result = adjust(
            img.view(),
            &Adjustments {
                hue: 180,
                ..Default::default()
            },
        );
        assert!(result[[0, 0, 0]] < 10);
        assert!(result[[0, 0, 1]] > 245);
        assert!(result[[0, 0, 2]] > 245);
    }

    #[test]
    fn test_negative_hue_wraps() {
        // -90 and +270 land on the same hue.
        let img = one_px([180, 60, 240, 255]);
        let a = adjust(
            img.view(),
            &Adjustments {
                hue: -90,
                ..Default::default()
            },
        );
        let b = adjust(
            img.view(),
            &Adjustments {
                hue: 270,
                ..Default::default()
            },
        );
        for c in 0..3 {
            assert!((a[[0, 0, c]] as i32 - b[[0, 0, c]] as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_alpha_preserved() {
        let img = one_px([40, 80, 120, 17]);
        let result = adjust(
            img.view(),
            &Adjustments {
                brightness: 30,
                contrast: 10,
                saturation: 25,
                hue: 45,
            },
        );
        assert_eq!(result[[0, 0, 3]], 17);
    }

    #[test]
    fn test_stage_order_brightness_before_contrast() {
        // brightness +100 then contrast: 50 -> 150 -> stretched above 150.
        // Contrast first would stretch 50 far below 128 and brightness
        // could not recover the same value.
        let img = one_px([50, 50, 50, 255]);
        let result = adjust(
            img.view(),
            &Adjustments {
                brightness: 100,
                contrast: 50,
                ..Default::default()
            },
        );
        let factor = (259.0 * (50.0 + 255.0)) / (255.0 * (259.0 - 50.0));
        let expected = (factor * (150.0 - 128.0) + 128.0f32).round() as u8;
        assert_eq!(result[[0, 0, 0]], expected);
    }
}
