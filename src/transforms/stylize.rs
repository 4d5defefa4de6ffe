//! Editor filter presets: grayscale, sepia, invert.
//!
//! One-click per-pixel presets. The editor's remaining presets resolve
//! to passes elsewhere in this crate: "blur" is
//! [`super::sharpen::box_blur_3x3`], "sharpen" is
//! [`super::sharpen::sharpen`] at strength 1.0.

use ndarray::{Array3, ArrayView3};

use super::luma;

/// Convert to grayscale: R = G = B = Rec. 601 luma, alpha preserved.
pub fn grayscale(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let gray = luma(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
                .round()
                .clamp(0.0, 255.0) as u8;
            output[[y, x, 0]] = gray;
            output[[y, x, 1]] = gray;
            output[[y, x, 2]] = gray;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }
    output
}

/// Apply the standard sepia matrix, each channel capped at 255.
pub fn sepia(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            let nr = r * 0.393 + g * 0.769 + b * 0.189;
            let ng = r * 0.349 + g * 0.686 + b * 0.168;
            let nb = r * 0.272 + g * 0.534 + b * 0.131;

            output[[y, x, 0]] = nr.round().min(255.0) as u8;
            output[[y, x, 1]] = ng.round().min(255.0) as u8;
            output[[y, x, 2]] = nb.round().min(255.0) as u8;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }
    output
}

/// Invert every color channel, alpha preserved.
pub fn invert(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            output[[y, x, 0]] = 255 - input[[y, x, 0]];
            output[[y, x, 1]] = 255 - input[[y, x, 1]];
            output[[y, x, 2]] = 255 - input[[y, x, 2]];
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
    fn test_grayscale_channels_equal() {
        let img = one_px([200, 100, 50, 128]);
        let result = grayscale(img.view());
        let v = result[[0, 0, 0]];
        assert_eq!(result[[0, 0, 1]], v);
        assert_eq!(result[[0, 0, 2]], v);
        assert_eq!(result[[0, 0, 3]], 128);
        // 0.299*200 + 0.587*100 + 0.114*50 = 124.2
        assert_eq!(v, 124);
    }

    #[test]
    fn test_sepia_caps_at_white() {
        let img = one_px([255, 255, 255, 255]);
        let result = sepia(img.view());
        // Red row sums to 1.351, capped.
        assert_eq!(result[[0, 0, 0]], 255);
        assert!(result[[0, 0, 2]] < 255);
    }

    #[test]
    fn test_sepia_known_value() {
        let img = one_px([100, 100, 100, 255]);
        let result = sepia(img.view());
        assert_eq!(result[[0, 0, 0]], 135); // 100 * 1.351
        assert_eq!(result[[0, 0, 1]], 120); // 100 * 1.203
        assert_eq!(result[[0, 0, 2]], 94); // 100 * 0.937
    }

    #[test]
    fn test_invert_involution() {
        let img = one_px([13, 200, 99, 77]);
        let twice = invert(invert(img.view()).view());
        assert_eq!(twice, img);
    }

    #[test]
    fn test_invert_black_white() {
        let img = one_px([0, 255, 128, 255]);
        let result = invert(img.view());
        assert_eq!(result[[0, 0, 0]], 255);
        assert_eq!(result[[0, 0, 1]], 0);
        assert_eq!(result[[0, 0, 2]], 127);
    }
}
