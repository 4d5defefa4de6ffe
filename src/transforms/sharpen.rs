//! Sharpening and box blur.
//!
//! Both passes are 3x3 convolutions that read the input snapshot while
//! writing a fresh output buffer, so already-processed neighbors never
//! feed back into the kernel.

use ndarray::{Array3, ArrayView3};

/// Apply a 4-neighbor sharpening kernel.
///
/// Kernel (cross-shaped, per color channel):
///
/// ```text
///  0  -a   0
/// -a 1+4a -a
///  0  -a   0
/// ```
///
/// `amount` is clamped to 0.0-2.0; 0 returns an unmodified copy. The
/// 1-pixel border is copied unchanged, as is the alpha channel.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `amount` - Sharpening strength (0.0-2.0)
///
/// # Returns
/// Sharpened image of identical dimensions
pub fn sharpen(input: ArrayView3<u8>, amount: f32) -> Array3<u8> {
    let amount = amount.clamp(0.0, 2.0);
    if amount == 0.0 {
        return input.to_owned();
    }

    let (height, width, _) = input.dim();
    let mut output = input.to_owned();

    let center_weight = 1.0 + 4.0 * amount;
    let edge_weight = amount;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            for c in 0..3 {
                let center = input[[y, x, c]] as f32;
                let neighbors = input[[y - 1, x, c]] as f32
                    + input[[y + 1, x, c]] as f32
                    + input[[y, x - 1, c]] as f32
                    + input[[y, x + 1, c]] as f32;
                let sharpened = center * center_weight - edge_weight * neighbors;
                output[[y, x, c]] = sharpened.clamp(0.0, 255.0) as u8;
            }
        }
    }
    output
}

/// Apply a 3x3 box blur.
///
/// Each output color channel is the unweighted mean of the pixel and its
/// in-range neighbors; out-of-range neighbors are omitted from the
/// average, so edge and corner pixels average fewer samples. Alpha is
/// copied unchanged.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Blurred image of identical dimensions
pub fn box_blur_3x3(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let mut sum = [0u32; 3];
            let mut count = 0u32;
            for dy in -1i32..=1 {
                let sy = y as i32 + dy;
                if sy < 0 || sy >= height as i32 {
                    continue;
                }
                for dx in -1i32..=1 {
                    let sx = x as i32 + dx;
                    if sx < 0 || sx >= width as i32 {
                        continue;
                    }
                    for c in 0..3 {
                        sum[c] += input[[sy as usize, sx as usize, c]] as u32;
                    }
                    count += 1;
                }
            }
            for c in 0..3 {
                output[[y, x, c]] = (sum[c] as f32 / count as f32).round() as u8;
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }
    output
}
