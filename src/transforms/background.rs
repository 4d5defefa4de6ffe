//! Background-color removal with alpha feathering.
//!
//! Estimates the background color from twelve border samples, cuts it
//! out by Euclidean RGB distance into the alpha channel, and optionally
//! softens the hard cutout edge with a separable box blur over the
//! alpha plane. Color channels are never touched.
//!
//! Zero-size buffers are an interface violation and must be rejected by
//! the caller; every non-empty buffer succeeds.

use ndarray::{Array2, Array3, ArrayView3};

use crate::params::CutoutParams;

/// Border sample inset in pixels.
const SAMPLE_INSET: usize = 5;

/// Estimate the background color from twelve border samples.
///
/// The samples are the four corners plus, for each corner, the two
/// points inset 5 px along each adjoining edge. Coordinates are clamped
/// into bounds, so small images sample duplicates rather than reading
/// out of range.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Component-wise mean of the samples as `[r, g, b]`
pub fn estimate_background(input: ArrayView3<u8>) -> [f64; 3] {
    let (height, width, _) = input.dim();
    let xr = width - 1;
    let yb = height - 1;
    let xi = SAMPLE_INSET.min(xr);
    let yi = SAMPLE_INSET.min(yb);
    let xo = xr.saturating_sub(SAMPLE_INSET);
    let yo = yb.saturating_sub(SAMPLE_INSET);

    let points = [
        (0, 0), (xi, 0), (0, yi),
        (xr, 0), (xo, 0), (xr, yi),
        (0, yb), (xi, yb), (0, yo),
        (xr, yb), (xo, yb), (xr, yo),
    ];

    let mut sum = [0.0f64; 3];
    for (x, y) in points {
        for c in 0..3 {
            sum[c] += input[[y, x, c]] as f64;
        }
    }
    [
        sum[0] / points.len() as f64,
        sum[1] / points.len() as f64,
        sum[2] / points.len() as f64,
    ]
}

/// Cut out the estimated background into the alpha channel.
///
/// Per pixel, the Euclidean RGB distance to the estimated background is
/// compared against `tolerance × 2.55`: alpha becomes 0 at or below the
/// tolerance and 255 above it. With a feather radius above 0 the binary
/// alpha plane is then blurred by [`feather_alpha`]; a radius that
/// rounds to 0 leaves the cutout binary.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `params` - Tolerance and feather values; clamped before use
///
/// # Returns
/// Image with identical color channels and the cutout alpha
pub fn knockout_background(input: ArrayView3<u8>, params: &CutoutParams) -> Array3<u8> {
    let params = params.clamped();
    let (height, width, _) = input.dim();
    let bg = estimate_background(input);
    let tol = params.tolerance_distance();

    let mut output = input.to_owned();
    for y in 0..height {
        for x in 0..width {
            let dr = input[[y, x, 0]] as f64 - bg[0];
            let dg = input[[y, x, 1]] as f64 - bg[1];
            let db = input[[y, x, 2]] as f64 - bg[2];
            let d = (dr * dr + dg * dg + db * db).sqrt();
            output[[y, x, 3]] = if d <= tol { 0 } else { 255 };
        }
    }

    let radius = params.feather_radius();
    if radius > 0 {
        let mut alpha = Array2::<u8>::zeros((height, width));
        for y in 0..height {
            for x in 0..width {
                alpha[[y, x]] = output[[y, x, 3]];
            }
        }
        let feathered = feather_alpha(&alpha, radius);
        for y in 0..height {
            for x in 0..width {
                output[[y, x, 3]] = feathered[[y, x]];
            }
        }
    }
    output
}

/// Separable box blur over an alpha plane.
///
/// A horizontal moving-average pass into an intermediate plane, then a
/// vertical pass over that intermediate. Each output position `j`
/// averages the forward window `[j, j+radius]`, which shrinks as it
/// runs off the far edge; near the leading edge the window is always
/// full. Accumulation is in f64 with round-half-up, so the edge values
/// are reproduced exactly.
///
/// # Arguments
/// * `alpha` - Single-channel plane (height, width)
/// * `radius` - Window extent; 0 returns a copy
///
/// # Returns
/// Blurred plane of identical dimensions
pub fn feather_alpha(alpha: &Array2<u8>, radius: usize) -> Array2<u8> {
    if radius == 0 {
        return alpha.clone();
    }
    let (height, width) = alpha.dim();

    // Horizontal pass
    let mut temp = Array2::<u8>::zeros((height, width));
    for y in 0..height {
        let mut sum = 0.0f64;
        let mut count = 0.0f64;
        for x in 0..width + radius {
            if x < width {
                sum += alpha[[y, x]] as f64;
                count += 1.0;
            }
            if x >= radius {
                let j = x - radius;
                temp[[y, j]] = (sum / count).round() as u8;
                sum -= alpha[[y, j]] as f64;
                count -= 1.0;
            }
        }
    }

    // Vertical pass
    let mut output = Array2::<u8>::zeros((height, width));
    for x in 0..width {
        let mut sum = 0.0f64;
        let mut count = 0.0f64;
        for y in 0..height + radius {
            if y < height {
                sum += temp[[y, x]] as f64;
                count += 1.0;
            }
            if y >= radius {
                let j = y - radius;
                output[[j, x]] = (sum / count).round() as u8;
                sum -= temp[[j, x]] as f64;
                count -= 1.0;
            }
        }
    }
    output
}
