// Sliding-window box convolutions on interleaved f32 planes.
//
// The Gaussian path follows the "fastest Gaussian blur" construction from
// <http://blog.ivank.net/fastest-gaussian-blur.html>: three box passes whose
// combined variance matches sigma², so the cost per pixel does not depend on
// the radius.

use std::mem;

use crate::parallel::for_each_row;

/// Number of box passes used to approximate a Gaussian.
const GAUSS_PASSES: usize = 3;

/// Widest box the Gaussian approximation will ask for.
///
/// Far beyond any real image; boxes wider than the line already average to
/// the mean of its two edge pixels.
const MAX_BOX_WIDTH: f64 = i32::MAX as f64;

/// Box radii whose successive application approximates a Gaussian of `sigma`.
pub(crate) fn gaussian_box_radii(sigma: f32) -> [usize; GAUSS_PASSES] {
    if sigma <= 0.0 || !sigma.is_finite() {
        return [0; GAUSS_PASSES];
    }

    let sigma = f64::from(sigma);
    let n = GAUSS_PASSES as f64;
    let w_ideal = (12.0 * sigma * sigma / n + 1.0).sqrt().min(MAX_BOX_WIDTH);
    let mut wl = w_ideal.floor() as i64;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wu = wl + 2;

    let wl_f = wl as f64;
    let m_ideal = (12.0 * sigma * sigma - n * wl_f * wl_f - 4.0 * n * wl_f - 3.0 * n)
        / (-4.0 * wl_f - 4.0);
    let m = m_ideal.round().clamp(0.0, n) as usize;

    let mut radii = [0; GAUSS_PASSES];
    for (i, radius) in radii.iter_mut().enumerate() {
        let size = if i < m { wl } else { wu };
        *radius = ((size.max(1) - 1) / 2) as usize;
    }
    radii
}

/// Average every sample of one row with its `radius` neighbours on each side.
///
/// Samples beyond either end repeat the edge pixel, so a radius wider than
/// the row only adds more copies of the edges. Those copies are counted in
/// one step, which keeps the cost linear in `len` for any radius. The
/// running sum is kept in f64.
fn box_line(src: &[f32], dst: &mut [f32], len: usize, channels: usize, radius: usize) {
    let last = len - 1;
    let inv = 1.0 / (2.0 * radius as f64 + 1.0);
    let inner = radius.min(last);
    let overhang = (radius - inner) as f64;

    for c in 0..channels {
        let at = |i: usize| f64::from(src[i.min(last) * channels + c]);

        let mut sum = (radius as f64 + 1.0) * at(0) + overhang * at(last);
        for j in 1..=inner {
            sum += at(j);
        }

        for i in 0..len {
            dst[i * channels + c] = (sum * inv) as f32;
            let add = at(i.saturating_add(radius).saturating_add(1));
            let sub = at(i.saturating_sub(radius));
            sum += add - sub;
        }
    }
}

/// One box pass along every row of a `width`-pixel-wide plane.
fn box_rows(src: &[f32], dst: &mut [f32], width: usize, channels: usize, radius: usize) {
    let row_len = width * channels;
    for_each_row(dst, row_len, |y, row| {
        let start = y * row_len;
        box_line(&src[start..start + row_len], row, width, channels, radius);
    });
}

/// Swap rows and columns of an interleaved plane.
pub(crate) fn transpose(src: &[f32], width: usize, height: usize, channels: usize) -> Vec<f32> {
    let mut dst = vec![0.0f32; src.len()];
    // Row `x` of the output is column `x` of the input.
    for_each_row(&mut dst, height * channels, |x, row| {
        for y in 0..height {
            let from = (y * width + x) * channels;
            let to = y * channels;
            row[to..to + channels].copy_from_slice(&src[from..from + channels]);
        }
    });
    dst
}

/// Run the given box radii along rows, in place.
fn box_passes(
    plane: &mut Vec<f32>,
    scratch: &mut Vec<f32>,
    width: usize,
    channels: usize,
    radii: &[usize],
) {
    for &radius in radii.iter().filter(|&&r| r > 0) {
        box_rows(plane, scratch, width, channels, radius);
        mem::swap(plane, scratch);
    }
}

/// Apply box passes horizontally and then vertically.
///
/// Horizontal and vertical passes act on different axes, so all horizontal
/// passes run first, the plane is transposed once, and the vertical passes
/// run as row passes too.
pub(crate) fn separable(
    plane: &mut Vec<f32>,
    width: usize,
    height: usize,
    channels: usize,
    horizontal: &[usize],
    vertical: &[usize],
) {
    if plane.is_empty() {
        return;
    }
    let mut scratch = vec![0.0f32; plane.len()];

    box_passes(plane, &mut scratch, width, channels, horizontal);

    if vertical.iter().any(|&r| r > 0) {
        let mut columns = transpose(plane, width, height, channels);
        box_passes(&mut columns, &mut scratch, height, channels, vertical);
        *plane = transpose(&columns, height, width, channels);
    }
}
