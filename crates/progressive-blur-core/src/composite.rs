//! Blending the sharp and blurred renditions.
//!
//! The compositor walks every pixel once and interpolates each colour
//! channel between the source and the blurred copy:
//!
//! ```text
//! out = original * (1 - w) + blurred * w
//! ```
//!
//! where `w` comes from the [`IntensityField`]. The blend is done in `f32`
//! and rounded once, so `w = 0` reproduces the source byte for byte and
//! `w = 1` reproduces the blurred copy byte for byte.

use crate::buffer::PixelBuffer;
use crate::error::{BlurError, Result};
use crate::mask::IntensityField;
use crate::parallel::for_each_row;

/// Blend `original` towards `blurred` using `field` as the per-pixel weight.
///
/// # Arguments
/// * `original` - The sharp source
/// * `blurred` - A blurred rendition with the same geometry and layout
/// * `field` - Blend weights, one per pixel
/// * `preserve_alpha` - Copy the source alpha unchanged; when false and the
///   source has alpha, the output drops the alpha channel (LumaA becomes
///   Luma, RGBA becomes RGB) and is therefore fully opaque
///
/// # Errors
///
/// - [`BlurError::DimensionMismatch`] if `blurred` or `field` differ in size
///   from `original`
/// - [`BlurError::InvalidBuffer`] if a pixel buffer does not match its
///   declared geometry
/// - [`BlurError::Configuration`] if the two buffers have different channel
///   layouts
pub fn composite(
    original: &PixelBuffer,
    blurred: &PixelBuffer,
    field: &IntensityField,
    preserve_alpha: bool,
) -> Result<PixelBuffer> {
    check_dimensions(original, blurred.width, blurred.height)?;
    check_dimensions(original, field.width(), field.height())?;
    check_length(original)?;
    check_length(blurred)?;
    if original.channels != blurred.channels {
        return Err(BlurError::Configuration(format!(
            "blurred rendition has {} channels, original has {}",
            blurred.channels, original.channels
        )));
    }

    let width = original.width as usize;
    let in_channels = original.channels;
    let color_channels = original.color_channels();
    let keep_alpha = original.has_alpha() && preserve_alpha;
    let out_channels = if original.has_alpha() && !preserve_alpha {
        color_channels
    } else {
        in_channels
    };

    let mut out = PixelBuffer::zeroed(original.width, original.height, out_channels);
    let in_row_len = original.row_len();

    for_each_row(&mut out.pixels, width * out_channels, |y, row| {
        let start = y * in_row_len;
        let src = &original.pixels[start..start + in_row_len];
        let blr = &blurred.pixels[start..start + in_row_len];
        let weights = field.row(y as u32);

        for (x, &w) in weights.iter().enumerate() {
            let s = x * in_channels;
            let d = x * out_channels;
            for c in 0..color_channels {
                row[d + c] = blend(src[s + c], blr[s + c], w);
            }
            if keep_alpha {
                row[d + color_channels] = src[s + color_channels];
            }
        }
    });

    log::debug!(
        "composited {}x{} ({} -> {} channels)",
        original.width,
        original.height,
        in_channels,
        out_channels
    );
    Ok(out)
}

/// Linear interpolation of one 8-bit sample, rounded to nearest.
#[inline]
fn blend(original: u8, blurred: u8, weight: f32) -> u8 {
    let o = f32::from(original);
    let b = f32::from(blurred);
    (o * (1.0 - weight) + b * weight).round().clamp(0.0, 255.0) as u8
}

fn check_dimensions(original: &PixelBuffer, width: u32, height: u32) -> Result<()> {
    if original.width != width || original.height != height {
        return Err(BlurError::DimensionMismatch {
            expected_width: original.width,
            expected_height: original.height,
            actual_width: width,
            actual_height: height,
        });
    }
    Ok(())
}

fn check_length(buffer: &PixelBuffer) -> Result<()> {
    let expected = buffer.pixel_count() * buffer.channels;
    if buffer.pixels.len() != expected {
        return Err(BlurError::InvalidBuffer {
            expected,
            actual: buffer.pixels.len(),
        });
    }
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
