//! Caller-defined intensity fields.
//!
//! Bypasses the directional ramp entirely: the caller supplies any pure
//! function of pixel coordinates and the result is clamped into `[0, 1]`.
//! Radial spotlights, diagonal wipes and checkerboards all fit here.

use super::{clamp_weight, IntensityField};
use crate::parallel::for_each_row;

/// Evaluate `field_fn(x, y)` for every pixel and collect the clamped results.
///
/// `field_fn` receives integer pixel coordinates. Results above 1 or below 0
/// are clamped and NaN is treated as 0 (sharp). The function may be called
/// from several threads at once, hence the `Sync` bound.
///
/// # Example
/// ```
/// use progressive_blur_core::create_custom_blur_mask;
///
/// // Diagonal wipe from the top-left corner
/// let (w, h) = (640, 480);
/// let field = create_custom_blur_mask(w, h, |x, y| (x + y) as f32 / (w + h) as f32);
/// assert_eq!(field.get(0, 0), 0.0);
/// ```
pub fn create_custom_blur_mask<F>(width: u32, height: u32, field_fn: F) -> IntensityField
where
    F: Fn(u32, u32) -> f32 + Sync,
{
    let mut values = vec![0.0f32; width as usize * height as usize];

    for_each_row(&mut values, width as usize, |y, row| {
        for (x, v) in row.iter_mut().enumerate() {
            *v = clamp_weight(field_fn(x as u32, y as u32));
        }
    });

    IntensityField::from_clamped(width, height, values)
}
