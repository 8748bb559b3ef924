//! Blur intensity fields.
//!
//! An [`IntensityField`] holds one weight per pixel: 0.0 keeps the pixel
//! sharp, 1.0 takes it entirely from the blurred rendition. Fields are built
//! either from a directional ramp ([`generate_mask`]) or from an arbitrary
//! caller function ([`create_custom_blur_mask`]), and both feed the same
//! compositor.
//!
//! ## Mask Types
//!
//! - **Directional**: a three-segment ramp along a gradient direction,
//!   shaped by an easing curve
//! - **Custom**: any `(x, y) -> weight` function, clamped to `[0, 1]`
//!
//! Values are stored as `f32` rather than quantized bytes so the ramp has no
//! banding.

pub mod custom;
pub mod directional;

pub use custom::create_custom_blur_mask;
pub use directional::{generate_mask, ramp, BlurDirection, TRANSITION_WEIGHT};

use image::GrayImage;

use crate::error::{BlurError, Result};

/// Dense per-pixel blend weights in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl IntensityField {
    /// Build a field from row-major values.
    ///
    /// Values are clamped into `[0, 1]`; NaN becomes 0.
    ///
    /// # Errors
    ///
    /// Returns [`BlurError::InvalidBuffer`] when `values.len()` is not
    /// `width * height`.
    pub fn new(width: u32, height: u32, mut values: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(BlurError::InvalidBuffer {
                expected,
                actual: values.len(),
            });
        }
        for v in values.iter_mut() {
            *v = clamp_weight(*v);
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// A field with the same weight everywhere.
    pub fn uniform(width: u32, height: u32, value: f32) -> Self {
        Self {
            width,
            height,
            values: vec![clamp_weight(value); width as usize * height as usize],
        }
    }

    /// Wrap values that are already known to lie in `[0, 1]`.
    pub(crate) fn from_clamped(width: u32, height: u32, values: Vec<f32>) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);
        Self {
            width,
            height,
            values,
        }
    }

    /// Field width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Field height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Weight at pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the field.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.values[y as usize * self.width as usize + x as usize]
    }

    /// Weights of row `y`.
    pub fn row(&self, y: u32) -> &[f32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.values[start..start + w]
    }

    /// All weights in row-major order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Quantize to an 8-bit grayscale mask (0 = sharp, 255 = fully blurred).
    ///
    /// Useful for previewing a field or handing it to tools that expect a
    /// luminance mask.
    pub fn to_luma8(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            let v = self.get(x, y);
            image::Luma([(v * 255.0).round().clamp(0.0, 255.0) as u8])
        })
    }

    /// Build a field from a painted 8-bit grayscale mask.
    pub fn from_luma8(mask: &GrayImage) -> Self {
        let values = mask.as_raw().iter().map(|&v| f32::from(v) / 255.0).collect();
        Self::from_clamped(mask.width(), mask.height(), values)
    }
}

/// Clamp a raw weight into `[0, 1]`, mapping NaN to 0.
#[inline]
pub(crate) fn clamp_weight(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_values() {
        let field = IntensityField::new(2, 2, vec![-1.0, 0.5, 2.0, f32::NAN]).unwrap();
        assert_eq!(field.values(), &[0.0, 0.5, 1.0, 0.0]);
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = IntensityField::new(3, 3, vec![0.0; 8]).unwrap_err();
        assert_eq!(
            err,
            BlurError::InvalidBuffer {
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn test_uniform_and_get() {
        let field = IntensityField::uniform(4, 3, 0.25);
        assert_eq!(field.dimensions(), (4, 3));
        assert!((field.get(3, 2) - 0.25).abs() < f32::EPSILON);
        assert_eq!(field.row(1).len(), 4);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        let field = IntensityField::uniform(2, 2, 0.0);
        field.get(2, 0);
    }

    #[test]
    fn test_luma_round_trip() {
        let field = IntensityField::new(3, 1, vec![0.0, 0.5, 1.0]).unwrap();
        let luma = field.to_luma8();
        assert_eq!(luma.as_raw(), &vec![0u8, 128, 255]);

        let back = IntensityField::from_luma8(&luma);
        assert_eq!(back.get(0, 0), 0.0);
        assert_eq!(back.get(2, 0), 1.0);
        assert!((back.get(1, 0) - 0.5).abs() < 0.01);
    }
}
