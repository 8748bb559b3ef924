//! WASM-compatible wrapper types for image data.
//!
//! JavaScript hands images across as raw interleaved bytes plus a channel
//! count; this module converts them to and from the core's `PixelBuffer`
//! and `DynamicImage` types.

use image::DynamicImage;
use progressive_blur_core::{BlurError, PixelBuffer};
use wasm_bindgen::prelude::*;

/// A raw 8-bit image for JavaScript.
///
/// # Channel Layouts
/// - 1 = grayscale
/// - 2 = grayscale + alpha
/// - 3 = RGB
/// - 4 = RGBA (e.g. `ImageData.data` from a canvas)
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it into a
/// JavaScript `Uint8Array`. Call `free()` to release a large image early;
/// otherwise wasm-bindgen's finalizer cleans up.
#[wasm_bindgen]
#[derive(Debug)]
pub struct JsImage {
    width: u32,
    height: u32,
    channels: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create an image from dimensions, channel count and pixel data.
    ///
    /// The buffer is checked when the image is first processed, not here.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            channels,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel (1 to 4)
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the pixel data as a Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsImage {
    /// Validate the raw buffer and wrap it as a `DynamicImage`.
    pub(crate) fn to_dynamic(&self) -> Result<DynamicImage, BlurError> {
        PixelBuffer::new(
            self.width,
            self.height,
            self.channels as usize,
            self.pixels.clone(),
        )?
        .into_dynamic()
    }

    pub(crate) fn from_dynamic(image: &DynamicImage) -> Self {
        let buffer = PixelBuffer::from_dynamic(image);
        Self {
            width: buffer.width,
            height: buffer.height,
            channels: buffer.channels as u32,
            pixels: buffer.pixels,
        }
    }
}

/// Convert a core error into a JavaScript exception value.
pub(crate) fn to_js_error(err: BlurError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_image_creation() {
        let img = JsImage::new(100, 50, 4, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.channels(), 4);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_to_dynamic_layouts() {
        let gray = JsImage::new(2, 2, 1, vec![0; 4]).to_dynamic().unwrap();
        assert!(gray.as_luma8().is_some());

        let rgba = JsImage::new(2, 2, 4, vec![0; 16]).to_dynamic().unwrap();
        assert!(rgba.as_rgba8().is_some());
    }

    #[test]
    fn test_to_dynamic_rejects_bad_length() {
        let err = JsImage::new(2, 2, 3, vec![0; 10]).to_dynamic().unwrap_err();
        assert_eq!(
            err,
            BlurError::InvalidBuffer {
                expected: 12,
                actual: 10
            }
        );
    }

    #[test]
    fn test_to_dynamic_rejects_channel_count() {
        assert!(matches!(
            JsImage::new(1, 1, 7, vec![0; 7]).to_dynamic(),
            Err(BlurError::Configuration(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8];
        let img = JsImage::new(2, 1, 3, pixels.clone());
        let back = JsImage::from_dynamic(&img.to_dynamic().unwrap());
        assert_eq!(back.channels(), 3);
        assert_eq!(back.pixels(), pixels);
    }
}
