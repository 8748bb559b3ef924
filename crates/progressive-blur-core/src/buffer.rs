//! Interleaved 8-bit pixel buffers.
//!
//! `PixelBuffer` is the engine's working image: row-major, interleaved
//! samples, one byte per channel, 1 to 4 channels. It converts to and from
//! `image::DynamicImage` at the public boundary so the rest of the engine
//! can stay agnostic of the concrete pixel type.

use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::error::{BlurError, Result};

/// An owned 8-bit image with an explicit channel count.
///
/// Channel layouts:
/// - 1 = luma
/// - 2 = luma + alpha
/// - 3 = RGB
/// - 4 = RGBA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Samples per pixel (1 to 4).
    pub channels: usize,
    /// Pixel data in row-major order, `width * height * channels` bytes.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`BlurError::Configuration`] for a channel count outside 1..=4
    /// and [`BlurError::InvalidBuffer`] when the data length does not match
    /// the geometry.
    pub fn new(width: u32, height: u32, channels: usize, pixels: Vec<u8>) -> Result<Self> {
        if !(1..=4).contains(&channels) {
            return Err(BlurError::Configuration(format!(
                "unsupported channel count {channels}"
            )));
        }
        let expected = width as usize * height as usize * channels;
        if pixels.len() != expected {
            return Err(BlurError::InvalidBuffer {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Create a buffer filled with zeros.
    pub fn zeroed(width: u32, height: u32, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            pixels: vec![0; width as usize * height as usize * channels],
        }
    }

    /// Copy the pixels out of a `DynamicImage`.
    ///
    /// 8-bit layouts are kept as they are. Deeper or floating point images
    /// are reduced to 8-bit RGB, or RGBA when they carry alpha.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        let (channels, pixels) = match image {
            DynamicImage::ImageLuma8(img) => (1, img.as_raw().clone()),
            DynamicImage::ImageLumaA8(img) => (2, img.as_raw().clone()),
            DynamicImage::ImageRgb8(img) => (3, img.as_raw().clone()),
            DynamicImage::ImageRgba8(img) => (4, img.as_raw().clone()),
            other if other.color().has_alpha() => (4, other.to_rgba8().into_raw()),
            other => (3, other.to_rgb8().into_raw()),
        };
        Self {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Wrap the pixels back into a `DynamicImage` of the matching layout.
    ///
    /// # Errors
    ///
    /// Returns [`BlurError::InvalidBuffer`] if the data length no longer
    /// matches the geometry.
    pub fn into_dynamic(self) -> Result<DynamicImage> {
        let expected = self.byte_size_for_geometry();
        let actual = self.pixels.len();
        let (width, height) = (self.width, self.height);
        let mismatch = || BlurError::InvalidBuffer { expected, actual };

        let image = match self.channels {
            1 => GrayImage::from_raw(width, height, self.pixels)
                .map(DynamicImage::ImageLuma8)
                .ok_or_else(mismatch)?,
            2 => GrayAlphaImage::from_raw(width, height, self.pixels)
                .map(DynamicImage::ImageLumaA8)
                .ok_or_else(mismatch)?,
            3 => RgbImage::from_raw(width, height, self.pixels)
                .map(DynamicImage::ImageRgb8)
                .ok_or_else(mismatch)?,
            4 => RgbaImage::from_raw(width, height, self.pixels)
                .map(DynamicImage::ImageRgba8)
                .ok_or_else(mismatch)?,
            n => {
                return Err(BlurError::Configuration(format!(
                    "unsupported channel count {n}"
                )))
            }
        };
        Ok(image)
    }

    /// Whether the last channel is alpha.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 2 || self.channels == 4
    }

    /// Number of colour channels, excluding alpha.
    #[inline]
    pub fn color_channels(&self) -> usize {
        if self.has_alpha() {
            self.channels - 1
        } else {
            self.channels
        }
    }

    /// Bytes per row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Samples of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let len = self.row_len();
        let start = y as usize * len;
        &self.pixels[start..start + len]
    }

    fn byte_size_for_geometry(&self) -> usize {
        self.pixel_count() * self.channels
    }
}
