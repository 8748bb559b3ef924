//! Progressive Blur Core - spatially varying blur engine
//!
//! This crate keeps part of an image sharp and lets the rest fade into a
//! heavily blurred copy along a configurable direction. It provides mask
//! generation, the blur kernels, compositing, and a registry of presets.
//!
//! The image is blurred once, uniformly, at the maximum strength. A per-pixel
//! [`IntensityField`] then decides how much of the blurred copy each pixel
//! receives.
//!
//! # Example
//! ```
//! use image::{DynamicImage, RgbImage};
//! use progressive_blur_core::{apply_preset, apply_progressive_blur, BlurConfig, BlurDirection};
//!
//! let image = DynamicImage::ImageRgb8(RgbImage::new(640, 480));
//!
//! let config = BlurConfig::default().with_direction(BlurDirection::BottomToTop);
//! let out = apply_progressive_blur(&image, &config).unwrap();
//!
//! let dramatic = apply_preset(&image, "dramatic").unwrap();
//! ```

pub mod blur;
pub mod buffer;
pub mod composite;
pub mod config;
pub mod easing;
pub mod error;
pub mod mask;
pub mod pipeline;
pub mod preset;

mod parallel;

pub use blur::{blur, BlurAlgorithm};
pub use buffer::PixelBuffer;
pub use composite::composite;
pub use config::BlurConfig;
pub use easing::EasingFunction;
pub use error::{BlurError, Result};
pub use mask::{create_custom_blur_mask, generate_mask, BlurDirection, IntensityField};
pub use pipeline::{
    apply_mask_based_blur, apply_mask_based_blur_with, apply_preset, apply_progressive_blur,
};
pub use preset::{lookup as lookup_preset, preset_names, presets, Preset};
