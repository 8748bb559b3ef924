//! Public entry points.
//!
//! Every entry point runs the same three stages:
//!
//! 1. Build an [`IntensityField`] (directional ramp, preset, or caller field)
//! 2. Blur the whole image once at the maximum strength
//! 3. Composite sharp and blurred copies through the field
//!
//! Inputs are validated before stage 1, so an invalid call fails without
//! touching any pixel.

use image::DynamicImage;

use crate::blur::{blur, BlurAlgorithm};
use crate::buffer::PixelBuffer;
use crate::composite::composite;
use crate::config::BlurConfig;
use crate::error::{BlurError, Result};
use crate::mask::{generate_mask, IntensityField};
use crate::preset;

/// Apply a progressive blur described by `config`.
///
/// The output keeps the dimensions of `image`. 8-bit layouts are kept;
/// deeper images come back as 8-bit RGB or RGBA. With `preserve_alpha`
/// false, an alpha channel is dropped.
///
/// # Errors
///
/// Returns [`BlurError::Configuration`] if `config` fails
/// [`BlurConfig::validate`].
///
/// # Example
/// ```
/// use image::{DynamicImage, RgbImage};
/// use progressive_blur_core::{apply_progressive_blur, BlurConfig};
///
/// let image = DynamicImage::ImageRgb8(RgbImage::new(320, 240));
/// let blurred = apply_progressive_blur(&image, &BlurConfig::default()).unwrap();
/// assert_eq!(blurred.width(), 320);
/// ```
pub fn apply_progressive_blur(image: &DynamicImage, config: &BlurConfig) -> Result<DynamicImage> {
    config.validate()?;

    let source = PixelBuffer::from_dynamic(image);
    let field = generate_mask(source.width, source.height, config);
    log::debug!(
        "built {} mask {}x{} (clear {} / start {} / end {}, {})",
        config.direction,
        source.width,
        source.height,
        config.clear_until,
        config.blur_start,
        config.end_position,
        config.easing
    );

    render(&source, &field, config.max_blur, config.algorithm, config.preserve_alpha)
}

/// Apply the preset registered under `name`.
///
/// # Errors
///
/// Returns [`BlurError::UnknownPreset`] if the name is not registered.
pub fn apply_preset(image: &DynamicImage, name: &str) -> Result<DynamicImage> {
    let config = preset::lookup(name)?;
    log::debug!("applying preset '{name}'");
    apply_progressive_blur(image, &config)
}

/// Blur `image` through a caller-supplied field with a Gaussian kernel,
/// keeping the source alpha.
///
/// # Errors
///
/// See [`apply_mask_based_blur_with`].
pub fn apply_mask_based_blur(
    image: &DynamicImage,
    field: &IntensityField,
    max_blur: f32,
) -> Result<DynamicImage> {
    apply_mask_based_blur_with(image, field, max_blur, BlurAlgorithm::Gaussian, true)
}

/// Blur `image` through a caller-supplied field.
///
/// # Arguments
/// * `image` - Source image
/// * `field` - Blend weights, same size as `image`
/// * `max_blur` - Strength of the fully blurred rendition; `<= 0` is a no-op
/// * `algorithm` - Kernel for the blurred rendition
/// * `preserve_alpha` - Copy alpha from the source, or drop it
///
/// # Errors
///
/// - [`BlurError::DimensionMismatch`] if the field and image sizes differ
/// - [`BlurError::Configuration`] if `max_blur` is not finite
pub fn apply_mask_based_blur_with(
    image: &DynamicImage,
    field: &IntensityField,
    max_blur: f32,
    algorithm: BlurAlgorithm,
    preserve_alpha: bool,
) -> Result<DynamicImage> {
    if !max_blur.is_finite() {
        return Err(BlurError::Configuration(format!(
            "max_blur must be finite, got {max_blur}"
        )));
    }
    let (width, height) = (image.width(), image.height());
    if field.dimensions() != (width, height) {
        return Err(BlurError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            actual_width: field.width(),
            actual_height: field.height(),
        });
    }

    let source = PixelBuffer::from_dynamic(image);
    render(&source, field, max_blur, algorithm, preserve_alpha)
}

/// Blur once at `max_blur` and blend through `field`.
fn render(
    source: &PixelBuffer,
    field: &IntensityField,
    max_blur: f32,
    algorithm: BlurAlgorithm,
    preserve_alpha: bool,
) -> Result<DynamicImage> {
    let blurred = blur(source, max_blur, algorithm);
    log::debug!(
        "rendered {algorithm} blur at strength {max_blur} for {}x{}",
        source.width,
        source.height
    );

    let output = composite(source, &blurred, field, preserve_alpha)?;
    output.into_dynamic()
}
