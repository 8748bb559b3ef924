//! Uniform blur renditions.
//!
//! The engine blurs the whole image exactly once, at the configured maximum
//! strength, and lets the compositor interpolate between the sharp and the
//! blurred copy. Varying the kernel per pixel would cost one convolution per
//! distinct strength; blending in colour space with a smooth weight field
//! looks the same and keeps the cost at a single pass.
//!
//! ## Algorithms
//!
//! - **Gaussian**: isotropic, `sigma = strength`, three box passes per axis
//! - **Box**: one box pass per axis, side `2 * strength + 1`; blockier
//! - **Motion**: one horizontal box pass of length `2 * strength + 1`
//!
//! Pixels outside the image repeat the nearest edge pixel. Every channel,
//! alpha included, is blurred; the compositor decides what happens to alpha.

mod kernels;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::BlurError;

/// Convolution used to build the blurred rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurAlgorithm {
    /// Uniform square kernel.
    Box,
    /// Gaussian kernel, approximated by repeated box passes.
    #[default]
    Gaussian,
    /// Horizontal smear.
    Motion,
}

impl BlurAlgorithm {
    /// Every algorithm variant, in declaration order.
    pub const ALL: &'static [BlurAlgorithm] =
        &[BlurAlgorithm::Box, BlurAlgorithm::Gaussian, BlurAlgorithm::Motion];

    /// The snake_case name used in configuration files and preset tables.
    pub fn as_str(self) -> &'static str {
        match self {
            BlurAlgorithm::Box => "box",
            BlurAlgorithm::Gaussian => "gaussian",
            BlurAlgorithm::Motion => "motion",
        }
    }
}

impl fmt::Display for BlurAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlurAlgorithm {
    type Err = BlurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlurAlgorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| BlurError::Configuration(format!("unknown blur algorithm '{s}'")))
    }
}

/// Integer kernel radius for a strength, or `None` when no blur applies.
///
/// Non-positive, non-finite and sub-half-pixel strengths all mean "leave the
/// image alone". Strengths beyond `usize::MAX` saturate; the kernels accept
/// any radius.
pub fn strength_to_radius(strength: f32) -> Option<usize> {
    if !strength.is_finite() || strength <= 0.0 {
        return None;
    }
    let radius = strength.round() as usize;
    (radius > 0).then_some(radius)
}

/// Produce a uniformly blurred copy of `image`.
///
/// The output has the same dimensions and channel layout as the input. A
/// strength that maps to no radius (see [`strength_to_radius`]) returns an
/// exact copy.
pub fn blur(image: &PixelBuffer, strength: f32, algorithm: BlurAlgorithm) -> PixelBuffer {
    let Some(radius) = strength_to_radius(strength) else {
        return image.clone();
    };
    if image.is_empty() {
        return image.clone();
    }

    let width = image.width as usize;
    let height = image.height as usize;
    let channels = image.channels;

    // Work in f32 for precision between passes
    let mut plane: Vec<f32> = image.pixels.iter().map(|&v| f32::from(v)).collect();

    match algorithm {
        BlurAlgorithm::Gaussian => {
            let radii = kernels::gaussian_box_radii(strength);
            log::trace!("gaussian sigma {strength} -> box radii {radii:?}");
            kernels::separable(&mut plane, width, height, channels, &radii, &radii);
        }
        BlurAlgorithm::Box => {
            kernels::separable(&mut plane, width, height, channels, &[radius], &[radius]);
        }
        BlurAlgorithm::Motion => {
            kernels::separable(&mut plane, width, height, channels, &[radius], &[]);
        }
    }

    let pixels = plane
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect();

    PixelBuffer {
        width: image.width,
        height: image.height,
        channels,
        pixels,
    }
}
