//! Blur configuration.
//!
//! A [`BlurConfig`] bundles everything one progressive blur needs: the
//! strength of the blurred rendition, the three ramp positions, the
//! direction, the kernel and the easing curve. Positions are fractions of
//! the directional coordinate and must satisfy
//! `0 <= clear_until < blur_start < end_position <= 1`.

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use crate::blur::BlurAlgorithm;
use crate::easing::EasingFunction;
use crate::error::{BlurError, Result};
use crate::mask::BlurDirection;

/// Parameters for a single progressive blur.
///
/// Fields are public so presets and callers can build configs with struct
/// update syntax; entry points call [`BlurConfig::validate`] before touching
/// any pixel.
///
/// # Example
/// ```
/// use progressive_blur_core::{BlurConfig, BlurDirection, EasingFunction};
///
/// let config = BlurConfig::default()
///     .with_max_blur(30.0)
///     .with_direction(BlurDirection::BottomToTop)
///     .with_easing(EasingFunction::EaseOut);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct BlurConfig {
    /// Strength of the fully blurred rendition (Gaussian sigma, box radius).
    #[serde(alias = "max_blur_strength")]
    pub max_blur: f32,
    /// Coordinate below which the image stays sharp (0.0 to 1.0)
    pub clear_until: f32,
    /// Coordinate where the main blur segment begins
    pub blur_start: f32,
    /// Coordinate at which full blur is reached
    #[serde(alias = "end_y")]
    pub end_position: f32,
    /// Direction the blur grows in
    pub direction: BlurDirection,
    /// Kernel used for the blurred rendition
    pub algorithm: BlurAlgorithm,
    /// Curve applied within each ramp segment
    pub easing: EasingFunction,
    /// Keep the source alpha channel untouched
    pub preserve_alpha: bool,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            max_blur: 50.0,
            clear_until: 0.15,
            blur_start: 0.25,
            end_position: 0.85,
            direction: BlurDirection::TopToBottom,
            algorithm: BlurAlgorithm::Gaussian,
            easing: EasingFunction::Linear,
            preserve_alpha: true,
        }
    }
}

impl BlurConfig {
    /// Create a validated configuration.
    ///
    /// # Arguments
    /// * `max_blur` - Blur strength of the fully blurred rendition
    /// * `clear_until` - End of the sharp zone
    /// * `blur_start` - End of the transition zone
    /// * `end_position` - Start of the fully blurred zone
    /// * `direction`, `algorithm`, `easing` - Shape of the effect
    /// * `preserve_alpha` - Copy alpha from the source instead of blending it
    ///
    /// # Errors
    ///
    /// Returns [`BlurError::Configuration`] when the positions are out of
    /// order or any value is not finite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        max_blur: f32,
        clear_until: f32,
        blur_start: f32,
        end_position: f32,
        direction: BlurDirection,
        algorithm: BlurAlgorithm,
        easing: EasingFunction,
        preserve_alpha: bool,
    ) -> Result<Self> {
        let config = Self {
            max_blur,
            clear_until,
            blur_start,
            end_position,
            direction,
            algorithm,
            easing,
            preserve_alpha,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the ramp ordering and that every number is finite.
    ///
    /// A `max_blur` of zero or below is valid and renders no blur at all.
    ///
    /// # Errors
    ///
    /// Returns [`BlurError::Configuration`] describing the first violation.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("max_blur", self.max_blur),
            ("clear_until", self.clear_until),
            ("blur_start", self.blur_start),
            ("end_position", self.end_position),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(BlurError::Configuration(format!(
                "{name} must be finite, got {value}"
            )));
        }

        if self.clear_until < 0.0 {
            return Err(BlurError::Configuration(format!(
                "clear_until must be >= 0, got {}",
                self.clear_until
            )));
        }
        if self.clear_until >= self.blur_start {
            return Err(BlurError::Configuration(format!(
                "clear_until ({}) must be less than blur_start ({})",
                self.clear_until, self.blur_start
            )));
        }
        if self.blur_start >= self.end_position {
            return Err(BlurError::Configuration(format!(
                "blur_start ({}) must be less than end_position ({})",
                self.blur_start, self.end_position
            )));
        }
        if self.end_position > 1.0 {
            return Err(BlurError::Configuration(format!(
                "end_position must be <= 1, got {}",
                self.end_position
            )));
        }
        Ok(())
    }

    /// Whether this configuration renders any blur at all.
    pub fn is_identity(&self) -> bool {
        crate::blur::strength_to_radius(self.max_blur).is_none()
    }

    /// Set `clear_until`, `blur_start` and `end_position` together.
    pub fn with_positions(mut self, clear_until: f32, blur_start: f32, end_position: f32) -> Self {
        self.clear_until = clear_until;
        self.blur_start = blur_start;
        self.end_position = end_position;
        self
    }
}
