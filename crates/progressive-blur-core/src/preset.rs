//! Named blur presets.
//!
//! The table is a `const` slice built at compile time, so lookups need no
//! initialisation and the registry can never change at runtime.

use crate::blur::BlurAlgorithm;
use crate::config::BlurConfig;
use crate::easing::EasingFunction;
use crate::error::{BlurError, Result};
use crate::mask::BlurDirection;

/// A named, fixed blur configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Lookup key
    pub name: &'static str,
    /// Parameters applied by this preset
    pub config: BlurConfig,
}

const fn preset(
    name: &'static str,
    max_blur: f32,
    (clear_until, blur_start, end_position): (f32, f32, f32),
    direction: BlurDirection,
    algorithm: BlurAlgorithm,
    easing: EasingFunction,
) -> Preset {
    Preset {
        name,
        config: BlurConfig {
            max_blur,
            clear_until,
            blur_start,
            end_position,
            direction,
            algorithm,
            easing,
            preserve_alpha: true,
        },
    }
}

/// Every preset, in display order.
pub const PRESETS: &[Preset] = &[
    preset(
        "subtle",
        20.0,
        (0.2, 0.35, 0.9),
        BlurDirection::TopToBottom,
        BlurAlgorithm::Gaussian,
        EasingFunction::EaseInOut,
    ),
    preset(
        "standard",
        50.0,
        (0.15, 0.25, 0.85),
        BlurDirection::TopToBottom,
        BlurAlgorithm::Gaussian,
        EasingFunction::Linear,
    ),
    preset(
        "dramatic",
        80.0,
        (0.1, 0.2, 0.7),
        BlurDirection::TopToBottom,
        BlurAlgorithm::Gaussian,
        EasingFunction::EaseIn,
    ),
    preset(
        "text_overlay",
        60.0,
        (0.0, 0.1, 0.5),
        BlurDirection::BottomToTop,
        BlurAlgorithm::Gaussian,
        EasingFunction::EaseOut,
    ),
    preset(
        "vignette",
        40.0,
        (0.3, 0.5, 1.0),
        BlurDirection::CenterToEdges,
        BlurAlgorithm::Gaussian,
        EasingFunction::Sine,
    ),
    preset(
        "focus_center",
        45.0,
        (0.0, 0.2, 0.8),
        BlurDirection::EdgesToCenter,
        BlurAlgorithm::Gaussian,
        EasingFunction::EaseInOut,
    ),
    preset(
        "motion",
        30.0,
        (0.2, 0.3, 0.9),
        BlurDirection::LeftToRight,
        BlurAlgorithm::Motion,
        EasingFunction::Linear,
    ),
];

/// All registered presets.
pub fn presets() -> &'static [Preset] {
    PRESETS
}

/// Names of all registered presets, in table order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}

/// Find the configuration registered under `name`.
///
/// Names are matched exactly (case-sensitive).
///
/// # Errors
///
/// Returns [`BlurError::UnknownPreset`] if no preset has that name.
pub fn lookup(name: &str) -> Result<BlurConfig> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.config)
        .ok_or_else(|| BlurError::UnknownPreset(name.to_string()))
}
