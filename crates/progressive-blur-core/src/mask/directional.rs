//! Directional ramp masks.
//!
//! Each pixel is first reduced to a directional coordinate `t` in `[0, 1]`
//! (how far along the chosen gradient direction it sits), and `t` is then
//! pushed through a three-segment ramp:
//!
//! ```text
//! weight
//!   1.0 |                          ________
//!       |                        /
//!       |                     /
//!   0.3 |            ____/
//!       |        /
//!   0.0 |_______/
//!       +-------+----+-------------+------- t
//!              clear blur         end
//!              until start        position
//! ```
//!
//! The first segment reaches only [`TRANSITION_WEIGHT`] so the bulk of the
//! sharp-to-blurred change happens between `blur_start` and `end_position`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::IntensityField;
use crate::config::BlurConfig;
use crate::error::BlurError;
use crate::parallel::for_each_row;

/// Weight reached at the end of the transition segment (`blur_start`).
pub const TRANSITION_WEIGHT: f32 = 0.3;

/// Direction in which the blur grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurDirection {
    /// Sharp at the top, blurred at the bottom.
    #[default]
    TopToBottom,
    /// Sharp at the bottom, blurred at the top.
    BottomToTop,
    /// Sharp on the left, blurred on the right.
    LeftToRight,
    /// Sharp on the right, blurred on the left.
    RightToLeft,
    /// Sharp in the centre, blurred towards the corners.
    CenterToEdges,
    /// Sharp at the corners, blurred towards the centre.
    EdgesToCenter,
}

impl BlurDirection {
    /// Every direction variant, in declaration order.
    pub const ALL: &'static [BlurDirection] = &[
        BlurDirection::TopToBottom,
        BlurDirection::BottomToTop,
        BlurDirection::LeftToRight,
        BlurDirection::RightToLeft,
        BlurDirection::CenterToEdges,
        BlurDirection::EdgesToCenter,
    ];

    /// The snake_case name used in configuration files and preset tables.
    pub fn as_str(self) -> &'static str {
        match self {
            BlurDirection::TopToBottom => "top_to_bottom",
            BlurDirection::BottomToTop => "bottom_to_top",
            BlurDirection::LeftToRight => "left_to_right",
            BlurDirection::RightToLeft => "right_to_left",
            BlurDirection::CenterToEdges => "center_to_edges",
            BlurDirection::EdgesToCenter => "edges_to_center",
        }
    }

    /// Directional coordinate of pixel `(x, y)` in a `width` x `height` image.
    ///
    /// Linear directions use the integer pixel index, so the first row or
    /// column is exactly 0. Radial directions measure the distance from the
    /// image centre divided by the distance to the farthest corner, which
    /// keeps `t` within `[0, 1]` for any aspect ratio.
    #[inline]
    pub fn coordinate(self, x: u32, y: u32, width: u32, height: u32) -> f32 {
        match self {
            BlurDirection::TopToBottom => axis_fraction(y, height),
            BlurDirection::BottomToTop => 1.0 - axis_fraction(y, height),
            BlurDirection::LeftToRight => axis_fraction(x, width),
            BlurDirection::RightToLeft => 1.0 - axis_fraction(x, width),
            BlurDirection::CenterToEdges => radial_fraction(x, y, width, height),
            BlurDirection::EdgesToCenter => 1.0 - radial_fraction(x, y, width, height),
        }
    }

    /// Whether the coordinate depends only on the row index.
    #[inline]
    fn is_row_constant(self) -> bool {
        matches!(self, BlurDirection::TopToBottom | BlurDirection::BottomToTop)
    }
}

impl fmt::Display for BlurDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlurDirection {
    type Err = BlurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlurDirection::ALL
            .iter()
            .copied()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| BlurError::Configuration(format!("unknown blur direction '{s}'")))
    }
}

#[inline]
fn axis_fraction(pos: u32, len: u32) -> f32 {
    if len == 0 {
        return 0.0;
    }
    (pos as f32 / len as f32).clamp(0.0, 1.0)
}

#[inline]
fn radial_fraction(x: u32, y: u32, width: u32, height: u32) -> f32 {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let max_dist = cx.hypot(cy);
    if max_dist <= 0.0 {
        return 0.0;
    }
    let dist = (x as f32 - cx).hypot(y as f32 - cy);
    (dist / max_dist).clamp(0.0, 1.0)
}

/// Map a directional coordinate onto a blur weight.
///
/// The configuration is assumed valid (`clear_until < blur_start <
/// end_position`), so neither segment has a zero-width denominator.
///
/// # Algorithm
/// 1. `t < clear_until`: 0
/// 2. `t < blur_start`: `0.3 * ease(local)`
/// 3. `t <= end_position`: `0.3 + 0.7 * ease(local)`
/// 4. otherwise: 1
#[inline]
pub fn ramp(t: f32, config: &BlurConfig) -> f32 {
    let weight = if t < config.clear_until {
        0.0
    } else if t < config.blur_start {
        let local = (t - config.clear_until) / (config.blur_start - config.clear_until);
        TRANSITION_WEIGHT * config.easing.ease(local)
    } else if t <= config.end_position {
        let local = (t - config.blur_start) / (config.end_position - config.blur_start);
        TRANSITION_WEIGHT + (1.0 - TRANSITION_WEIGHT) * config.easing.ease(local)
    } else {
        1.0
    };
    weight.clamp(0.0, 1.0)
}

/// Build the intensity field for a directional configuration.
///
/// The configuration must already be validated; entry points in
/// [`crate::pipeline`] do this before calling here.
///
/// # Example
/// ```
/// use progressive_blur_core::{generate_mask, BlurConfig};
///
/// let field = generate_mask(800, 600, &BlurConfig::default());
/// assert_eq!(field.get(0, 0), 0.0);
/// assert_eq!(field.get(0, 599), 1.0);
/// ```
pub fn generate_mask(width: u32, height: u32, config: &BlurConfig) -> IntensityField {
    let mut values = vec![0.0f32; width as usize * height as usize];
    let direction = config.direction;

    for_each_row(&mut values, width as usize, |y, row| {
        let y = y as u32;
        if direction.is_row_constant() {
            let weight = ramp(direction.coordinate(0, y, width, height), config);
            row.fill(weight);
        } else {
            for (x, v) in row.iter_mut().enumerate() {
                *v = ramp(direction.coordinate(x as u32, y, width, height), config);
            }
        }
    });

    log::trace!("generated {direction} mask {width}x{height}");
    IntensityField::from_clamped(width, height, values)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::easing::EasingFunction;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=64, 1u32..=64)
    }

    /// Valid `(clear_until, blur_start, end_position)` triples.
    fn positions_strategy() -> impl Strategy<Value = (f32, f32, f32)> {
        (0.0f32..0.3, 0.05f32..0.35, 0.05f32..0.35).prop_map(|(clear, gap1, gap2)| {
            let start = clear + gap1;
            let end = (start + gap2).min(1.0);
            (clear, start, end)
        })
    }

    fn config_strategy() -> impl Strategy<Value = BlurConfig> {
        (
            positions_strategy(),
            prop::sample::select(BlurDirection::ALL.to_vec()),
            prop::sample::select(EasingFunction::ALL.to_vec()),
        )
            .prop_map(|((clear_until, blur_start, end_position), direction, easing)| {
                BlurConfig {
                    clear_until,
                    blur_start,
                    end_position,
                    direction,
                    easing,
                    ..BlurConfig::default()
                }
            })
    }

    /// Pixels in order of increasing directional coordinate.
    ///
    /// Linear directions walk one column or row. Radial directions walk the
    /// diagonal between the centre and the top-left corner.
    fn walk(direction: BlurDirection, width: u32, height: u32) -> Vec<(u32, u32)> {
        let (cx, cy) = (width / 2, height / 2);
        let steps = cx.max(cy).max(1);
        let outward: Vec<(u32, u32)> = (0..=steps)
            .map(|k| (cx - cx * k / steps, cy - cy * k / steps))
            .collect();

        match direction {
            BlurDirection::TopToBottom => (0..height).map(|y| (0, y)).collect(),
            BlurDirection::BottomToTop => (0..height).rev().map(|y| (0, y)).collect(),
            BlurDirection::LeftToRight => (0..width).map(|x| (x, 0)).collect(),
            BlurDirection::RightToLeft => (0..width).rev().map(|x| (x, 0)).collect(),
            BlurDirection::CenterToEdges => outward,
            BlurDirection::EdgesToCenter => outward.into_iter().rev().collect(),
        }
    }

    proptest! {
        /// Property: Weights never decrease along any direction's coordinate.
        #[test]
        fn prop_monotonic_every_direction(
            (width, height) in dimensions_strategy(),
            cfg in config_strategy(),
        ) {
            let field = generate_mask(width, height, &cfg);
            let mut prev = 0.0f32;
            for (x, y) in walk(cfg.direction, width, height) {
                let v = field.get(x, y);
                prop_assert!(
                    v >= prev - 1e-6,
                    "{} decreased at ({}, {}): {} < {}", cfg.direction, x, y, v, prev
                );
                prev = v;
            }
        }

        /// Property: Every weight lies in [0, 1].
        #[test]
        fn prop_values_in_unit_range(
            (width, height) in dimensions_strategy(),
            cfg in config_strategy(),
        ) {
            let field = generate_mask(width, height, &cfg);
            prop_assert_eq!(field.values().len(), (width * height) as usize);
            for &v in field.values() {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }

        /// Property: The ramp never decreases as the coordinate grows.
        #[test]
        fn prop_ramp_monotonic(cfg in config_strategy()) {
            let mut prev = 0.0;
            for i in 0..=500 {
                let v = ramp(i as f32 / 500.0, &cfg);
                prop_assert!(v >= prev - 1e-6, "ramp decreased at {}", i);
                prev = v;
            }
        }

        /// Property: Top-to-bottom weights never decrease down a column.
        #[test]
        fn prop_top_to_bottom_monotonic(
            (width, height) in dimensions_strategy(),
            cfg in config_strategy(),
        ) {
            let cfg = BlurConfig { direction: BlurDirection::TopToBottom, ..cfg };
            let field = generate_mask(width, height, &cfg);
            for y in 1..height {
                prop_assert!(field.get(0, y) >= field.get(0, y - 1));
            }
        }

        /// Property: The origin row is sharp whenever clear_until > 0.
        #[test]
        fn prop_origin_sharp(
            (width, height) in dimensions_strategy(),
            cfg in config_strategy(),
        ) {
            prop_assume!(cfg.clear_until > 0.0);
            let cfg = BlurConfig { direction: BlurDirection::TopToBottom, ..cfg };
            let field = generate_mask(width, height, &cfg);
            prop_assert_eq!(field.get(width - 1, 0), 0.0);
        }
    }
}
