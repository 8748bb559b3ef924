//! Easing curves for shaping the sharp-to-blurred transition.
//!
//! Every curve maps a normalized progress value in `[0, 1]` onto `[0, 1]`,
//! is monotonically non-decreasing, and satisfies `ease(0) == 0` and
//! `ease(1) == 1`. Curves are pure functions with no state, so they can be
//! evaluated from any number of threads at once.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BlurError;

/// Easing curve applied inside each segment of the blur ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Constant rate: `p`.
    #[default]
    Linear,
    /// Slow start: `p²`.
    EaseIn,
    /// Slow finish: `1 - (1 - p)²`.
    EaseOut,
    /// Slow start and finish: `3p² - 2p³`.
    EaseInOut,
    /// Very slow start, sharp finish: `2^(10(p - 1))`.
    Exponential,
    /// Quarter sine wave: `sin(p·π/2)`.
    Sine,
}

impl EasingFunction {
    /// Every easing variant, in declaration order.
    pub const ALL: &'static [EasingFunction] = &[
        EasingFunction::Linear,
        EasingFunction::EaseIn,
        EasingFunction::EaseOut,
        EasingFunction::EaseInOut,
        EasingFunction::Exponential,
        EasingFunction::Sine,
    ];

    /// Evaluate the curve at `progress`.
    ///
    /// Input outside `[0, 1]` is clamped first, so the result always lies in
    /// `[0, 1]`.
    #[inline]
    pub fn ease(self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => p,
            EasingFunction::EaseIn => p * p,
            EasingFunction::EaseOut => {
                let inv = 1.0 - p;
                1.0 - inv * inv
            }
            EasingFunction::EaseInOut => smoothstep(p),
            EasingFunction::Exponential => {
                if p == 0.0 {
                    0.0
                } else {
                    2f32.powf(10.0 * (p - 1.0)).clamp(0.0, 1.0)
                }
            }
            EasingFunction::Sine => (p * FRAC_PI_2).sin().clamp(0.0, 1.0),
        }
    }

    /// The snake_case name used in configuration files and preset tables.
    pub fn as_str(self) -> &'static str {
        match self {
            EasingFunction::Linear => "linear",
            EasingFunction::EaseIn => "ease_in",
            EasingFunction::EaseOut => "ease_out",
            EasingFunction::EaseInOut => "ease_in_out",
            EasingFunction::Exponential => "exponential",
            EasingFunction::Sine => "sine",
        }
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EasingFunction {
    type Err = BlurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingFunction::ALL
            .iter()
            .copied()
            .find(|easing| easing.as_str() == s)
            .ok_or_else(|| BlurError::Configuration(format!("unknown easing function '{s}'")))
    }
}

/// Cubic Hermite smoothstep: `3t² - 2t³`.
///
/// Zero slope at both ends, so the transition starts and finishes gently.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        for easing in EasingFunction::ALL {
            assert_eq!(easing.ease(0.0), 0.0, "{easing} at 0");
            assert!(
                (easing.ease(1.0) - 1.0).abs() < 1e-6,
                "{easing} at 1 was {}",
                easing.ease(1.0)
            );
        }
    }

    #[test]
    fn test_monotonic_all_variants() {
        for easing in EasingFunction::ALL {
            let mut prev = 0.0;
            for i in 0..=1000 {
                let val = easing.ease(i as f32 / 1000.0);
                assert!(val >= prev, "{easing} decreased at step {i}");
                prev = val;
            }
        }
    }

    #[test]
    fn test_known_midpoints() {
        assert!((EasingFunction::Linear.ease(0.5) - 0.5).abs() < f32::EPSILON);
        assert!((EasingFunction::EaseIn.ease(0.5) - 0.25).abs() < f32::EPSILON);
        assert!((EasingFunction::EaseOut.ease(0.5) - 0.75).abs() < f32::EPSILON);
        assert!((EasingFunction::EaseInOut.ease(0.5) - 0.5).abs() < f32::EPSILON);
        assert!((EasingFunction::Exponential.ease(0.5) - 2f32.powi(-5)).abs() < 1e-6);
        assert!((EasingFunction::Sine.ease(0.5) - (0.5 * FRAC_PI_2).sin()).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamped() {
        for easing in EasingFunction::ALL {
            assert_eq!(easing.ease(-0.5), 0.0);
            assert!((easing.ease(1.5) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_smoothstep_symmetry() {
        // f(0.5 - x) + f(0.5 + x) = 1
        assert!((smoothstep(0.25) + smoothstep(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_str_round_trip_names() {
        for easing in EasingFunction::ALL {
            assert_eq!(easing.as_str().parse::<EasingFunction>().unwrap(), *easing);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "bounce".parse::<EasingFunction>().unwrap_err();
        assert!(matches!(err, BlurError::Configuration(_)));
        assert!(err.to_string().contains("bounce"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
