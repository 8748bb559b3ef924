//! Progressive blur WASM bindings.
//!
//! Configuration objects come from JavaScript as plain objects and are
//! deserialized with `serde_wasm_bindgen`; missing fields take the core
//! defaults. Every core error becomes a thrown string.

use crate::types::{to_js_error, JsImage};
use progressive_blur_core::{BlurConfig, BlurError, EasingFunction, IntensityField};
use wasm_bindgen::prelude::*;

/// Apply a progressive blur.
///
/// # Arguments
/// * `image` - Source image
/// * `config` - Object with any of `max_blur`, `clear_until`, `blur_start`,
///   `end_position` (or `end_y`), `direction`, `algorithm`, `easing`,
///   `preserve_alpha`. `undefined` or `null` uses the defaults.
///
/// # Example (TypeScript)
/// ```typescript
/// const result = apply_progressive_blur(image, {
///   max_blur: 30,
///   direction: "bottom_to_top",
///   easing: "ease_out",
/// });
/// ```
#[wasm_bindgen]
pub fn apply_progressive_blur(image: &JsImage, config: JsValue) -> Result<JsImage, JsValue> {
    let config: BlurConfig = if config.is_undefined() || config.is_null() {
        BlurConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid blur config: {}", e)))?
    };
    progressive_blur(image, &config).map_err(to_js_error)
}

/// Apply a named preset such as `"dramatic"` or `"text_overlay"`.
#[wasm_bindgen]
pub fn apply_preset(image: &JsImage, name: &str) -> Result<JsImage, JsValue> {
    preset_blur(image, name).map_err(to_js_error)
}

/// Names of all available presets.
#[wasm_bindgen]
pub fn preset_names() -> js_sys::Array {
    progressive_blur_core::preset_names()
        .map(JsValue::from_str)
        .collect()
}

/// Blur through a caller-built field of `width * height` weights in `[0, 1]`.
///
/// Uses the Gaussian kernel and keeps the source alpha.
#[wasm_bindgen]
pub fn apply_mask_based_blur(
    image: &JsImage,
    field: Vec<f32>,
    max_blur: f32,
) -> Result<JsImage, JsValue> {
    mask_based_blur(image, field, max_blur).map_err(to_js_error)
}

/// Evaluate an easing curve by name, e.g. for drawing a preview graph.
#[wasm_bindgen]
pub fn ease(name: &str, progress: f32) -> Result<f32, JsValue> {
    ease_by_name(name, progress).map_err(to_js_error)
}

fn progressive_blur(image: &JsImage, config: &BlurConfig) -> Result<JsImage, BlurError> {
    let source = image.to_dynamic()?;
    let output = progressive_blur_core::apply_progressive_blur(&source, config)?;
    Ok(JsImage::from_dynamic(&output))
}

fn preset_blur(image: &JsImage, name: &str) -> Result<JsImage, BlurError> {
    let config = progressive_blur_core::lookup_preset(name)?;
    progressive_blur(image, &config)
}

fn mask_based_blur(image: &JsImage, field: Vec<f32>, max_blur: f32) -> Result<JsImage, BlurError> {
    let source = image.to_dynamic()?;
    let field = IntensityField::new(image.width(), image.height(), field)?;
    let output = progressive_blur_core::apply_mask_based_blur(&source, &field, max_blur)?;
    Ok(JsImage::from_dynamic(&output))
}

fn ease_by_name(name: &str, progress: f32) -> Result<f32, BlurError> {
    let easing: EasingFunction = name.parse()?;
    Ok(easing.ease(progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32, channels: u32) -> JsImage {
        let pixels = (0..width * height * channels).map(|i| (i % 251) as u8).collect();
        JsImage::new(width, height, channels, pixels)
    }

    #[test]
    fn test_progressive_blur_keeps_layout() {
        for channels in 1..=4 {
            let image = gradient(20, 16, channels);
            let out = progressive_blur(&image, &BlurConfig::default()).unwrap();
            assert_eq!(out.width(), 20);
            assert_eq!(out.height(), 16);
            assert_eq!(out.channels(), channels);
        }
    }

    #[test]
    fn test_progressive_blur_top_rows_untouched() {
        let image = gradient(10, 100, 3);
        let out = progressive_blur(&image, &BlurConfig::default()).unwrap();
        // Rows 0..15 sit inside the sharp zone
        assert_eq!(&out.pixels()[..10 * 3 * 15], &image.pixels()[..10 * 3 * 15]);
    }

    #[test]
    fn test_progressive_blur_bad_buffer() {
        let image = JsImage::new(4, 4, 3, vec![0; 5]);
        assert!(matches!(
            progressive_blur(&image, &BlurConfig::default()),
            Err(BlurError::InvalidBuffer { .. })
        ));
    }

    #[test]
    fn test_preset_blur() {
        let image = gradient(12, 12, 4);
        assert!(preset_blur(&image, "vignette").is_ok());
        assert_eq!(
            preset_blur(&image, "missing").unwrap_err(),
            BlurError::UnknownPreset("missing".into())
        );
    }

    #[test]
    fn test_mask_based_blur_field_length() {
        let image = gradient(4, 4, 3);
        assert_eq!(
            mask_based_blur(&image, vec![0.5; 15], 3.0).unwrap_err(),
            BlurError::InvalidBuffer {
                expected: 16,
                actual: 15
            }
        );
        let out = mask_based_blur(&image, vec![0.0; 16], 3.0).unwrap();
        assert_eq!(out.pixels(), image.pixels());
    }

    #[test]
    fn test_ease_by_name() {
        assert_eq!(ease_by_name("linear", 0.25).unwrap(), 0.25);
        assert_eq!(ease_by_name("ease_in", 0.5).unwrap(), 0.25);
        assert!(matches!(
            ease_by_name("bounce", 0.5),
            Err(BlurError::Configuration(_))
        ));
    }
}

/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_progressive_blur_defaults() {
        let image = JsImage::new(16, 16, 4, vec![200u8; 16 * 16 * 4]);
        let out = apply_progressive_blur(&image, JsValue::UNDEFINED).unwrap();
        assert_eq!(out.pixels(), image.pixels());
    }

    #[wasm_bindgen_test]
    fn test_apply_progressive_blur_rejects_ordering() {
        let image = JsImage::new(8, 8, 3, vec![0u8; 8 * 8 * 3]);
        let config = serde_wasm_bindgen::to_value(
            &BlurConfig::default().with_positions(0.5, 0.3, 0.9),
        )
        .unwrap();
        assert!(apply_progressive_blur(&image, config).is_err());
    }

    #[wasm_bindgen_test]
    fn test_preset_names() {
        assert_eq!(preset_names().length(), 7);
    }

    #[wasm_bindgen_test]
    fn test_apply_preset_unknown() {
        let image = JsImage::new(8, 8, 3, vec![0u8; 8 * 8 * 3]);
        assert!(apply_preset(&image, "nope").is_err());
    }
}
