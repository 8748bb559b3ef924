//! Progressive Blur WASM - WebAssembly bindings for the blur engine
//!
//! This crate exposes progressive-blur-core to JavaScript/TypeScript. It
//! moves raw pixel buffers and plain configuration objects across the
//! boundary; decoding and encoding stay on the JavaScript side.
//!
//! # Module Structure
//!
//! - `types` - `JsImage`, the raw image wrapper
//! - `blur` - progressive blur, presets, mask-based blur, easing preview
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImage, apply_preset } from '@progressive-blur/wasm';
//!
//! await init();
//!
//! const data = ctx.getImageData(0, 0, w, h);
//! const image = new JsImage(w, h, 4, new Uint8Array(data.data.buffer));
//! const result = apply_preset(image, "text_overlay");
//! ```

use wasm_bindgen::prelude::*;

mod blur;
mod types;

pub use blur::{apply_mask_based_blur, apply_preset, apply_progressive_blur, ease, preset_names};
pub use types::JsImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
