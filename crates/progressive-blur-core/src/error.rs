//! Error types for the progressive blur engine.

use thiserror::Error;

/// Errors raised by the blur engine.
///
/// Configuration and preset errors are reported before any pixel is
/// processed, so a failed call never leaves partial work behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlurError {
    /// A blur parameter is out of range or an enum name is not recognized.
    #[error("Invalid blur configuration: {0}")]
    Configuration(String),

    /// No preset is registered under the requested name.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Two buffers that must share a pixel grid have different dimensions.
    #[error(
        "Dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        /// Width of the reference buffer.
        expected_width: u32,
        /// Height of the reference buffer.
        expected_height: u32,
        /// Width of the offending buffer.
        actual_width: u32,
        /// Height of the offending buffer.
        actual_height: u32,
    },

    /// A raw buffer length does not match its declared geometry.
    #[error("Invalid buffer length: expected {expected}, got {actual}")]
    InvalidBuffer {
        /// Length implied by width, height and channel count.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, BlurError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = BlurError::Configuration("clear_until must be below blur_start".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid blur configuration: clear_until must be below blur_start"
        );
    }

    #[test]
    fn test_unknown_preset_display() {
        let err = BlurError::UnknownPreset("cinematic".to_string());
        assert_eq!(err.to_string(), "Unknown preset: cinematic");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = BlurError::DimensionMismatch {
            expected_width: 800,
            expected_height: 600,
            actual_width: 400,
            actual_height: 300,
        };
        let msg = err.to_string();
        assert!(msg.contains("800x600"));
        assert!(msg.contains("400x300"));
    }

    #[test]
    fn test_invalid_buffer_display() {
        let err = BlurError::InvalidBuffer {
            expected: 12,
            actual: 9,
        };
        assert_eq!(err.to_string(), "Invalid buffer length: expected 12, got 9");
    }
}
