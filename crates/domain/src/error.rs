//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`LedStripError`] via `#[from]`.

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum LedStripError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("color error")]
    Color(#[from] ColorError),

    #[error("strip error")]
    Strip(#[from] StripError),

    /// The hardware (or simulated) driver failed to push a frame.
    #[error("driver error")]
    Driver(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations on strips and animation parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("strip must contain at least one LED")]
    EmptyStrip,
    #[error("color list must not be empty")]
    EmptyColorList,
    #[error("step count must be greater than zero")]
    ZeroSteps,
    #[error("group size must be greater than zero")]
    ZeroGroupSize,
    #[error("delay must be greater than zero")]
    ZeroDelay,
    #[error("duration must be positive and finite")]
    InvalidDuration,
    #[error("cannot sparkle {count} LEDs on a strip of {num_leds}")]
    SparkleCountExceedsStrip { count: usize, num_leds: usize },
    #[error("a gradient needs at least two LEDs")]
    GradientTooShort,
}

/// Color parsing and arithmetic failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}, expected #rrggbb")]
    InvalidHex(String),
    #[error("unknown color name {0:?}")]
    UnknownName(String),
    #[error("dim factor {0} must be between 0 and 1")]
    DimFactorOutOfRange(f64),
}

/// Frame buffer access failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StripError {
    #[error("LED index {index} out of range for a strip of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("frame of {actual} LEDs does not match a strip of {expected}")]
    FrameLength { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error() {
        let err: LedStripError = ValidationError::EmptyStrip.into();
        assert!(matches!(
            err,
            LedStripError::Validation(ValidationError::EmptyStrip)
        ));
    }

    #[test]
    fn should_convert_color_error() {
        let err: LedStripError = ColorError::InvalidHex("nope".to_string()).into();
        assert!(matches!(err, LedStripError::Color(_)));
    }

    #[test]
    fn should_display_index_out_of_range() {
        let err = StripError::IndexOutOfRange { index: 10, len: 3 };
        assert_eq!(
            err.to_string(),
            "LED index 10 out of range for a strip of 3"
        );
    }

    #[test]
    fn should_keep_driver_source() {
        let io = std::io::Error::other("bus fault");
        let err = LedStripError::Driver(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "bus fault");
    }
}
