//! Error types for light validation.

use thiserror::Error;

/// Main error type for light setup operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Attenuation radius must be a positive, finite value
    #[error("Attenuation radius must be positive and finite, got {0}")]
    InvalidAttenuationRadius(f32),

    /// Source radius must be non-negative and finite
    #[error("Source radius must be non-negative and finite, got {0}")]
    InvalidSourceRadius(f32),

    /// Spot cone angle out of the supported range
    #[error("Spot angle must lie in (0, \u{3c0}), got {0} rad")]
    InvalidSpotAngle(f32),

    /// Falloff cone wider than the total cone
    #[error("Spot falloff angle {falloff} rad exceeds total angle {total} rad")]
    InvalidSpotAngles { falloff: f32, total: f32 },

    /// Direction vector is not unit length
    #[error("Light direction must be normalized, got length {0}")]
    InvalidDirection(f32),

    /// Intensity must be finite and non-negative
    #[error("Intensity must be finite and non-negative, got {0}")]
    InvalidIntensity(f32),
}

/// Result type alias for light setup operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::InvalidAttenuationRadius(-1.0);
        assert!(e.to_string().contains("-1"));

        let e = Error::InvalidSpotAngles {
            falloff: 2.0,
            total: 1.0,
        };
        assert!(e.to_string().contains("2"));
        assert!(e.to_string().contains("1"));
    }
}
