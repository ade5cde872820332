//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
///
/// All failures are immediate and local; there is nothing to retry or
/// recover internally. The calling UI turns these into user-facing messages.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Centroid requested for an empty point sequence
    #[error("cannot compute centroid of an empty point sequence")]
    EmptyRing,

    /// Circle rasterization with fewer than 3 segments
    #[error("circle rasterization needs at least 3 segments, got {segments}")]
    TooFewSegments {
        /// Requested segment count
        segments: usize,
    },

    /// Circle rasterization centered on a pole, where the longitude
    /// compression term divides by zero
    #[error("cannot rasterize a circle centered at latitude {latitude}: longitude scale is undefined at the poles")]
    PolarLatitude {
        /// Offending center latitude in degrees
        latitude: f64,
    },

    /// JSON parsing error at the GeoJSON boundary
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with the CareLink application's error reporting.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Empty point sequence
    EmptyRing = 10001,
    /// Segment count below the minimum of 3
    TooFewSegments = 10002,
    /// Circle centered on a pole
    PolarLatitude = 10003,
    /// JSON parsing error
    JsonParsing = 10004,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::EmptyRing => GeoErrorCode::EmptyRing,
            GeoError::TooFewSegments { .. } => GeoErrorCode::TooFewSegments,
            GeoError::PolarLatitude { .. } => GeoErrorCode::PolarLatitude,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(GeoError::EmptyRing.code(), GeoErrorCode::EmptyRing);
        assert_eq!(
            GeoError::TooFewSegments { segments: 2 }.code(),
            GeoErrorCode::TooFewSegments
        );
        assert_eq!(
            GeoError::PolarLatitude { latitude: 90.0 }.code(),
            GeoErrorCode::PolarLatitude
        );
        assert_eq!(GeoErrorCode::EmptyRing as u32, 10001);
        assert_eq!(GeoErrorCode::JsonParsing as u32, 10004);
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = GeoError::TooFewSegments { segments: 2 };
        assert!(err.to_string().contains("3 segments"));

        let err = GeoError::PolarLatitude { latitude: -90.0 };
        assert!(err.to_string().contains("-90"));
    }
}
