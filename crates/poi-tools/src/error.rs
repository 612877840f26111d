//! Error types for the core library.

use std::path::PathBuf;

/// Errors produced while reading, validating, or transforming POI and
/// coordinate data.
#[derive(Debug, thiserror::Error)]
pub enum PoiError {
    /// A flat coordinate sequence could not be grouped into pairs.
    #[error("odd number of coordinate values ({count}); expected consecutive pairs")]
    OddCoordinateCount { count: usize },

    /// An element of a pair list did not hold exactly two numbers.
    #[error("element {index} has {len} values; expected an [x, y] pair")]
    NotAPair { index: usize, len: usize },

    /// A feature's geometry carried no `coordinates` member.
    #[error("feature {feature} has a geometry without coordinates")]
    MissingCoordinates { feature: usize },

    /// A latitude/longitude pair was outside the valid range.
    #[error("invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, PoiError>;
