//! Error types for geohash encoding and grid maintenance.

use thiserror::Error;

/// Errors reported by the codec, validation and group configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeogridError {
    /// A coordinate outside the geographic domain, a non-finite value, or an
    /// unsupported precision.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A geohash that is empty, too long, or contains characters outside the
    /// base32 alphabet.
    #[error("Malformed geohash: {0}")]
    MalformedHash(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GeogridError>;
