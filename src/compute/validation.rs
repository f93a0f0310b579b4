//! Validation for geographic coordinates, precisions and geohash strings.

use crate::error::{GeogridError, Result};
use crate::geohash::{MAX_PRECISION, base32};
use geogrid_types::point::Coordinate;

/// Validates a latitude/longitude pair.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use geogrid::compute::validation::validate_coordinate;
///
/// assert!(validate_coordinate(40.7128, -74.0060).is_ok());
///
/// // Invalid latitude
/// assert!(validate_coordinate(95.0, -74.0).is_err());
///
/// // Invalid longitude
/// assert!(validate_coordinate(40.0, 200.0).is_err());
/// ```
pub fn validate_coordinate(lat: f64, lng: f64) -> Result<()> {
    if !lat.is_finite() {
        return Err(GeogridError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lng.is_finite() {
        return Err(GeogridError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeogridError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(GeogridError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lng
        )));
    }

    Ok(())
}

/// Validates a [`Coordinate`] value.
pub fn validate_geographic_point(coordinate: &Coordinate) -> Result<()> {
    validate_coordinate(coordinate.lat(), coordinate.lng())
}

/// Validates a geohash precision (number of characters).
///
/// ```
/// use geogrid::compute::validation::validate_precision;
///
/// assert!(validate_precision(7).is_ok());
/// assert!(validate_precision(0).is_err());
/// assert!(validate_precision(13).is_err());
/// ```
pub fn validate_precision(precision: usize) -> Result<()> {
    if precision == 0 || precision > MAX_PRECISION {
        return Err(GeogridError::InvalidInput(format!(
            "Geohash precision must be between 1 and {}, got: {}",
            MAX_PRECISION, precision
        )));
    }
    Ok(())
}

/// Validates that a string is a usable geohash.
///
/// The hash must be non-empty, at most [`MAX_PRECISION`] characters long,
/// and drawn from the lowercase base32 geohash alphabet.
pub fn validate_geohash(hash: &str) -> Result<()> {
    if hash.is_empty() {
        return Err(GeogridError::MalformedHash(
            "Geohash cannot be empty".into(),
        ));
    }

    if hash.len() > MAX_PRECISION {
        return Err(GeogridError::MalformedHash(format!(
            "Geohash '{}' exceeds {} characters",
            hash, MAX_PRECISION
        )));
    }

    if let Some((idx, ch)) = hash
        .char_indices()
        .find(|(_, ch)| base32::decode_char(*ch).is_none())
    {
        return Err(GeogridError::MalformedHash(format!(
            "Invalid character '{}' at index {} in geohash '{}'",
            ch, idx, hash
        )));
    }

    Ok(())
}
