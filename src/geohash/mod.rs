//! Geohash codec: coordinate to base32 string, string to bounding box, and
//! cell adjacency.
//!
//! A geohash interleaves longitude and latitude bits, starting with longitude.
//! Each bit records which half of the current interval the coordinate falls
//! into; every five bits become one base32 symbol. Hashes that share a prefix
//! lie in the same (larger) cell, which is what makes them useful for
//! proximity bucketing.
//!
//! ```rust
//! use geogrid::geohash::{decode, encode};
//!
//! let hash = encode(57.64911, 10.40744, 11)?;
//! assert_eq!(hash, "u4pruydqqvj");
//!
//! let bounds = decode(&hash)?;
//! assert!(bounds.min_lat() <= 57.64911 && 57.64911 <= bounds.max_lat());
//! # Ok::<(), geogrid::GeogridError>(())
//! ```

pub mod base32;
pub mod neighbor;

pub use neighbor::{Neighbors, adjacent, neighbor, neighbors};

use crate::compute::validation::{validate_coordinate, validate_geohash, validate_precision};
use crate::error::{GeogridError, Result};
use geogrid_types::bbox::GeohashBounds;
use geogrid_types::point::Coordinate;

/// Longest supported geohash (about 3.7cm x 1.9cm at the equator).
pub const MAX_PRECISION: usize = 12;

/// Precision used by [`GeohashGroup`](crate::GeohashGroup) unless configured
/// otherwise (about 153m x 153m).
pub const DEFAULT_PRECISION: usize = 7;

const BITS_PER_CHAR: usize = 5;

/// A closed interval that is halved once per emitted bit.
#[derive(Debug, Clone, Copy)]
struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    const LAT: Interval = Interval {
        min: -90.0,
        max: 90.0,
    };
    const LNG: Interval = Interval {
        min: -180.0,
        max: 180.0,
    };

    /// Keep the half containing `value` and return the bit for it.
    #[inline]
    fn bisect(&mut self, value: f64) -> u8 {
        let mid = (self.min + self.max) / 2.0;
        if value >= mid {
            self.min = mid;
            1
        } else {
            self.max = mid;
            0
        }
    }

    /// Keep the half selected by `bit`.
    #[inline]
    fn narrow(&mut self, bit: u8) {
        let mid = (self.min + self.max) / 2.0;
        if bit == 1 {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }
}

/// Encode a coordinate into a geohash of exactly `precision` characters.
///
/// # Errors
///
/// Returns [`GeogridError::InvalidInput`] if the coordinate is outside
/// [-90, 90] x [-180, 180], is not finite, or if `precision` is not in
/// `1..=MAX_PRECISION`.
///
/// # Examples
///
/// ```rust
/// use geogrid::geohash::encode;
///
/// let fine = encode(30.0, 120.0, 8)?;
/// let coarse = encode(30.0, 120.0, 7)?;
/// assert_eq!(fine.len(), 8);
/// assert!(fine.starts_with(&coarse));
/// # Ok::<(), geogrid::GeogridError>(())
/// ```
pub fn encode(lat: f64, lng: f64, precision: usize) -> Result<String> {
    validate_coordinate(lat, lng)?;
    validate_precision(precision)?;

    let mut lat_interval = Interval::LAT;
    let mut lng_interval = Interval::LNG;
    let mut is_lng = true;
    let mut hash = String::with_capacity(precision);

    for _ in 0..precision {
        let mut index = 0u8;
        for _ in 0..BITS_PER_CHAR {
            let bit = if is_lng {
                lng_interval.bisect(lng)
            } else {
                lat_interval.bisect(lat)
            };
            index = (index << 1) | bit;
            is_lng = !is_lng;
        }
        hash.push(base32::encode_index(index));
    }

    Ok(hash)
}

/// Encode a [`Coordinate`] or `geo::Point` (x = longitude, y = latitude) at
/// the given precision.
///
/// ```rust
/// use geogrid::geohash::encode_coordinate;
/// use geogrid::{Coordinate, Point};
///
/// let from_point = encode_coordinate(Point::new(-74.0060, 40.7128), 7)?;
/// let from_coordinate = encode_coordinate(Coordinate::new(40.7128, -74.0060), 7)?;
/// assert_eq!(from_point, "dr5regw");
/// assert_eq!(from_point, from_coordinate);
/// # Ok::<(), geogrid::GeogridError>(())
/// ```
pub fn encode_coordinate(coordinate: impl Into<Coordinate>, precision: usize) -> Result<String> {
    let coordinate = coordinate.into();
    encode(coordinate.lat(), coordinate.lng(), precision)
}

/// Encode at [`MAX_PRECISION`]. Callers wanting a coarser cell can truncate
/// the result, since every prefix of a geohash is itself a valid geohash.
pub fn encode_max(lat: f64, lng: f64) -> Result<String> {
    encode(lat, lng, MAX_PRECISION)
}

/// Decode a geohash into the bounding box of its cell.
///
/// # Errors
///
/// Returns [`GeogridError::MalformedHash`] for an empty hash, a hash longer
/// than [`MAX_PRECISION`], or one containing characters outside the alphabet.
pub fn decode(hash: &str) -> Result<GeohashBounds> {
    validate_geohash(hash)?;

    let mut lat_interval = Interval::LAT;
    let mut lng_interval = Interval::LNG;
    let mut is_lng = true;

    for ch in hash.chars() {
        let index = base32::decode_char(ch).ok_or_else(|| {
            GeogridError::MalformedHash(format!("Invalid character '{}' in '{}'", ch, hash))
        })?;
        for shift in (0..BITS_PER_CHAR).rev() {
            let bit = (index >> shift) & 1;
            if is_lng {
                lng_interval.narrow(bit);
            } else {
                lat_interval.narrow(bit);
            }
            is_lng = !is_lng;
        }
    }

    Ok(GeohashBounds::new(
        lat_interval.min,
        lng_interval.min,
        lat_interval.max,
        lng_interval.max,
    ))
}

/// Decode a geohash into the center of its cell plus the latitude and
/// longitude error (half the cell height and width).
pub fn decode_center(hash: &str) -> Result<(Coordinate, f64, f64)> {
    let bounds = decode(hash)?;
    Ok((bounds.center(), bounds.lat_error(), bounds.lng_error()))
}
