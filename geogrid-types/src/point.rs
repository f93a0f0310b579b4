use geo::Point;
use serde::{Deserialize, Serialize};

/// A geographic coordinate expressed as latitude and longitude in degrees.
///
/// Internally this is a `geo::Point` with `x` = longitude and `y` = latitude,
/// so it interoperates with the rest of the `geo` ecosystem. The constructor
/// takes latitude first, matching how geohash APIs are usually called.
///
/// # Examples
///
/// ```
/// use geogrid_types::point::Coordinate;
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// assert_eq!(nyc.lat(), 40.7128);
/// assert_eq!(nyc.lng(), -74.0060);
/// assert_eq!(nyc.to_point().x(), -74.0060);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// The underlying point (x = longitude, y = latitude)
    pub point: Point<f64>,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            point: Point::new(lng, lat),
        }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.point.x()
    }

    /// Get the underlying `geo::Point`.
    pub fn to_point(&self) -> Point<f64> {
        self.point
    }

    /// True when both components are finite and inside the geographic domain.
    pub fn is_valid(&self) -> bool {
        self.lat().is_finite()
            && self.lng().is_finite()
            && (-90.0..=90.0).contains(&self.lat())
            && (-180.0..=180.0).contains(&self.lng())
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self { point }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.point
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Interprets the tuple as `(lat, lng)`.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_mapping() {
        let c = Coordinate::new(30.0, 120.0);
        assert_eq!(c.point.x(), 120.0);
        assert_eq!(c.point.y(), 30.0);

        let from_point = Coordinate::from(Point::new(120.0, 30.0));
        assert_eq!(from_point, c);

        let from_tuple: Coordinate = (30.0, 120.0).into();
        assert_eq!(from_tuple, c);
    }

    #[test]
    fn test_validity() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.1, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_serde_roundtrip() {
        let c = Coordinate::new(35.6895, 139.6917);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
