use crate::point::Coordinate;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// The latitude/longitude box covered by a geohash cell.
///
/// This is a wrapper around `geo::Rect` (x = longitude, y = latitude) with
/// accessors named after the geographic axes. Containment is closed on all
/// four edges, so a coordinate on a shared edge belongs to both cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeohashBounds {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl GeohashBounds {
    /// Create bounds from minimum and maximum latitude/longitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use geogrid_types::bbox::GeohashBounds;
    ///
    /// let bounds = GeohashBounds::new(40.7, -74.0, 40.8, -73.9);
    /// assert_eq!(bounds.min_lat(), 40.7);
    /// assert_eq!(bounds.max_lng(), -73.9);
    /// ```
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_lng, y: min_lat },
                geo::coord! { x: max_lng, y: max_lat },
            ),
        }
    }

    /// Create bounds from a `geo::Rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn min_lat(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_lat(&self) -> f64 {
        self.rect.max().y
    }

    pub fn min_lng(&self) -> f64 {
        self.rect.min().x
    }

    pub fn max_lng(&self) -> f64 {
        self.rect.max().x
    }

    /// Center of the cell. This is the point a decoded hash stands for.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat() + self.max_lat()) / 2.0,
            (self.min_lng() + self.max_lng()) / 2.0,
        )
    }

    /// Latitude extent in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat() - self.min_lat()
    }

    /// Longitude extent in degrees.
    pub fn width(&self) -> f64 {
        self.max_lng() - self.min_lng()
    }

    /// Half the latitude extent: the error of the center as a latitude estimate.
    pub fn lat_error(&self) -> f64 {
        self.height() / 2.0
    }

    /// Half the longitude extent.
    pub fn lng_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a coordinate lies within the bounds (edges included).
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.lat() >= self.min_lat()
            && coordinate.lat() <= self.max_lat()
            && coordinate.lng() >= self.min_lng()
            && coordinate.lng() <= self.max_lng()
    }

    /// Check if these bounds fully contain another set of bounds.
    pub fn contains_bounds(&self, other: &GeohashBounds) -> bool {
        other.min_lat() >= self.min_lat()
            && other.max_lat() <= self.max_lat()
            && other.min_lng() >= self.min_lng()
            && other.max_lng() <= self.max_lng()
    }

    /// Returns `(min_lat, min_lng, max_lat, max_lng)`.
    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_lat(), self.min_lng(), self.max_lat(), self.max_lng())
    }
}

impl From<GeohashBounds> for Rect {
    fn from(bounds: GeohashBounds) -> Self {
        bounds.rect
    }
}
