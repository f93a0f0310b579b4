//! # geogrid-types
//!
//! Value types shared by the geogrid geohash codec and grid groups.
//!
//! - **Point types**: `Coordinate`
//! - **Bounding box types**: `GeohashBounds`
//! - **Direction types**: `Direction`, `GridPosition`
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use geogrid_types::bbox::GeohashBounds;
//! use geogrid_types::point::Coordinate;
//!
//! let hangzhou = Coordinate::new(30.0, 120.0);
//! let cell = GeohashBounds::new(29.9, 119.9, 30.1, 120.1);
//! assert!(cell.contains(&hangzhou));
//! ```

pub mod bbox;
pub mod direction;
pub mod point;

pub use bbox::GeohashBounds;
pub use direction::{Direction, GridPosition};
pub use point::Coordinate;
