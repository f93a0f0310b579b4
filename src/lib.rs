//! Geohash encoding, cell adjacency, and 3x3 proximity grids that follow a
//! moving point.
//!
//! ```rust
//! use geogrid::{Direction, GeohashGroup, geohash};
//!
//! let hash = geohash::encode(30.0, 120.0, 7)?;
//! let bounds = geohash::decode(&hash)?;
//! assert!(bounds.min_lat() <= 30.0 && 30.0 <= bounds.max_lat());
//!
//! let north = geohash::adjacent(&hash, Direction::Top)?;
//! assert_eq!(geohash::adjacent(&north, Direction::Bottom)?, hash);
//!
//! let mut group = GeohashGroup::new();
//! group.update_location(30.0, 120.0)?;
//! assert!(group.has_geohash(&north));
//! # Ok::<(), geogrid::GeogridError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod geohash;
pub mod group;

pub use builder::GroupBuilder;
pub use config::GroupConfig;
pub use error::{GeogridError, Result};

pub use crate::geohash::{
    DEFAULT_PRECISION, MAX_PRECISION, Neighbors, adjacent, decode, decode_center, encode,
    encode_max, neighbor, neighbors,
};

pub use group::{GeohashGroup, GeohashGroupListener, ListenerId};

#[cfg(feature = "sync")]
pub use group::sync::SyncGeohashGroup;

pub use geogrid_types::{Coordinate, Direction, GeohashBounds, GridPosition};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeogridError, GeohashGroup, GroupBuilder, GroupConfig, Result};

    pub use crate::geohash::{adjacent, decode, encode, neighbors};

    pub use crate::{Coordinate, Direction, GeohashBounds, GridPosition};

    pub use geo::{Point, Rect};

    #[cfg(feature = "sync")]
    pub use crate::SyncGeohashGroup;
}
