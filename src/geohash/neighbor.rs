//! Adjacent-cell calculation.
//!
//! A neighbor is found by decoding the cell, stepping one cell height or
//! width from its center, and re-encoding at the same precision. Longitude
//! wraps across the antimeridian; latitude clamps at the poles, so the cell
//! above a top-row cell is the cell itself (and likewise at the south pole).
//! Diagonals are two orthogonal steps, vertical first.

use super::{decode, encode};
use crate::error::Result;
use geogrid_types::direction::{Direction, GridPosition};
use serde::{Deserialize, Serialize};

/// Wrap a longitude into [-180, 180).
#[inline]
fn wrap_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

#[inline]
fn clamp_lat(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}

/// Hash of the cell next to `hash` in `direction`, at the same precision.
///
/// # Examples
///
/// ```rust
/// use geogrid::geohash::adjacent;
/// use geogrid::Direction;
///
/// let top = adjacent("wtmknpf", Direction::Top)?;
/// assert_eq!(top.len(), 7);
/// assert_eq!(adjacent(&top, Direction::Bottom)?, "wtmknpf");
/// # Ok::<(), geogrid::GeogridError>(())
/// ```
pub fn adjacent(hash: &str, direction: Direction) -> Result<String> {
    let bounds = decode(hash)?;
    let center = bounds.center();
    let (d_lat, d_lng) = direction.offset();

    let lat = clamp_lat(center.lat() + d_lat * bounds.height());
    let lng = wrap_lng(center.lng() + d_lng * bounds.width());

    encode(lat, lng, hash.len())
}

/// Hash of the cell at `position` in the 3x3 neighborhood around `hash`.
pub fn neighbor(hash: &str, position: GridPosition) -> Result<String> {
    let (first, second) = position.steps();
    let step = adjacent(hash, first)?;
    match second {
        Some(direction) => adjacent(&step, direction),
        None => Ok(step),
    }
}

/// All eight neighbors of `hash`.
pub fn neighbors(hash: &str) -> Result<Neighbors> {
    let top = adjacent(hash, Direction::Top)?;
    let bottom = adjacent(hash, Direction::Bottom)?;

    let top_left = adjacent(&top, Direction::Left)?;
    let top_right = adjacent(&top, Direction::Right)?;
    let left = adjacent(hash, Direction::Left)?;
    let right = adjacent(hash, Direction::Right)?;
    let bottom_left = adjacent(&bottom, Direction::Left)?;
    let bottom_right = adjacent(&bottom, Direction::Right)?;

    Ok(Neighbors {
        cells: [
            top_left,
            top,
            top_right,
            left,
            right,
            bottom_left,
            bottom,
            bottom_right,
        ],
    })
}

/// The eight cells surrounding a center cell, in row-major order
/// (see [`GridPosition::ALL`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    cells: [String; 8],
}

impl Neighbors {
    pub fn get(&self, position: GridPosition) -> &str {
        &self.cells[position.index()]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridPosition, &str)> {
        GridPosition::ALL
            .into_iter()
            .zip(self.cells.iter().map(String::as_str))
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.cells.iter().any(|cell| cell == hash)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.cells.into()
    }
}
