use serde::{Deserialize, Serialize};

/// One of the four orthogonal directions on the geohash grid.
///
/// `Top` is north (increasing latitude) and `Right` is east (increasing
/// longitude).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step as `(d_lat, d_lng)`.
    pub fn offset(self) -> (f64, f64) {
        match self {
            Direction::Top => (1.0, 0.0),
            Direction::Bottom => (-1.0, 0.0),
            Direction::Left => (0.0, -1.0),
            Direction::Right => (0.0, 1.0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Top | Direction::Bottom)
    }
}

/// A slot in the 3x3 neighborhood around a center cell.
///
/// ```text
/// TopLeft    | Top    | TopRight
/// Left       | center | Right
/// BottomLeft | Bottom | BottomRight
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridPosition {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl GridPosition {
    /// All eight slots in row-major order.
    pub const ALL: [GridPosition; 8] = [
        GridPosition::TopLeft,
        GridPosition::Top,
        GridPosition::TopRight,
        GridPosition::Left,
        GridPosition::Right,
        GridPosition::BottomLeft,
        GridPosition::Bottom,
        GridPosition::BottomRight,
    ];

    /// The orthogonal moves that reach this slot from the center.
    ///
    /// Diagonals move vertically first, then horizontally.
    pub fn steps(self) -> (Direction, Option<Direction>) {
        match self {
            GridPosition::TopLeft => (Direction::Top, Some(Direction::Left)),
            GridPosition::Top => (Direction::Top, None),
            GridPosition::TopRight => (Direction::Top, Some(Direction::Right)),
            GridPosition::Left => (Direction::Left, None),
            GridPosition::Right => (Direction::Right, None),
            GridPosition::BottomLeft => (Direction::Bottom, Some(Direction::Left)),
            GridPosition::Bottom => (Direction::Bottom, None),
            GridPosition::BottomRight => (Direction::Bottom, Some(Direction::Right)),
        }
    }

    /// Index of this slot in row-major order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_diagonal(self) -> bool {
        self.steps().1.is_some()
    }
}
