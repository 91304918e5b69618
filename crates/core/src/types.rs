use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct ConnectionId;
}

/// Integer grid coordinate. `x` grows east, `y` grows north.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step towards `direction`, or `None` past the `i32` range.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self { x: self.x.checked_add(dx)?, y: self.y.checked_add(dy)? })
    }

    /// True when `other` shares exactly one side with `self`.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

/// What a connection lets through. Sealed is the fallback for any side without designer data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    #[serde(alias = "none", alias = "SEALED", alias = "NONE")]
    Sealed,
    #[serde(alias = "LOCKED")]
    Locked,
    #[serde(alias = "OPEN")]
    Open,
}

impl ConnectionKind {
    pub fn is_passable(self) -> bool {
        self == Self::Open
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            Self::Sealed => 0,
            Self::Locked => 1,
            Self::Open => 2,
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sealed => "sealed",
            Self::Locked => "locked",
            Self::Open => "open",
        })
    }
}

/// Point on the world ground plane. Grid rows map onto the `z` axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub z: f32,
}

impl WorldPos {
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomScale {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for RoomScale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0, z: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DebugColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DebugColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_cancel_offsets() {
        for direction in Direction::ALL {
            let origin = GridPos::new(3, 3);
            let there = origin.step(direction).expect("in range");
            assert_eq!(there.step(direction.opposite()), Some(origin));
        }
    }

    #[test]
    fn north_is_the_next_row() {
        assert_eq!(GridPos::new(1, 1).step(Direction::North), Some(GridPos::new(1, 2)));
        assert_eq!(GridPos::new(1, 1).step(Direction::West), Some(GridPos::new(0, 1)));
    }

    #[test]
    fn stepping_past_the_coordinate_range_is_none() {
        assert_eq!(GridPos::new(i32::MAX, 0).step(Direction::East), None);
        assert_eq!(GridPos::new(0, i32::MIN).step(Direction::South), None);
        let inside = GridPos::new(i32::MAX, 0).step(Direction::West);
        assert_eq!(inside, Some(GridPos::new(i32::MAX - 1, 0)));
    }

    #[test]
    fn diagonal_cells_are_not_adjacent() {
        let pos = GridPos::new(0, 0);
        assert!(pos.is_adjacent(GridPos::new(1, 0)));
        assert!(pos.is_adjacent(GridPos::new(0, 1)));
        assert!(!pos.is_adjacent(GridPos::new(1, 1)));
        assert!(!pos.is_adjacent(pos));
    }

    #[test]
    fn connection_kind_accepts_legacy_names() {
        let kind: ConnectionKind = serde_json::from_str("\"NONE\"").expect("legacy name");
        assert_eq!(kind, ConnectionKind::Sealed);
        let kind: ConnectionKind = serde_json::from_str("\"open\"").expect("lowercase name");
        assert_eq!(kind, ConnectionKind::Open);
    }
}
