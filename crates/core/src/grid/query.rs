//! Read-side room lookups. Every miss is a plain `None`, never an error.

use super::{Grid, Room};
use crate::types::{GridPos, WorldPos};

/// Which rooms a lookup may return.
///
/// The default accepts every room. `excluding_locked` turns occupied rooms
/// into misses; `with_profile` keeps only rooms typed with that profile name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomFilter<'a> {
    pub include_locked: bool,
    pub profile_name: Option<&'a str>,
}

impl Default for RoomFilter<'_> {
    fn default() -> Self {
        Self { include_locked: true, profile_name: None }
    }
}

impl<'a> RoomFilter<'a> {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn excluding_locked(mut self) -> Self {
        self.include_locked = false;
        self
    }

    pub fn with_profile(mut self, name: &'a str) -> Self {
        self.profile_name = Some(name);
        self
    }

    pub fn accepts(&self, room: &Room) -> bool {
        if !self.include_locked && room.is_locked() {
            return false;
        }
        self.profile_name.is_none_or(|name| room.profile_name() == name)
    }
}

/// Offsets in scan order: the row below first, west to east within a row.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

impl Grid {
    pub fn room(&self, pos: GridPos, filter: RoomFilter<'_>) -> Option<&Room> {
        if !self.contains(pos) {
            return None;
        }
        let room = &self.rooms[self.index(pos)];
        filter.accepts(room).then_some(room)
    }

    /// Fractional coordinates are rounded to the nearest cell. NaN or infinite
    /// components are misses rather than being treated as zero.
    pub fn room_at_coordinate(&self, x: f32, y: f32, filter: RoomFilter<'_>) -> Option<&Room> {
        let pos = GridPos::new(grid_axis(x)?, grid_axis(y)?);
        self.room(pos, filter)
    }

    pub fn room_at_world(&self, location: WorldPos, filter: RoomFilter<'_>) -> Option<&Room> {
        let (x, y) = self.frame.grid_coordinate(location);
        self.room_at_coordinate(x, y, filter)
    }

    /// The up to eight rooms at Chebyshev distance 1 that pass `filter`.
    pub fn neighbors(&self, pos: GridPos, filter: RoomFilter<'_>) -> Vec<&Room> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let neighbor = GridPos::new(pos.x.checked_add(dx)?, pos.y.checked_add(dy)?);
                self.room(neighbor, filter)
            })
            .collect()
    }
}

fn grid_axis(value: f32) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded < i32::MIN as f32 || rounded > i32::MAX as f32 {
        return None;
    }
    Some(rounded as i32)
}
