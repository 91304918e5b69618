//! Mapping between grid coordinates and world space.

use crate::config::GridConfig;
use crate::types::{GridPos, RoomScale, WorldPos};

/// The gap between neighbouring panels is ten panel lengths on each axis.
const PANEL_SPACING_FACTOR: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldFrame {
    origin: WorldPos,
    room_scale: RoomScale,
}

/// Overall footprint of a grid in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSize {
    pub width: f32,
    pub height: f32,
}

impl WorldFrame {
    pub fn new(origin: WorldPos, room_scale: RoomScale) -> Self {
        Self { origin, room_scale }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.origin, config.room_scale)
    }

    pub fn origin(&self) -> WorldPos {
        self.origin
    }

    pub fn room_scale(&self) -> RoomScale {
        self.room_scale
    }

    pub fn panel_spacing_x(&self) -> f32 {
        self.room_scale.x * PANEL_SPACING_FACTOR
    }

    pub fn panel_spacing_z(&self) -> f32 {
        self.room_scale.z * PANEL_SPACING_FACTOR
    }

    fn cell_x(&self) -> f32 {
        self.room_scale.x + self.panel_spacing_x()
    }

    fn cell_z(&self) -> f32 {
        self.room_scale.z + self.panel_spacing_z()
    }

    pub fn world_position(&self, pos: GridPos) -> WorldPos {
        WorldPos {
            x: self.origin.x + pos.x as f32 * self.cell_x(),
            z: self.origin.z + pos.y as f32 * self.cell_z(),
        }
    }

    /// Fractional grid coordinate under `location`. A zero scale yields
    /// non-finite components, which queries reject.
    pub fn grid_coordinate(&self, location: WorldPos) -> (f32, f32) {
        ((location.x - self.origin.x) / self.cell_x(), (location.z - self.origin.z) / self.cell_z())
    }

    pub fn world_size(&self, width: usize, height: usize) -> WorldSize {
        let columns = width as f32;
        let rows = height as f32;
        WorldSize {
            width: columns * self.room_scale.x + self.panel_spacing_x() * columns,
            height: rows * self.room_scale.z + self.panel_spacing_z() * rows,
        }
    }
}
