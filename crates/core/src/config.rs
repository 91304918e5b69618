//! Level configuration documents and their validation.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::profile::RoomCatalog;
use crate::registry::ConnectionRecord;
use crate::types::{GridPos, RoomScale, WorldPos};

pub const LEVEL_CONFIG_FORMAT_VERSION: u32 = 1;

/// Largest grid a single generation pass will build, in cells.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Requested grid size. Signed so that bad designer input can be reported
/// instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub dimensions: GridDimensions,
    #[serde(default)]
    pub room_scale: RoomScale,
    #[serde(default)]
    pub origin: WorldPos,
    /// Where the player enters. Independent of the randomly placed start room.
    #[serde(default)]
    pub spawn_room: GridPos,
    #[serde(default)]
    pub start_row: u32,
    /// Defaults to the last row.
    #[serde(default)]
    pub exit_row: Option<u32>,
}

impl GridConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            dimensions: GridDimensions { x: width, y: height },
            room_scale: RoomScale::default(),
            origin: WorldPos::default(),
            spawn_room: GridPos::default(),
            start_row: 0,
            exit_row: None,
        }
    }

    pub fn with_spawn_room(mut self, spawn_room: GridPos) -> Self {
        self.spawn_room = spawn_room;
        self
    }

    pub fn with_room_scale(mut self, room_scale: RoomScale) -> Self {
        self.room_scale = room_scale;
        self
    }

    pub fn with_origin(mut self, origin: WorldPos) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_rows(mut self, start_row: u32, exit_row: Option<u32>) -> Self {
        self.start_row = start_row;
        self.exit_row = exit_row;
        self
    }

    pub(crate) fn validate(&self) -> Result<GridShape, GenerationError> {
        let GridDimensions { x, y } = self.dimensions;
        if x <= 0 || y <= 0 {
            return Err(GenerationError::InvalidDimensions { x, y });
        }
        let width = x as usize;
        let height = y as usize;
        if width.checked_mul(height).is_none_or(|cells| cells > MAX_GRID_CELLS) {
            return Err(GenerationError::GridTooLarge { x, y, max_cells: MAX_GRID_CELLS });
        }

        if self.start_row as usize >= height {
            return Err(GenerationError::StartRowOutOfRange { row: self.start_row, height });
        }
        let exit_row = self.exit_row.unwrap_or(height as u32 - 1);
        if exit_row as usize >= height {
            return Err(GenerationError::ExitRowOutOfRange { row: exit_row, height });
        }

        Ok(GridShape {
            width,
            height,
            start_row: self.start_row as usize,
            exit_row: exit_row as usize,
        })
    }
}

/// Dimensions and anchor rows after validation. `width * height` never
/// exceeds [`MAX_GRID_CELLS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GridShape {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) start_row: usize,
    pub(crate) exit_row: usize,
}

impl GridShape {
    pub(crate) fn total_cells(self) -> usize {
        self.width * self.height
    }

    pub(crate) fn contains(self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }
}

/// Everything one level needs: grid shape, room types and connection table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub format_version: u32,
    pub grid: GridConfig,
    pub rooms: RoomCatalog,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

impl LevelConfig {
    pub fn new(grid: GridConfig, rooms: RoomCatalog) -> Self {
        Self { format_version: LEVEL_CONFIG_FORMAT_VERSION, grid, rooms, connections: Vec::new() }
    }

    pub fn with_connection(mut self, record: ConnectionRecord) -> Self {
        self.connections.push(record);
        self
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if config.format_version != LEVEL_CONFIG_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported level config format_version {}", config.format_version),
            ));
        }
        Ok(config)
    }
}
