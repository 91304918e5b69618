//! Configuration errors that stop a generation pass.
//!
//! Lookup misses and exhausted candidate pools are not errors: queries return
//! `Option`, and room typing falls back to the filler profile.

use thiserror::Error;

use crate::types::{ConnectionKind, GridPos};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("grid dimensions must be positive, got {x}x{y}")]
    InvalidDimensions { x: i32, y: i32 },

    #[error("a {x}x{y} grid exceeds the limit of {max_cells} cells")]
    GridTooLarge { x: i32, y: i32, max_cells: usize },

    #[error("start row {row} is outside a grid of height {height}")]
    StartRowOutOfRange { row: u32, height: usize },

    #[error("exit row {row} is outside a grid of height {height}")]
    ExitRowOutOfRange { row: u32, height: usize },

    #[error("spawn room {pos} is outside the {width}x{height} grid")]
    SpawnRoomOutOfRange { pos: GridPos, width: usize, height: usize },

    #[error("connection {a} <-> {b} is declared both {existing} and {requested}")]
    ConflictingConnection {
        a: GridPos,
        b: GridPos,
        existing: ConnectionKind,
        requested: ConnectionKind,
    },
}
