pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod grid;
pub mod placement;
pub mod profile;
pub mod registry;
pub mod session;
pub mod types;

mod rng;

pub use config::{GridConfig, GridDimensions, LevelConfig, MAX_GRID_CELLS};
pub use error::GenerationError;
pub use generator::{GridGenerator, RoomTypeSelector, generate_level};
pub use grid::{Connection, Grid, Room, RoomFilter};
pub use placement::{WorldFrame, WorldSize};
pub use profile::{ProfileId, RoomCatalog, RoomSpawnProfile};
pub use registry::{ConnectionRecord, ConnectionRegistry};
pub use session::LevelSession;
pub use types::*;
