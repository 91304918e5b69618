use crate::config::{GridConfig, LevelConfig};
use crate::profile::{RoomCatalog, RoomSpawnProfile};
use crate::registry::ConnectionRecord;
use crate::types::{ConnectionKind, DebugColor, GridPos};

pub mod keys {
    pub const START: &str = "start";
    pub const EXIT: &str = "exit";
    pub const EMPTY: &str = "empty";

    pub const ENEMY: &str = "enemy";
    pub const TREASURE: &str = "treasure";
    pub const SHRINE: &str = "shrine";
}

impl RoomCatalog {
    pub fn build_default() -> Self {
        Self {
            start: RoomSpawnProfile::new(keys::START, DebugColor::rgb(64, 200, 96)),
            exit: RoomSpawnProfile::new(keys::EXIT, DebugColor::rgb(220, 64, 64)),
            filler: RoomSpawnProfile::new(keys::EMPTY, DebugColor::rgb(128, 128, 128)),
            content: vec![
                // Rare early, common deep: only weighted by row.
                RoomSpawnProfile::new(keys::ENEMY, DebugColor::rgb(200, 120, 40))
                    .with_min_spawn_amount(2),
                RoomSpawnProfile::new(keys::TREASURE, DebugColor::rgb(240, 210, 60))
                    .with_min_spawn_amount(1)
                    .with_max_spawn_amount(3),
                RoomSpawnProfile::new(keys::SHRINE, DebugColor::rgb(90, 140, 230))
                    .with_max_spawn_amount(1),
            ],
        }
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::build_default()
    }
}

impl LevelConfig {
    /// A 5x5 sample level with a short open corridor from the spawn corner.
    pub fn build_default() -> Self {
        let pos = GridPos::new;
        Self::new(GridConfig::new(5, 5).with_spawn_room(pos(0, 0)), RoomCatalog::build_default())
            .with_connection(ConnectionRecord::new(pos(0, 0), pos(1, 0), ConnectionKind::Open))
            .with_connection(ConnectionRecord::new(pos(1, 0), pos(2, 0), ConnectionKind::Open))
            .with_connection(ConnectionRecord::new(pos(2, 0), pos(2, 1), ConnectionKind::Open))
            .with_connection(ConnectionRecord::new(pos(2, 1), pos(2, 2), ConnectionKind::Locked))
            .with_connection(ConnectionRecord::new(pos(2, 2), pos(3, 2), ConnectionKind::Open))
            .with_connection(ConnectionRecord::new(pos(3, 2), pos(3, 3), ConnectionKind::Open))
            .with_connection(ConnectionRecord::new(pos(3, 3), pos(3, 4), ConnectionKind::Locked))
            .with_connection(ConnectionRecord::new(pos(1, 2), pos(2, 2), ConnectionKind::Sealed))
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::build_default()
    }
}
