use std::collections::BTreeMap;

use proptest::prelude::*;
use roomgrid::{
    ConnectionKind, ConnectionRecord, ConnectionRegistry, DebugColor, Direction, GridConfig,
    GridPos, LevelConfig, RoomCatalog, RoomFilter, RoomSpawnProfile, generate_level,
};

fn kind_from(selector: u8) -> ConnectionKind {
    match selector % 3 {
        0 => ConnectionKind::Sealed,
        1 => ConnectionKind::Locked,
        _ => ConnectionKind::Open,
    }
}

fn catalog_from(content: &[(u32, i32)]) -> RoomCatalog {
    let mut catalog = RoomCatalog::new(
        RoomSpawnProfile::new("start", DebugColor::default()),
        RoomSpawnProfile::new("exit", DebugColor::default()),
        RoomSpawnProfile::new("empty", DebugColor::default()),
    );
    for (index, &(min, max)) in content.iter().enumerate() {
        catalog = catalog.with_content(
            RoomSpawnProfile::new(format!("content_{index}"), DebugColor::default())
                .with_min_spawn_amount(min)
                .with_max_spawn_amount(max),
        );
    }
    catalog
}

/// Adjacent, conflict-free records: the first kind drawn for a pair wins.
fn records_from(width: i32, height: i32, raw: &[(i32, i32, bool, u8)]) -> Vec<ConnectionRecord> {
    let mut pairs = BTreeMap::new();
    for &(x, y, east, kind) in raw {
        let a = GridPos::new(x % width, y % height);
        let direction = if east { Direction::East } else { Direction::North };
        let Some(b) = a.step(direction).filter(|b| b.x < width && b.y < height) else {
            continue;
        };
        pairs.entry((a, b)).or_insert(kind_from(kind));
    }
    pairs.into_iter().map(|((a, b), kind)| ConnectionRecord::new(a, b, kind)).collect()
}

fn raw_records(span: i32, max_len: usize) -> impl Strategy<Value = Vec<(i32, i32, bool, u8)>> {
    prop::collection::vec((0..span, 0..span, any::<bool>(), any::<u8>()), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn generated_grids_hold_every_invariant(
        seed in any::<u64>(),
        width in 1_i32..8,
        height in 1_i32..8,
        content in prop::collection::vec((0_u32..6, -1_i32..4), 0..5),
        raw_records in raw_records(8, 24),
    ) {
        let records = records_from(width, height, &raw_records);
        let mut config = LevelConfig::new(GridConfig::new(width, height), catalog_from(&content));
        config.connections = records.clone();

        let grid = generate_level(&mut config, seed).expect("valid config generates");
        let registry = ConnectionRegistry::build(&records).expect("records are conflict free");

        // Every slot of every room is bound.
        for room in grid.rooms() {
            for direction in Direction::ALL {
                prop_assert!(grid.connection_at(room.pos(), direction).is_some());
            }
        }

        // Adjacent rooms share a connection exactly when the registry names them.
        for room in grid.rooms() {
            for direction in [Direction::East, Direction::North] {
                let neighbor = room.pos().step(direction).filter(|&n| grid.contains(n));
                let Some(neighbor) = neighbor else {
                    continue;
                };
                let here = room.connection_id(direction);
                let there = grid
                    .room(neighbor, RoomFilter::any())
                    .and_then(|r| r.connection_id(direction.opposite()));
                match registry.lookup(room.pos(), neighbor) {
                    Some(kind) => {
                        prop_assert_eq!(here, there);
                        prop_assert_eq!(grid.connection_kind(room.pos(), direction), Some(kind));
                    }
                    None => {
                        prop_assert_ne!(here, there);
                        prop_assert_eq!(
                            grid.connection_kind(room.pos(), direction),
                            Some(ConnectionKind::Sealed)
                        );
                    }
                }
            }
        }

        // Caps hold and every room was counted once.
        for profile in &config.rooms.content {
            if profile.max_spawn_amount >= 0 {
                prop_assert!(profile.spawn_count() <= profile.max_spawn_amount as u32);
            }
        }
        prop_assert_eq!(config.rooms.total_spawn_count() as usize, grid.room_count());
        prop_assert_eq!(config.rooms.start.spawn_count(), 1);
    }

    #[test]
    fn registry_lookup_is_symmetric(
        raw_records in raw_records(6, 30),
    ) {
        let records = records_from(6, 6, &raw_records);
        let registry = ConnectionRegistry::build(&records).expect("records are conflict free");
        for (a, b, kind) in registry.pairs() {
            prop_assert_eq!(registry.lookup(a, b), Some(kind));
            prop_assert_eq!(registry.lookup(b, a), Some(kind));
        }
        prop_assert_eq!(registry.len(), records.len());
    }

    #[test]
    fn nan_coordinates_never_resolve(seed in any::<u64>(), y in -2.0_f32..10.0) {
        let mut config = LevelConfig::build_default();
        let grid = generate_level(&mut config, seed).expect("default level generates");
        prop_assert!(grid.room_at_coordinate(f32::NAN, y, RoomFilter::any()).is_none());
        prop_assert!(grid.room_at_coordinate(y, f32::NAN, RoomFilter::any()).is_none());
    }
}
