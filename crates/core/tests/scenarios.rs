use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use roomgrid::{
    ConnectionKind, ConnectionRecord, DebugColor, Direction, GenerationError, GridConfig,
    GridGenerator, GridPos, LevelConfig, ProfileId, RoomCatalog, RoomFilter, RoomSpawnProfile,
    WorldPos,
};

fn plain_catalog() -> RoomCatalog {
    RoomCatalog::new(
        RoomSpawnProfile::new("start", DebugColor::rgb(0, 255, 0)),
        RoomSpawnProfile::new("exit", DebugColor::rgb(255, 0, 0)),
        RoomSpawnProfile::new("empty", DebugColor::rgb(100, 100, 100)),
    )
}

fn generate(config: &mut LevelConfig, seed: u64) -> roomgrid::Grid {
    roomgrid::generate_level(config, seed).expect("level should generate")
}

#[test]
fn single_open_record_opens_exactly_one_side_pair() {
    let a = GridPos::new(0, 0);
    let b = GridPos::new(1, 0);
    let mut config = LevelConfig::new(GridConfig::new(3, 3), plain_catalog())
        .with_connection(ConnectionRecord::new(a, b, ConnectionKind::Open));
    let grid = generate(&mut config, 2_024);

    assert_eq!(grid.connection_kind(a, Direction::East), Some(ConnectionKind::Open));
    assert_eq!(grid.connection_kind(b, Direction::West), Some(ConnectionKind::Open));
    for direction in [Direction::North, Direction::South, Direction::West] {
        assert_eq!(grid.connection_kind(a, direction), Some(ConnectionKind::Sealed));
    }
    for direction in [Direction::North, Direction::South, Direction::East] {
        assert_eq!(grid.connection_kind(b, direction), Some(ConnectionKind::Sealed));
    }
}

#[test]
fn vertical_record_binds_north_and_south_slots() {
    let lower = GridPos::new(2, 1);
    let upper = GridPos::new(2, 2);
    let mut config = LevelConfig::new(GridConfig::new(3, 3), plain_catalog())
        .with_connection(ConnectionRecord::new(upper, lower, ConnectionKind::Locked));
    let grid = generate(&mut config, 1);

    let north = grid.connection_at(lower, Direction::North).expect("north slot");
    let south = grid.connection_at(upper, Direction::South).expect("south slot");
    assert_eq!(north, south);
    assert_eq!(north.kind(), ConnectionKind::Locked);
    assert!(!north.is_dead_end());
}

#[test]
fn capped_profile_spawns_exactly_once() {
    // Five content rows between the start row and the exit row.
    let capped = RoomSpawnProfile::new("boss", DebugColor::rgb(128, 0, 128))
        .with_min_spawn_amount(7)
        .with_max_spawn_amount(1);
    let mut config =
        LevelConfig::new(GridConfig::new(1, 7), plain_catalog().with_content(capped));

    for seed in 0..10 {
        let grid = generate(&mut config, seed);
        assert_eq!(config.rooms.content[0].spawn_count(), 1);
        assert_eq!(config.rooms.filler.spawn_count(), 4);

        let content_rooms: Vec<_> =
            grid.rooms().filter(|room| room.profile() != ProfileId::Start).collect();
        assert_eq!(content_rooms.len(), 6);
        let bosses = content_rooms.iter().filter(|room| room.profile_name() == "boss").count();
        assert_eq!(bosses, 1);
        // Threshold covers every draw, so the first content row takes the boss.
        let first_content = grid.room(GridPos::new(0, 1), RoomFilter::any()).expect("row 1");
        assert_eq!(first_content.profile_name(), "boss");
    }
}

#[test]
fn neighbors_of_centre_cell_come_back_in_scan_order() {
    let mut config = LevelConfig::new(GridConfig::new(3, 3), plain_catalog());
    let grid = generate(&mut config, 77);

    let found: Vec<GridPos> =
        grid.neighbors(GridPos::new(1, 1), RoomFilter::any()).iter().map(|r| r.pos()).collect();
    let expected = vec![
        GridPos::new(0, 0),
        GridPos::new(1, 0),
        GridPos::new(2, 0),
        GridPos::new(0, 1),
        GridPos::new(2, 1),
        GridPos::new(0, 2),
        GridPos::new(1, 2),
        GridPos::new(2, 2),
    ];
    assert_eq!(found, expected);
}

#[test]
fn corner_neighbors_are_clipped_to_the_grid() {
    let mut config = LevelConfig::new(GridConfig::new(3, 3), plain_catalog());
    let grid = generate(&mut config, 77);

    let found: Vec<GridPos> =
        grid.neighbors(GridPos::new(0, 0), RoomFilter::any()).iter().map(|r| r.pos()).collect();
    assert_eq!(found, vec![GridPos::new(1, 0), GridPos::new(0, 1), GridPos::new(1, 1)]);
}

#[test]
fn neighbors_at_the_coordinate_limits_are_misses() {
    let mut config = LevelConfig::new(GridConfig::new(3, 3), plain_catalog());
    let grid = generate(&mut config, 77);

    for pos in [
        GridPos::new(i32::MAX, 0),
        GridPos::new(i32::MIN, 0),
        GridPos::new(0, i32::MAX),
        GridPos::new(i32::MIN, i32::MIN),
    ] {
        assert!(grid.neighbors(pos, RoomFilter::any()).is_empty(), "{pos} has no neighbours");
    }
    assert!(grid.room(GridPos::new(i32::MAX, i32::MAX), RoomFilter::any()).is_none());
}

#[test]
fn locked_rooms_are_hidden_only_when_requested() {
    let mut config = LevelConfig::new(GridConfig::new(3, 3), plain_catalog());
    let mut grid = generate(&mut config, 5);
    let target = GridPos::new(1, 0);
    assert!(grid.set_locked(target, true));

    assert!(grid.room(target, RoomFilter::any()).is_some());
    assert!(grid.room(target, RoomFilter::any().excluding_locked()).is_none());

    let unlocked = grid.neighbors(GridPos::new(1, 1), RoomFilter::any().excluding_locked());
    assert_eq!(unlocked.len(), 7);
    assert!(unlocked.iter().all(|room| room.pos() != target));
}

#[test]
fn profile_filter_rejects_other_profiles() {
    let mut config = LevelConfig::new(GridConfig::new(3, 3), plain_catalog());
    let grid = generate(&mut config, 8);
    let start = grid.start_room().pos();

    assert!(grid.room(start, RoomFilter::any().with_profile("start")).is_some());
    assert!(grid.room(start, RoomFilter::any().with_profile("empty")).is_none());

    let empties = grid
        .rooms()
        .filter(|room| grid.room(room.pos(), RoomFilter::any().with_profile("empty")).is_some())
        .count();
    assert_eq!(empties, 7);
}

#[test]
fn coordinate_lookup_rejects_nan_and_out_of_range() {
    let mut config = LevelConfig::new(GridConfig::new(3, 3), plain_catalog());
    let grid = generate(&mut config, 3);
    let any = RoomFilter::any();

    assert!(grid.room_at_coordinate(f32::NAN, 1.0, any).is_none());
    assert!(grid.room_at_coordinate(1.0, f32::NAN, any).is_none());
    assert!(grid.room_at_coordinate(-1.0, 0.0, any).is_none());
    assert!(grid.room_at_coordinate(3.0, 0.0, any).is_none());
    assert!(grid.room_at_coordinate(0.0, 3.0, any).is_none());
    assert!(grid.room(GridPos::new(0, -1), any).is_none());

    let room = grid.room_at_coordinate(1.2, 1.8, any).expect("rounds into the grid");
    assert_eq!(room.pos(), GridPos::new(1, 2));
}

#[test]
fn coordinates_within_half_a_cell_of_the_edge_round_to_the_nearest_cell() {
    let mut config = LevelConfig::new(GridConfig::new(3, 3), plain_catalog());
    let grid = generate(&mut config, 3);
    let any = RoomFilter::any();

    let low = grid.room_at_coordinate(-0.4, -0.4, any).expect("rounds up to the first cell");
    assert_eq!(low.pos(), GridPos::new(0, 0));
    assert!(grid.room_at_coordinate(-0.6, 0.0, any).is_none());

    let high = grid.room_at_coordinate(2.4, 2.4, any).expect("rounds down to the last cell");
    assert_eq!(high.pos(), GridPos::new(2, 2));
    // `width - 0.4` rounds to `width`, one past the last column.
    assert!(grid.room_at_coordinate(2.6, 0.0, any).is_none());
    assert!(grid.room_at_coordinate(0.0, 2.6, any).is_none());
}

#[test]
fn world_lookup_finds_the_room_placed_there() {
    let mut config = LevelConfig::new(
        GridConfig::new(4, 3).with_origin(WorldPos::new(-10.0, 5.0)),
        plain_catalog(),
    );
    let grid = generate(&mut config, 12);

    for room in grid.rooms() {
        let world = grid.world_position(room.pos());
        let found = grid.room_at_world(world, RoomFilter::any()).expect("room under its position");
        assert_eq!(found.pos(), room.pos());
    }
    assert!(grid.room_at_world(WorldPos::new(f32::NAN, 0.0), RoomFilter::any()).is_none());
    assert!(grid.room_at_world(WorldPos::new(-100.0, 5.0), RoomFilter::any()).is_none());
}

#[test]
fn world_size_matches_dimensions_scale_and_spacing() {
    let mut config = LevelConfig::new(
        GridConfig::new(4, 2).with_room_scale(roomgrid::RoomScale { x: 2.0, y: 1.0, z: 0.5 }),
        plain_catalog(),
    );
    let grid = generate(&mut config, 1);
    let size = grid.world_size();
    assert_eq!(size.width, 4.0 * 2.0 + 20.0 * 4.0);
    assert_eq!(size.height, 2.0 * 0.5 + 5.0 * 2.0);
}

#[test]
fn designated_spawn_room_is_resolved() {
    let mut config = LevelConfig::new(
        GridConfig::new(4, 4).with_spawn_room(GridPos::new(3, 2)),
        plain_catalog(),
    );
    let grid = generate(&mut config, 6);
    assert_eq!(grid.spawn_room().pos(), GridPos::new(3, 2));
}

#[test]
fn out_of_range_spawn_room_is_a_configuration_error() {
    let mut config = LevelConfig::new(
        GridConfig::new(3, 3).with_spawn_room(GridPos::new(3, 0)),
        plain_catalog(),
    );
    let err = roomgrid::generate_level(&mut config, 1).expect_err("spawn room is off the grid");
    assert_eq!(
        err,
        GenerationError::SpawnRoomOutOfRange { pos: GridPos::new(3, 0), width: 3, height: 3 }
    );
    assert_eq!(config.rooms.total_spawn_count(), 0);
}

#[test]
fn invalid_dimensions_stop_generation() {
    let mut config = LevelConfig::new(GridConfig::new(0, 4), plain_catalog());
    let err = roomgrid::generate_level(&mut config, 1).expect_err("zero width is invalid");
    assert_eq!(err, GenerationError::InvalidDimensions { x: 0, y: 4 });
}

#[test]
fn conflicting_records_stop_generation() {
    let a = GridPos::new(0, 0);
    let b = GridPos::new(0, 1);
    let mut config = LevelConfig::new(GridConfig::new(2, 2), plain_catalog())
        .with_connection(ConnectionRecord::new(a, b, ConnectionKind::Open))
        .with_connection(ConnectionRecord::new(b, a, ConnectionKind::Locked));
    let err = roomgrid::generate_level(&mut config, 1).expect_err("conflict must be reported");
    assert!(matches!(err, GenerationError::ConflictingConnection { .. }));
}

#[test]
fn custom_start_and_exit_rows_are_honoured() {
    let mut config =
        LevelConfig::new(GridConfig::new(3, 5).with_rows(1, Some(3)), plain_catalog());
    let mut rng = ChaCha8Rng::seed_from_u64(19);
    let grid = GridGenerator::new(&config.grid)
        .generate(&mut config.rooms, &config.connections, &mut rng)
        .expect("rows are inside the grid");

    assert_eq!(grid.start_room().pos().y, 1);
    assert_eq!(grid.exit_room().expect("distinct rows").pos().y, 3);
}
