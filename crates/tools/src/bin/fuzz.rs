use std::collections::BTreeMap;

use anyhow::{Result, ensure};
use clap::Parser;
use log::info;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use roomgrid::{
    ConnectionKind, ConnectionRecord, ConnectionRegistry, DebugColor, Direction, Grid,
    GridConfig, GridPos, LevelConfig, RoomCatalog, RoomFilter, RoomSpawnProfile, generate_level,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    iterations: u32,
}

fn below(rng: &mut ChaCha8Rng, bound: u64) -> u64 {
    rng.next_u64() % bound
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_catalog(rng: &mut ChaCha8Rng) -> RoomCatalog {
    let mut catalog = RoomCatalog::new(
        RoomSpawnProfile::new("start", DebugColor::default()),
        RoomSpawnProfile::new("exit", DebugColor::default()),
        RoomSpawnProfile::new("empty", DebugColor::default()),
    );
    for index in 0..below(rng, 5) {
        let min = below(rng, 12) as u32;
        let max = below(rng, 5) as i32 - 1;
        catalog = catalog.with_content(
            RoomSpawnProfile::new(format!("kind_{index}"), DebugColor::default())
                .with_min_spawn_amount(min)
                .with_max_spawn_amount(max),
        );
    }
    catalog
}

/// Adjacent pairs only, with the first drawn kind kept for each pair.
fn random_records(rng: &mut ChaCha8Rng, width: i32, height: i32) -> Vec<ConnectionRecord> {
    let kinds = [ConnectionKind::Sealed, ConnectionKind::Locked, ConnectionKind::Open];
    let mut pairs = BTreeMap::new();
    for _ in 0..below(rng, (width * height) as u64 * 2) {
        let a = GridPos::new(below(rng, width as u64) as i32, below(rng, height as u64) as i32);
        let b = a.step(choose(rng, &[Direction::East, Direction::North]));
        if let Some(b) = b.filter(|b| b.x < width && b.y < height) {
            pairs.entry((a, b)).or_insert_with(|| choose(rng, &kinds));
        }
    }
    pairs
        .into_iter()
        .map(|((a, b), kind)| {
            // Either order must bind the same way.
            if rng.next_u64() % 2 == 0 {
                ConnectionRecord::new(a, b, kind)
            } else {
                ConnectionRecord::new(b, a, kind)
            }
        })
        .collect()
}

fn check_invariants(grid: &Grid, config: &LevelConfig) -> Result<()> {
    let registry = ConnectionRegistry::build(&config.connections)?;

    for room in grid.rooms() {
        for direction in Direction::ALL {
            ensure!(
                grid.connection_at(room.pos(), direction).is_some(),
                "Invariant failed: empty {direction:?} slot at {}",
                room.pos()
            );
        }
        for direction in [Direction::East, Direction::North] {
            let Some(neighbor) = room.pos().step(direction) else {
                continue;
            };
            let Some(other) = grid.room(neighbor, RoomFilter::any()) else {
                continue;
            };
            let shared =
                room.connection_id(direction) == other.connection_id(direction.opposite());
            let expected = registry.lookup(room.pos(), neighbor);
            ensure!(
                shared == expected.is_some(),
                "Invariant failed: binding between {} and {neighbor} disagrees with the table",
                room.pos()
            );
            let kind = grid.connection_kind(room.pos(), direction);
            ensure!(
                kind == Some(expected.unwrap_or(ConnectionKind::Sealed)),
                "Invariant failed: wrong kind between {} and {neighbor}",
                room.pos()
            );
        }
    }

    for profile in &config.rooms.content {
        if !profile.is_unlimited() {
            ensure!(
                i64::from(profile.spawn_count()) <= i64::from(profile.max_spawn_amount),
                "Invariant failed: {} spawned past its cap",
                profile.name
            );
        }
    }
    ensure!(
        config.rooms.total_spawn_count() as usize == grid.room_count(),
        "Invariant failed: spawn counts do not add up to the room count"
    );
    ensure!(config.rooms.start.spawn_count() == 1, "Invariant failed: start room not unique");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} levels...", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for iteration in 0..args.iterations {
        let width = below(&mut rng, 8) as i32 + 1;
        let height = below(&mut rng, 8) as i32 + 1;
        let mut config = LevelConfig::new(GridConfig::new(width, height), random_catalog(&mut rng));
        config.connections = random_records(&mut rng, width, height);

        let level_seed = rng.next_u64();
        let grid = generate_level(&mut config, level_seed)?;
        check_invariants(&grid, &config)?;

        let replay = generate_level(&mut config, level_seed)?;
        ensure!(
            replay.fingerprint() == grid.fingerprint(),
            "Invariant failed: seed {level_seed} did not reproduce its layout"
        );
        info!("level {iteration}: {width}x{height} seed {level_seed} ok");
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
