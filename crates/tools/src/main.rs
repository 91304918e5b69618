use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roomgrid::{Grid, GridPos, LevelConfig, ProfileId, generate_level};
use serde::Serialize;

mod ascii;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one level and print it
    Generate {
        /// Level config JSON; the built-in sample level when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Print a JSON summary instead of the ASCII map
        #[arg(long)]
        json: bool,
    },
    /// Write the built-in sample level config to a file
    Init { path: PathBuf },
}

#[derive(Serialize)]
struct RoomSummary<'a> {
    pos: GridPos,
    profile: &'a str,
    locked: bool,
}

#[derive(Serialize)]
struct GenerateSummary<'a> {
    seed: u64,
    width: usize,
    height: usize,
    fingerprint: String,
    start_room: GridPos,
    exit_room: Option<GridPos>,
    spawn_room: GridPos,
    world_width: f32,
    world_height: f32,
    connection_count: usize,
    rooms: Vec<RoomSummary<'a>>,
}

impl<'a> GenerateSummary<'a> {
    fn new(grid: &'a Grid, seed: u64) -> Self {
        let size = grid.world_size();
        Self {
            seed,
            width: grid.width(),
            height: grid.height(),
            fingerprint: format!("0x{:016x}", grid.fingerprint()),
            start_room: grid.start_room().pos(),
            exit_room: grid.exit_room().map(|room| room.pos()),
            spawn_room: grid.spawn_room().pos(),
            world_width: size.width,
            world_height: size.height,
            connection_count: grid.connection_count(),
            rooms: grid
                .rooms()
                .map(|room| RoomSummary {
                    pos: room.pos(),
                    profile: room.profile_name(),
                    locked: room.is_locked(),
                })
                .collect(),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<LevelConfig> {
    match path {
        Some(path) => LevelConfig::load(path)
            .with_context(|| format!("Failed to load level config: {}", path.display())),
        None => Ok(LevelConfig::build_default()),
    }
}

fn generate(config_path: Option<&Path>, seed: u64, json: bool) -> Result<()> {
    let mut config = load_config(config_path)?;
    let grid = generate_level(&mut config, seed).context("Level generation failed")?;

    if json {
        let summary = GenerateSummary::new(&grid, seed);
        let text =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{text}");
        return Ok(());
    }

    for line in ascii::render_lines(&grid) {
        println!("{line}");
    }
    println!();
    println!("Seed: {seed}");
    println!("Spawn room: {}", grid.spawn_room().pos());
    let size = grid.world_size();
    println!("World size: {:.2} x {:.2}", size.width, size.height);
    println!("Fingerprint: 0x{:016x}", grid.fingerprint());
    for (id, profile) in config.rooms.profiles() {
        if matches!(id, ProfileId::Content(_)) || profile.spawn_count() > 0 {
            println!("  {:<12} {}", profile.name, profile.spawn_count());
        }
    }
    Ok(())
}

fn init(path: &Path) -> Result<()> {
    LevelConfig::build_default()
        .write_atomic(path)
        .with_context(|| format!("Failed to write level config: {}", path.display()))?;
    println!("Wrote sample level config to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match &args.command {
        Command::Generate { config, seed, json } => generate(config.as_deref(), *seed, *json),
        Command::Init { path } => init(path),
    }
}
