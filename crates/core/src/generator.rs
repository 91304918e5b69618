//! Grid generation: room typing and connection resolution in one row-major pass.

mod selector;

pub use selector::RoomTypeSelector;

use log::{debug, warn};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::config::{GridConfig, GridShape, LevelConfig};
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::placement::WorldFrame;
use crate::profile::{ProfileId, RoomCatalog};
use crate::registry::{ConnectionRecord, ConnectionRegistry};
use crate::rng::random_below;
use crate::types::{Direction, GridPos};

pub struct GridGenerator<'a> {
    config: &'a GridConfig,
}

impl<'a> GridGenerator<'a> {
    pub fn new(config: &'a GridConfig) -> Self {
        Self { config }
    }

    /// Runs one generation pass.
    ///
    /// Spawn counters are zeroed first. If the pass fails they are zeroed again
    /// before the error is returned, so an abandoned pass leaves every cap unused.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        catalog: &mut RoomCatalog,
        records: &[ConnectionRecord],
        rng: &mut R,
    ) -> Result<Grid, GenerationError> {
        catalog.reset_spawn_counts();
        let result = self.build(catalog, records, rng);
        if result.is_err() {
            catalog.reset_spawn_counts();
        }
        result
    }

    fn build<R: Rng + ?Sized>(
        &self,
        catalog: &mut RoomCatalog,
        records: &[ConnectionRecord],
        rng: &mut R,
    ) -> Result<Grid, GenerationError> {
        let shape = self.config.validate()?;
        let registry = ConnectionRegistry::build(records)?;
        warn_unbindable_records(shape, records);

        let start_column = random_below(rng, shape.width);
        let exit_column = random_below(rng, shape.width);
        let start = GridPos::new(start_column as i32, shape.start_row as i32);
        let exit = GridPos::new(exit_column as i32, shape.exit_row as i32);
        debug!("start room at {start}, exit room at {exit}");

        let selector = RoomTypeSelector::new(shape.total_cells());
        let mut grid = Grid::with_shape(shape, WorldFrame::from_config(self.config));
        let mut bound = 0_usize;

        for row in 0..shape.height {
            for column in 0..shape.width {
                let pos = GridPos::new(column as i32, row as i32);
                let profile = if pos == start {
                    ProfileId::Start
                } else if pos == exit {
                    ProfileId::Exit
                } else {
                    selector.select(row, catalog, rng)
                };
                catalog.record_spawn(profile);
                let spawn_profile = catalog.profile(profile).unwrap_or(&catalog.filler);
                grid.place_room(pos, profile, spawn_profile);

                if column > 0 {
                    let west = GridPos::new(pos.x - 1, pos.y);
                    if let Some(kind) = registry.lookup(west, pos)
                        && grid.bind(west, Direction::East, kind)
                    {
                        bound += 1;
                    }
                }
                if row > 0 {
                    let south = GridPos::new(pos.x, pos.y - 1);
                    if let Some(kind) = registry.lookup(south, pos)
                        && grid.bind(south, Direction::North, kind)
                    {
                        bound += 1;
                    }
                }
            }
        }

        let sealed = grid.seal_open_slots();

        let spawn_room = self.config.spawn_room;
        if !shape.contains(spawn_room) {
            return Err(GenerationError::SpawnRoomOutOfRange {
                pos: spawn_room,
                width: shape.width,
                height: shape.height,
            });
        }
        grid.set_spawn_room(spawn_room);

        let size = grid.world_size();
        debug!(
            "generated {}x{} grid: {bound} bound connections, {sealed} sealed sides, world {:.1}x{:.1}",
            shape.width, shape.height, size.width, size.height
        );
        Ok(grid)
    }
}

/// Records that name an off-grid room, pair a room with itself, or join
/// non-adjacent rooms can never be bound. They are reported, not rejected.
fn warn_unbindable_records(shape: GridShape, records: &[ConnectionRecord]) {
    for record in records {
        if !shape.contains(record.a) || !shape.contains(record.b) {
            warn!("connection {} <-> {} lies outside the grid and is ignored", record.a, record.b);
        } else if !record.a.is_adjacent(record.b) {
            warn!(
                "connection {} <-> {} joins non-adjacent rooms and is ignored",
                record.a, record.b
            );
        }
    }
}

/// Generates the grid described by `config` from a ChaCha8 stream seeded with `seed`.
pub fn generate_level(config: &mut LevelConfig, seed: u64) -> Result<Grid, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let LevelConfig { grid, rooms, connections, .. } = config;
    GridGenerator::new(grid).generate(rooms, connections, &mut rng)
}
