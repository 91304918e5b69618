//! Owns one level's configuration, random stream and live grid.
//!
//! This is the entry point preview tooling drives: `rebuild` tears the current
//! grid down (resetting spawn counters) and generates a fresh one.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::LevelConfig;
use crate::error::GenerationError;
use crate::generator::GridGenerator;
use crate::grid::Grid;
use crate::profile::RoomCatalog;

pub struct LevelSession {
    config: LevelConfig,
    seed: u64,
    rng: ChaCha8Rng,
    grid: Option<Grid>,
    generation: u64,
}

impl LevelSession {
    pub fn new(config: LevelConfig, seed: u64) -> Self {
        Self { config, seed, rng: ChaCha8Rng::seed_from_u64(seed), grid: None, generation: 0 }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of successful generation passes since the last reseed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.config.rooms
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut Grid> {
        self.grid.as_mut()
    }

    /// Tears down the live grid and generates the next one from the
    /// session's stream. Successive rebuilds give new layouts, and the whole
    /// sequence repeats for the same seed.
    pub fn rebuild(&mut self) -> Result<&Grid, GenerationError> {
        self.teardown();
        let LevelConfig { grid, rooms, connections, .. } = &mut self.config;
        let generated = GridGenerator::new(grid).generate(rooms, connections, &mut self.rng)?;
        self.generation += 1;
        Ok(&*self.grid.insert(generated))
    }

    /// Restarts the stream from `seed` and rebuilds.
    pub fn reseed(&mut self, seed: u64) -> Result<&Grid, GenerationError> {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.generation = 0;
        self.rebuild()
    }

    /// Swaps in a new configuration, dropping the old grid, and reseeds.
    pub fn replace_config(&mut self, config: LevelConfig) -> Result<&Grid, GenerationError> {
        self.teardown();
        self.config = config;
        self.reseed(self.seed)
    }

    pub fn teardown(&mut self) {
        if let Some(grid) = self.grid.take() {
            grid.destroy(&mut self.config.rooms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridPos;

    #[test]
    fn rebuild_resets_counters_before_generating() {
        let mut session = LevelSession::new(LevelConfig::build_default(), 42);
        let cells = {
            let grid = session.rebuild().expect("first build");
            (grid.width() * grid.height()) as u32
        };
        assert_eq!(session.catalog().total_spawn_count(), cells);

        session.rebuild().expect("second build");
        assert_eq!(session.catalog().total_spawn_count(), cells);
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn teardown_releases_grid_and_counters() {
        let mut session = LevelSession::new(LevelConfig::build_default(), 7);
        session.rebuild().expect("build");
        session.teardown();
        assert!(session.grid().is_none());
        assert_eq!(session.catalog().total_spawn_count(), 0);
    }

    #[test]
    fn reseed_replays_the_same_sequence() {
        let mut session = LevelSession::new(LevelConfig::build_default(), 11);
        let first = session.rebuild().expect("build").fingerprint();
        let second = session.rebuild().expect("build").fingerprint();

        assert_eq!(session.reseed(11).expect("reseed").fingerprint(), first);
        assert_eq!(session.rebuild().expect("build").fingerprint(), second);
    }

    #[test]
    fn failed_rebuild_leaves_no_grid() {
        let mut session = LevelSession::new(LevelConfig::build_default(), 3);
        session.rebuild().expect("build");

        let mut broken = LevelConfig::build_default();
        broken.grid.spawn_room = GridPos::new(-1, 0);
        assert!(session.replace_config(broken).is_err());
        assert!(session.grid().is_none());
        assert_eq!(session.catalog().total_spawn_count(), 0);
    }
}
