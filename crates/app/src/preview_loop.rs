use log::{info, warn};
use macroquad::prelude::KeyCode;
use roomgrid::{GenerationError, GridPos, LevelSession, RoomFilter};

use crate::{format_fingerprint, format_seed};

pub const CONTROLS_HINT: &str = "[R] rebuild  [N] new seed  [L] lock hovered room  [H] hide help";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Empty,
    Showing,
    Failed(GenerationError),
}

#[derive(Default)]
pub struct PreviewState {
    pub mode: PreviewMode,
    pub show_help: bool,
    /// Grid cell under the mouse, set by the caller before `tick`.
    pub hovered: Option<GridPos>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self { show_help: true, ..Self::default() }
    }

    /// Builds the first grid. Call once before the frame loop.
    pub fn start(&mut self, session: &mut LevelSession) {
        let result = session.rebuild().map(|_| ());
        self.record(session, result);
    }

    /// Process the keys pressed this frame. `fresh_seed` is only called
    /// when a new seed is requested.
    pub fn tick(
        &mut self,
        session: &mut LevelSession,
        keys_pressed: &[KeyCode],
        fresh_seed: impl FnOnce() -> u64,
    ) {
        if keys_pressed.contains(&KeyCode::H) {
            self.show_help = !self.show_help;
        }

        if keys_pressed.contains(&KeyCode::N) {
            let result = session.reseed(fresh_seed()).map(|_| ());
            self.record(session, result);
        } else if keys_pressed.contains(&KeyCode::R) {
            let result = session.rebuild().map(|_| ());
            self.record(session, result);
        } else if keys_pressed.contains(&KeyCode::L) {
            self.toggle_hovered_lock(session);
        }
    }

    fn toggle_hovered_lock(&self, session: &mut LevelSession) {
        let (Some(pos), Some(grid)) = (self.hovered, session.grid_mut()) else {
            return;
        };
        if let Some(locked) = grid.room(pos, RoomFilter::any()).map(|room| room.is_locked()) {
            grid.set_locked(pos, !locked);
        }
    }

    fn record(&mut self, session: &LevelSession, result: Result<(), GenerationError>) {
        match (result, session.grid()) {
            (Ok(()), Some(grid)) => {
                info!(
                    "seed {} rebuild {}: fingerprint {}",
                    session.seed(),
                    session.generation(),
                    format_fingerprint(grid.fingerprint())
                );
                self.mode = PreviewMode::Showing;
            }
            (Err(err), _) => {
                warn!("generation failed for seed {}: {err}", session.seed());
                self.mode = PreviewMode::Failed(err);
            }
            (Ok(()), None) => self.mode = PreviewMode::Empty,
        }
    }

    pub fn status_lines(&self, session: &LevelSession) -> Vec<String> {
        let seed = format_seed(session.seed());
        let mut lines = vec![format!("Seed: {seed}  Rebuild #{}", session.generation())];

        match (&self.mode, session.grid()) {
            (PreviewMode::Failed(err), _) => lines.push(format!("Generation failed: {err}")),
            (PreviewMode::Showing, Some(grid)) => {
                lines.push(format!("Fingerprint: {}", format_fingerprint(grid.fingerprint())));
                lines.push(format!("Spawn room: {}", grid.spawn_room().pos()));
                let hovered = self.hovered.and_then(|pos| grid.room(pos, RoomFilter::any()));
                if let Some(room) = hovered {
                    let lock = if room.is_locked() { " (locked)" } else { "" };
                    lines.push(format!("Room {}: {}{lock}", room.pos(), room.profile_name()));
                }
            }
            _ => lines.push("No level generated".to_string()),
        }

        if self.show_help {
            lines.push(CONTROLS_HINT.to_string());
        }
        lines
    }
}
