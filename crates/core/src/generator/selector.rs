//! Greedy weighted room typing with per-profile spawn caps.

use rand_chacha::rand_core::Rng;

use crate::profile::{ProfileId, RoomCatalog};
use crate::rng::random_below;

/// Picks content profiles for rooms that are neither start nor exit.
///
/// Candidates are tried in catalog order. Each one costs a single draw in
/// `[0, total_cells)` and is accepted when the draw is at most
/// `row + min_spawn_amount` and its cap is not yet reached. The threshold grows
/// with the row, so later rows take rarer profiles more often. When no
/// candidate is accepted the room becomes filler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomTypeSelector {
    total_cells: usize,
}

impl RoomTypeSelector {
    pub fn new(total_cells: usize) -> Self {
        Self { total_cells: total_cells.max(1) }
    }

    pub fn select<R: Rng + ?Sized>(
        &self,
        row: usize,
        catalog: &RoomCatalog,
        rng: &mut R,
    ) -> ProfileId {
        for (index, candidate) in catalog.content.iter().enumerate() {
            let draw = random_below(rng, self.total_cells);
            let threshold = row + candidate.min_spawn_amount as usize;
            if draw <= threshold && candidate.can_spawn() {
                return ProfileId::Content(index);
            }
        }
        ProfileId::Filler
    }
}
