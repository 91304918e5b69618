//! Room spawn profiles and the catalog that owns their spawn counters.

use serde::{Deserialize, Serialize};

use crate::types::DebugColor;

/// Which catalog entry a room was typed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileId {
    Start,
    Exit,
    Filler,
    /// Index into [`RoomCatalog::content`].
    Content(usize),
}

impl ProfileId {
    pub(crate) fn code(self) -> u32 {
        match self {
            Self::Start => 0,
            Self::Exit => 1,
            Self::Filler => 2,
            Self::Content(index) => 3 + index as u32,
        }
    }
}

/// A named room-content type with spawn quota rules.
///
/// `min_spawn_amount` is a weighting input to room typing, not a floor.
/// A negative `max_spawn_amount` means unlimited; otherwise the profile stays
/// eligible while its spawn count is below the cap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpawnProfile {
    pub name: String,
    #[serde(default)]
    pub min_spawn_amount: u32,
    #[serde(default = "unlimited")]
    pub max_spawn_amount: i32,
    #[serde(default)]
    pub debug_color: DebugColor,
    #[serde(skip)]
    spawn_count: u32,
}

fn unlimited() -> i32 {
    -1
}

impl RoomSpawnProfile {
    pub fn new(name: impl Into<String>, debug_color: DebugColor) -> Self {
        Self {
            name: name.into(),
            min_spawn_amount: 0,
            max_spawn_amount: unlimited(),
            debug_color,
            spawn_count: 0,
        }
    }

    pub fn with_min_spawn_amount(mut self, amount: u32) -> Self {
        self.min_spawn_amount = amount;
        self
    }

    pub fn with_max_spawn_amount(mut self, amount: i32) -> Self {
        self.max_spawn_amount = amount;
        self
    }

    pub fn spawn_count(&self) -> u32 {
        self.spawn_count
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_spawn_amount < 0
    }

    pub fn can_spawn(&self) -> bool {
        self.is_unlimited() || i64::from(self.spawn_count) < i64::from(self.max_spawn_amount)
    }

    pub(crate) fn increase_spawn_count(&mut self) {
        self.spawn_count += 1;
    }

    pub(crate) fn reset_spawn_count(&mut self) {
        self.spawn_count = 0;
    }
}

/// Every profile a level can assign, in the order room typing tries them.
///
/// The catalog is the session object that carries spawn counters between a
/// generation pass and its teardown. Start, exit and filler are assigned
/// directly; only `content` goes through weighted selection, in list order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCatalog {
    pub start: RoomSpawnProfile,
    pub exit: RoomSpawnProfile,
    pub filler: RoomSpawnProfile,
    #[serde(default)]
    pub content: Vec<RoomSpawnProfile>,
}

impl RoomCatalog {
    pub fn new(start: RoomSpawnProfile, exit: RoomSpawnProfile, filler: RoomSpawnProfile) -> Self {
        Self { start, exit, filler, content: Vec::new() }
    }

    pub fn with_content(mut self, profile: RoomSpawnProfile) -> Self {
        self.content.push(profile);
        self
    }

    pub fn profile(&self, id: ProfileId) -> Option<&RoomSpawnProfile> {
        match id {
            ProfileId::Start => Some(&self.start),
            ProfileId::Exit => Some(&self.exit),
            ProfileId::Filler => Some(&self.filler),
            ProfileId::Content(index) => self.content.get(index),
        }
    }

    fn profile_mut(&mut self, id: ProfileId) -> Option<&mut RoomSpawnProfile> {
        match id {
            ProfileId::Start => Some(&mut self.start),
            ProfileId::Exit => Some(&mut self.exit),
            ProfileId::Filler => Some(&mut self.filler),
            ProfileId::Content(index) => self.content.get_mut(index),
        }
    }

    pub fn find(&self, name: &str) -> Option<(ProfileId, &RoomSpawnProfile)> {
        self.profiles().find(|(_, profile)| profile.name == name)
    }

    /// Start, exit, filler, then content profiles in configured order.
    pub fn profiles(&self) -> impl Iterator<Item = (ProfileId, &RoomSpawnProfile)> {
        [
            (ProfileId::Start, &self.start),
            (ProfileId::Exit, &self.exit),
            (ProfileId::Filler, &self.filler),
        ]
        .into_iter()
        .chain(self.content.iter().enumerate().map(|(index, p)| (ProfileId::Content(index), p)))
    }

    pub fn spawn_count(&self, id: ProfileId) -> u32 {
        self.profile(id).map_or(0, RoomSpawnProfile::spawn_count)
    }

    pub fn total_spawn_count(&self) -> u32 {
        self.profiles().map(|(_, profile)| profile.spawn_count()).sum()
    }

    pub(crate) fn record_spawn(&mut self, id: ProfileId) {
        if let Some(profile) = self.profile_mut(id) {
            profile.increase_spawn_count();
        }
    }

    pub fn reset_spawn_counts(&mut self) {
        self.start.reset_spawn_count();
        self.exit.reset_spawn_count();
        self.filler.reset_spawn_count();
        for profile in &mut self.content {
            profile.reset_spawn_count();
        }
    }
}
