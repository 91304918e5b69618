//! The generated grid: a coordinate-indexed room arena plus a connection arena.

mod query;

pub use query::RoomFilter;

use log::debug;
use slotmap::SlotMap;
use xxhash_rust::xxh3::xxh3_64;

use crate::config::GridShape;
use crate::placement::{WorldFrame, WorldSize};
use crate::profile::{ProfileId, RoomCatalog, RoomSpawnProfile};
use crate::types::{ConnectionId, ConnectionKind, DebugColor, Direction, GridPos, WorldPos};

/// A link between two adjacent rooms, or a dead-end filler owned by one room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    kind: ConnectionKind,
    from: GridPos,
    to: Option<GridPos>,
}

impl Connection {
    pub fn kind(&self) -> ConnectionKind {
        self.kind
    }

    pub fn rooms(&self) -> (GridPos, Option<GridPos>) {
        (self.from, self.to)
    }

    /// Synthesized fillers join nothing.
    pub fn is_dead_end(&self) -> bool {
        self.to.is_none()
    }

    /// The room on the far side as seen from `pos`.
    pub fn other_side(&self, pos: GridPos) -> Option<GridPos> {
        match self.to {
            Some(to) if self.from == pos => Some(to),
            Some(_) if self.to == Some(pos) => Some(self.from),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pos: GridPos,
    profile: ProfileId,
    profile_name: String,
    debug_color: DebugColor,
    locked: bool,
    connections: [Option<ConnectionId>; 4],
}

impl Room {
    fn new(pos: GridPos, profile: ProfileId, spawn_profile: &RoomSpawnProfile) -> Self {
        Self {
            pos,
            profile,
            profile_name: spawn_profile.name.clone(),
            debug_color: spawn_profile.debug_color,
            locked: false,
            connections: [None; 4],
        }
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn profile(&self) -> ProfileId {
        self.profile
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn debug_color(&self) -> DebugColor {
        self.debug_color
    }

    /// Occupied rooms are skipped by queries that exclude locked rooms.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn connection_id(&self, direction: Direction) -> Option<ConnectionId> {
        self.connections[direction.slot()]
    }
}

#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    rooms: Vec<Room>,
    connections: SlotMap<ConnectionId, Connection>,
    frame: WorldFrame,
    start_room: GridPos,
    exit_room: Option<GridPos>,
    spawn_room: GridPos,
}

impl Grid {
    pub(crate) fn with_shape(shape: GridShape, frame: WorldFrame) -> Self {
        Self {
            width: shape.width,
            height: shape.height,
            rooms: Vec::with_capacity(shape.total_cells()),
            connections: SlotMap::with_capacity_and_key(shape.total_cells() * 2),
            frame,
            start_room: GridPos::default(),
            exit_room: None,
            spawn_room: GridPos::default(),
        }
    }

    /// Rooms must arrive in row-major order, row 0 first.
    pub(crate) fn place_room(
        &mut self,
        pos: GridPos,
        profile: ProfileId,
        spawn: &RoomSpawnProfile,
    ) {
        debug_assert_eq!(self.rooms.len(), self.index(pos));
        match profile {
            ProfileId::Start => self.start_room = pos,
            ProfileId::Exit => self.exit_room = Some(pos),
            _ => {}
        }
        self.rooms.push(Room::new(pos, profile, spawn));
    }

    /// Binds one shared connection to `from`'s `side` and the opposite side of
    /// the neighbour in that direction. Returns false when there is no such neighbour.
    pub(crate) fn bind(&mut self, from: GridPos, side: Direction, kind: ConnectionKind) -> bool {
        if !self.contains(from) {
            return false;
        }
        let Some(to) = from.step(side).filter(|&to| self.contains(to)) else {
            return false;
        };
        let id = self.connections.insert(Connection { kind, from, to: Some(to) });
        let from_index = self.index(from);
        let to_index = self.index(to);
        self.rooms[from_index].connections[side.slot()] = Some(id);
        self.rooms[to_index].connections[side.opposite().slot()] = Some(id);
        true
    }

    /// Gives every empty slot its own sealed dead end. Returns how many were made.
    pub(crate) fn seal_open_slots(&mut self) -> usize {
        let Self { rooms, connections, .. } = self;
        let mut sealed = 0;
        for room in rooms.iter_mut() {
            for slot in room.connections.iter_mut().filter(|slot| slot.is_none()) {
                *slot = Some(connections.insert(Connection {
                    kind: ConnectionKind::Sealed,
                    from: room.pos,
                    to: None,
                }));
                sealed += 1;
            }
        }
        sealed
    }

    pub(crate) fn set_spawn_room(&mut self, pos: GridPos) {
        self.spawn_room = pos;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    /// The connection bound to `direction` of the room at `pos`.
    pub fn connection_at(&self, pos: GridPos, direction: Direction) -> Option<&Connection> {
        self.room(pos, RoomFilter::any())
            .and_then(|room| room.connection_id(direction))
            .and_then(|id| self.connections.get(id))
    }

    pub fn connection_kind(&self, pos: GridPos, direction: Direction) -> Option<ConnectionKind> {
        self.connection_at(pos, direction).map(Connection::kind)
    }

    pub fn start_room(&self) -> &Room {
        &self.rooms[self.index(self.start_room)]
    }

    /// `None` only when the exit cell coincided with the start cell.
    pub fn exit_room(&self) -> Option<&Room> {
        self.exit_room.map(|pos| &self.rooms[self.index(pos)])
    }

    pub fn spawn_room(&self) -> &Room {
        &self.rooms[self.index(self.spawn_room)]
    }

    pub fn frame(&self) -> &WorldFrame {
        &self.frame
    }

    pub fn world_position(&self, pos: GridPos) -> WorldPos {
        self.frame.world_position(pos)
    }

    pub fn world_size(&self) -> WorldSize {
        self.frame.world_size(self.width, self.height)
    }

    /// Marks a room occupied or free. Returns false when `pos` is off the grid.
    pub fn set_locked(&mut self, pos: GridPos, locked: bool) -> bool {
        if !self.contains(pos) {
            return false;
        }
        let index = self.index(pos);
        self.rooms[index].locked = locked;
        true
    }

    /// Releases every connection, then every room, then the spawn counters
    /// this grid consumed, so the next grid sees every cap unused.
    pub fn destroy(mut self, catalog: &mut RoomCatalog) {
        let connections = self.connections.len();
        self.connections.clear();
        let rooms = self.rooms.len();
        self.rooms.clear();
        catalog.reset_spawn_counts();
        debug!("destroyed grid: {rooms} rooms, {connections} connections");
    }

    /// Stable byte encoding of room typing and connection kinds, for fingerprints.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(40 + self.rooms.len() * 8);
        bytes.extend((self.width as u64).to_le_bytes());
        bytes.extend((self.height as u64).to_le_bytes());
        let exit_room = self.exit_room.unwrap_or(GridPos::new(-1, -1));
        for pos in [self.start_room, exit_room, self.spawn_room] {
            bytes.extend(pos.x.to_le_bytes());
            bytes.extend(pos.y.to_le_bytes());
        }
        for room in &self.rooms {
            bytes.extend(room.profile.code().to_le_bytes());
            for direction in Direction::ALL {
                let kind = self.connection_kind(room.pos, direction);
                bytes.push(kind.map_or(u8::MAX, ConnectionKind::code));
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: GridPos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
