//! Symmetric pair lookup for designer-authored connection records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::types::{ConnectionKind, GridPos};

/// One designer-authored connection between two rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub a: GridPos,
    pub b: GridPos,
    pub kind: ConnectionKind,
}

impl ConnectionRecord {
    pub const fn new(a: GridPos, b: GridPos, kind: ConnectionKind) -> Self {
        Self { a, b, kind }
    }
}

/// Unordered coordinate pair: the smaller coordinate always comes first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct PairKey(GridPos, GridPos);

impl PairKey {
    fn new(a: GridPos, b: GridPos) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

/// Connection data keyed by unordered room pair.
///
/// Built fresh for every generation pass, so nothing from a previous grid can
/// leak into the next one.
#[derive(Clone, Debug, Default)]
pub struct ConnectionRegistry {
    entries: HashMap<PairKey, ConnectionKind>,
}

impl ConnectionRegistry {
    /// Repeating a pair with the same kind is a no-op. Repeating it with a
    /// different kind is rejected, since the winner would depend on record order.
    pub fn build(records: &[ConnectionRecord]) -> Result<Self, GenerationError> {
        let mut entries = HashMap::with_capacity(records.len());
        for record in records {
            let key = PairKey::new(record.a, record.b);
            match entries.get(&key) {
                Some(&existing) if existing != record.kind => {
                    return Err(GenerationError::ConflictingConnection {
                        a: key.0,
                        b: key.1,
                        existing,
                        requested: record.kind,
                    });
                }
                Some(_) => {}
                None => {
                    entries.insert(key, record.kind);
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, a: GridPos, b: GridPos) -> Option<ConnectionKind> {
        self.entries.get(&PairKey::new(a, b)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered pairs, each reported once with the smaller coordinate first.
    pub fn pairs(&self) -> impl Iterator<Item = (GridPos, GridPos, ConnectionKind)> + '_ {
        self.entries.iter().map(|(key, &kind)| (key.0, key.1, kind))
    }
}
