// crates/roomfinder-core/src/index.rs
use crate::model::{Room, RoomTable};
use crate::text::{normalize_exact, normalize_match};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Read-only lookup structures over the room table.
///
/// Built once at startup and never mutated afterwards. Holds:
/// - the rooms themselves, in table order, for suggestion scanning;
/// - one precomputed autocomplete key per room (same position);
/// - the exact-key map, normalized code -> position in `rooms`.
#[derive(Clone, Debug)]
pub struct RoomIndex {
    pub(crate) rooms: Vec<Room>,
    pub(crate) match_keys: Vec<String>,
    pub(crate) exact: HashMap<String, usize>,
}

impl RoomIndex {
    pub fn new(table: RoomTable) -> Self {
        let rooms = table.rooms;
        let match_keys = rooms.iter().map(|r| normalize_match(&r.code)).collect();

        let mut exact: HashMap<String, usize> = HashMap::with_capacity(rooms.len());
        for (pos, room) in rooms.iter().enumerate() {
            match exact.entry(normalize_exact(&room.code)) {
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                }
                Entry::Occupied(mut slot) => {
                    // Collisions resolve to the lexicographically-first code.
                    let held = &rooms[*slot.get()];
                    warn!(
                        key = %slot.key(),
                        kept = %std::cmp::min(&held.code, &room.code),
                        first = %held.code,
                        second = %room.code,
                        "duplicate normalized room code"
                    );
                    if room.code < held.code {
                        slot.insert(pos);
                    }
                }
            }
        }

        debug!(rooms = rooms.len(), keys = exact.len(), "room index built");
        Self {
            rooms,
            match_keys,
            exact,
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Copy of the underlying table, e.g. for writing a cache.
    pub fn to_table(&self) -> RoomTable {
        RoomTable::from(self.rooms.clone())
    }
}

impl From<RoomTable> for RoomIndex {
    fn from(table: RoomTable) -> Self {
        Self::new(table)
    }
}
