// crates/roomfinder-core/src/search.rs
use crate::common::IndexStats;
use crate::index::RoomIndex;
use crate::model::Room;
use crate::text::{normalize_exact, normalize_match};
use crate::traits::{RoomSearch, DEFAULT_SUGGESTION_LIMIT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::trace;

/// Two-tier autocomplete score. Prefix beats substring; nothing else counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchScore {
    Contains = 1,
    Prefix = 2,
}

impl MatchScore {
    /// Score an already-folded key against an already-folded query.
    pub fn of(key: &str, query: &str) -> Option<Self> {
        if key.starts_with(query) {
            Some(Self::Prefix)
        } else if key.contains(query) {
            Some(Self::Contains)
        } else {
            None
        }
    }
}

impl RoomSearch for RoomIndex {
    fn stats(&self) -> IndexStats {
        let admin_units: HashSet<i64> = self.rooms.iter().map(|r| r.admin_unit).collect();
        IndexStats {
            rooms: self.rooms.len(),
            admin_units: admin_units.len(),
            exact_keys: self.exact.len(),
        }
    }

    fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    fn find_room_by_id(&self, id: i64) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    fn resolve_exact(&self, term: &str) -> Option<&Room> {
        let key = normalize_exact(term);
        let hit = self.exact.get(&key).map(|&pos| &self.rooms[pos]);
        trace!(%key, found = hit.is_some(), "exact lookup");
        hit
    }

    fn suggest(&self, query: &str, limit: usize) -> Vec<&Room> {
        let q = normalize_match(query);
        if q.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(MatchScore, &Room)> = self
            .match_keys
            .iter()
            .zip(&self.rooms)
            .filter_map(|(key, room)| MatchScore::of(key, &q).map(|s| (s, room)))
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.code.cmp(&b.1.code)));
        scored.truncate(limit);
        scored.into_iter().map(|(_, room)| room).collect()
    }
}

/// One row of the autocomplete dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Unique row key (the room id).
    pub key: String,
    /// Text shown in the list.
    pub label: String,
    /// Value committed when the row is chosen.
    pub value: String,
}

impl From<&Room> for Suggestion {
    fn from(room: &Room) -> Self {
        Self {
            key: room.id.to_string(),
            label: room.code.clone(),
            value: room.code.clone(),
        }
    }
}

/// Exact and ranked lookups over a shared [`RoomIndex`].
///
/// Cheap to clone; every search box that offers suggestions holds one.
#[derive(Clone, Debug)]
pub struct SearchResolver {
    index: Arc<RoomIndex>,
    limit: usize,
}

impl SearchResolver {
    pub fn new(index: Arc<RoomIndex>) -> Self {
        Self {
            index,
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn index(&self) -> &RoomIndex {
        &self.index
    }

    pub fn resolve_exact(&self, term: &str) -> Option<&Room> {
        self.index.resolve_exact(term)
    }

    pub fn suggest(&self, query: &str) -> Vec<&Room> {
        self.index.suggest(query, self.limit)
    }

    /// Suggestions shaped for the dropdown.
    pub fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        self.suggest(query).into_iter().map(Suggestion::from).collect()
    }
}
