// crates/roomfinder-core/src/traits.rs
use crate::common::IndexStats;
use crate::model::Room;

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// The search operations available over a room table.
pub trait RoomSearch {
    fn stats(&self) -> IndexStats;

    /// All rooms, in table order.
    fn rooms(&self) -> &[Room];

    fn find_room_by_id(&self, id: i64) -> Option<&Room>;

    /// Resolve a free-text term to exactly one room.
    ///
    /// The term is normalized with
    /// [`normalize_exact`](crate::text::normalize_exact) and looked up in the
    /// exact-key map, so `"pa5"`, `"PA 05"` and `"pa-05"` all resolve to the
    /// room coded `"PA-05"`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roomfinder_core::prelude::*;
    ///
    /// let index = RoomIndex::load().unwrap();
    /// let room = index.resolve_exact("pa5").expect("PA-05 exists");
    /// assert_eq!(room.code(), "PA-05");
    /// ```
    fn resolve_exact(&self, term: &str) -> Option<&Room>;

    /// Ranked autocomplete candidates for a partially typed code.
    ///
    /// Codes that *start with* the folded query outrank codes that merely
    /// *contain* it; ties are ordered by the original code, ascending. At
    /// most `limit` rooms are returned and an empty query yields nothing.
    fn suggest(&self, query: &str, limit: usize) -> Vec<&Room>;
}
