use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the room index.
///
/// Returned by [`RoomSearch::stats`](crate::traits::RoomSearch::stats), these
/// counts reflect the materialized in-memory index, so `exact_keys` drops
/// below `rooms` when two codes collapse onto the same normalized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub rooms: usize,
    pub admin_units: usize,
    pub exact_keys: usize,
}

/// A map coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` for finite values inside the WGS84 lat/lng ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}
