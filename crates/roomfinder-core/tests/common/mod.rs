#![allow(dead_code)]

use roomfinder_core::{Room, RoomIndex, RoomTable};
use std::sync::Arc;

pub fn room(id: i64, code: &str, lat: f64, lng: f64) -> Room {
    Room {
        id,
        code: code.to_owned(),
        latitude: lat,
        longitude: lng,
        admin_unit: 1,
    }
}

/// Small index with distinct coordinates per room.
pub fn index_of(codes: &[&str]) -> Arc<RoomIndex> {
    let rooms = codes
        .iter()
        .enumerate()
        .map(|(i, code)| room(i as i64 + 1, code, -25.45 + i as f64 * 0.001, -49.23))
        .collect::<Vec<_>>();
    Arc::new(RoomIndex::new(RoomTable::from(rooms)))
}

/// PA-01 .. PA-12 plus a few rooms from other buildings.
pub fn campus() -> Arc<RoomIndex> {
    let mut codes: Vec<String> = (1..=12).map(|n| format!("PA-{n:02}")).collect();
    codes.extend(["PB-05", "LAB-10", "AUD-01"].map(String::from));
    let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
    index_of(&refs)
}
