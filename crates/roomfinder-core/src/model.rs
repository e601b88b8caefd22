// crates/roomfinder-core/src/model.rs
use crate::common::LatLng;
use crate::error::{Result, RoomError};
use serde::{Deserialize, Serialize};

/// Raw room record as it comes from the source JSON:
/// {
///   "id_sala": 5,
///   "n_sala": "PA-05",
///   "latitude": -25.450223,
///   "longitude": -49.233239,
///   "unidade_adm": 1
/// }
/// We do *not* expose this type from the public API.
#[derive(Debug, Deserialize)]
pub(crate) struct RoomRaw {
    pub id_sala: i64,
    pub n_sala: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub unidade_adm: i64,
}

/// Top-level shape of the source document.
#[derive(Debug, Deserialize)]
pub(crate) struct DatasetRaw {
    #[serde(default)]
    pub salas: Vec<RoomRaw>,
}

/// A room on the campus map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    /// Display identifier, e.g. `"PA-05"`.
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Opaque grouping id. Not used by ranking.
    pub admin_unit: i64,
}

impl Room {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// The static room table. This is the unit written to and read from the
/// binary cache; the lookup structures are rebuilt from it on load.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoomTable {
    pub rooms: Vec<Room>,
}

impl RoomTable {
    /// Parse the source JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_str(json)?;
        from_raw(raw)
    }

    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_reader(reader)?;
        from_raw(raw)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl From<Vec<Room>> for RoomTable {
    fn from(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }
}

/// **Standard Converter:** Raw -> Domain.
///
/// Rejects records whose coordinates are not valid map coordinates; codes
/// and ids are taken as-is (uniqueness is a data-quality assumption).
pub(crate) fn from_raw(raw: DatasetRaw) -> Result<RoomTable> {
    let mut rooms = Vec::with_capacity(raw.salas.len());

    for r in raw.salas {
        let pos = LatLng::new(r.latitude, r.longitude);
        if !pos.is_valid() {
            return Err(RoomError::InvalidData(format!(
                "room {} ({}) has invalid coordinates {}, {}",
                r.id_sala, r.n_sala, r.latitude, r.longitude
            )));
        }
        rooms.push(Room {
            id: r.id_sala,
            code: r.n_sala,
            latitude: r.latitude,
            longitude: r.longitude,
            admin_unit: r.unidade_adm,
        });
    }

    Ok(RoomTable { rooms })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_document() {
        let json = r#"{"salas":[{"id_sala":1,"n_sala":"PA-01","latitude":-25.45,"longitude":-49.23,"unidade_adm":3}]}"#;
        let table = RoomTable::from_json_str(json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rooms[0].code(), "PA-01");
        assert_eq!(table.rooms[0].admin_unit, 3);
    }

    #[test]
    fn missing_salas_is_an_empty_table() {
        let table = RoomTable::from_json_str("{}").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let json = r#"{"salas":[{"id_sala":1,"n_sala":"PA-01","latitude":-125.0,"longitude":-49.23}]}"#;
        let err = RoomTable::from_json_str(json).unwrap_err();
        assert!(matches!(err, RoomError::InvalidData(_)));
    }
}
