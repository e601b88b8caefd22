// crates/roomfinder-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! payload parsers (bincode cache vs source JSON).

use crate::error::Result;
use crate::index::RoomIndex;
use crate::model::RoomTable;
use bincode::Options;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub mod common_io;

#[cfg(feature = "builder")]
pub mod builder;

/// Single in-process cache so the default dataset is parsed once.
static ROOM_INDEX_CACHE: OnceCell<Arc<RoomIndex>> = OnceCell::new();

/// Upper bound for a bincode payload; the campus table is a few KiB.
const MAX_PAYLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";

impl RoomIndex {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "classrooms.json"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Load the bundled dataset, once per process.
    pub fn load_shared() -> Result<Arc<Self>> {
        ROOM_INDEX_CACHE
            .get_or_try_init(|| Self::load_from_path(Self::default_dataset_path()).map(Arc::new))
            .cloned()
    }

    /// Owned copy of the bundled dataset.
    pub fn load() -> Result<Self> {
        Self::load_shared().map(|idx| idx.as_ref().clone())
    }

    /// Load from a source JSON (`.json` / `.json.gz`) or a binary cache
    /// (`*.bin`, plain or gzip).
    ///
    /// With the `builder` feature, JSON sources go through the cache: a
    /// fresh `<file>.<CACHE_SUFFIX>` next to the source is preferred and
    /// rewritten when stale.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if common_io::is_binary(path) {
            let bytes = common_io::read_payload(path)?;
            return Self::from_bytes(&bytes);
        }

        #[cfg(feature = "builder")]
        {
            Self::load_via_builder(path)
        }

        #[cfg(not(feature = "builder"))]
        {
            Self::load_raw_json(path)
        }
    }

    /// Parse a source JSON file directly, bypassing any cache.
    pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = common_io::read_payload(path)?;
        let table = RoomTable::from_json_reader(bytes.as_slice())?;
        debug!(path = %path.display(), rooms = table.len(), "parsed source json");
        Ok(Self::new(table))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        RoomTable::from_json_str(json).map(Self::new)
    }

    /// Rebuild the index from a serialized [`RoomTable`] (bincode, optionally
    /// gzip-compressed).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let data = common_io::inflate(data.to_vec())?;
        let table: RoomTable = bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_limit(MAX_PAYLOAD_BYTES)
            .allow_trailing_bytes()
            .deserialize(&data)?;
        Ok(Self::new(table))
    }
}
