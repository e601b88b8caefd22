// crates/roomfinder-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::common_io;
use super::CACHE_SUFFIX;
use crate::common::IndexStats;
use crate::error::Result;
use crate::index::RoomIndex;
use crate::model::RoomTable;
use crate::traits::RoomSearch;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is on.
    pub fn preferred() -> Self {
        if cfg!(feature = "compact") {
            Self::Gzip
        } else {
            Self::None
        }
    }
}

// -----------------------------------------------------------------------------
// BUILDER
// -----------------------------------------------------------------------------

/// Compile a source JSON into a binary cache at `out_path`.
pub fn build_dataset(
    source_path: &Path,
    out_path: &Path,
    compression: CompressionMode,
) -> Result<IndexStats> {
    info!(
        source = %source_path.display(),
        out = %out_path.display(),
        ?compression,
        "building room dataset"
    );

    let index = RoomIndex::load_raw_json(source_path)?;
    write_generic(out_path, &index.to_table(), compression)?;
    Ok(index.stats())
}

// -----------------------------------------------------------------------------
// RUNTIME HELPER
// -----------------------------------------------------------------------------

impl RoomIndex {
    /// **Smart Load:** Checks cache, loads binary or builds from source.
    pub(super) fn load_via_builder(path: &Path) -> Result<Self> {
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        // 1. Check Cache
        if Self::is_cache_fresh(path, &cache_path) {
            match common_io::read_payload(&cache_path).and_then(|b| Self::from_bytes(&b)) {
                Ok(index) => {
                    debug!(cache = %cache_path.display(), "loaded room cache");
                    return Ok(index);
                }
                Err(e) => warn!(cache = %cache_path.display(), error = %e, "room cache unreadable"),
            }
        }

        // 2. Build
        let index = Self::load_raw_json(path)?;

        // 3. Cache (best effort)
        if let Err(e) = write_generic(&cache_path, &index.to_table(), CompressionMode::preferred())
        {
            debug!(cache = %cache_path.display(), error = %e, "room cache not written");
        }

        Ok(index)
    }

    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_generic(path.as_ref(), &self.to_table(), CompressionMode::preferred())
    }

    fn is_cache_fresh(json_path: &Path, cache_path: &Path) -> bool {
        let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(_) => return false,
        };
        match fs::metadata(json_path).and_then(|m| m.modified()) {
            Ok(json_time) => json_time <= cache_time,
            // Source gone but cache present: use the cache.
            Err(_) => true,
        }
    }
}

// -----------------------------------------------------------------------------
// WRITER
// -----------------------------------------------------------------------------

fn write_generic(path: &Path, table: &RoomTable, compression: CompressionMode) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                bincode::serialize_into(&mut encoder, table)?;
                // `finish` writes the gzip trailer; dropping would swallow its errors.
                writer = encoder.finish()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::RoomError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => bincode::serialize_into(&mut writer, table)?,
    }

    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Room;

    fn table() -> RoomTable {
        RoomTable::from(vec![Room {
            id: 5,
            code: "PA-05".into(),
            latitude: -25.45,
            longitude: -49.23,
            admin_unit: 1,
        }])
    }

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("roomfinder-builder-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_cache_is_a_complete_stream() {
        use flate2::read::GzDecoder;
        use std::io::Read;

        let path = scratch("complete.comp.bin");
        write_generic(&path, &table(), CompressionMode::Gzip).unwrap();

        let raw = fs::read(&path).unwrap();
        // ISIZE trailer: uncompressed length, little endian, last 4 bytes.
        let trailer_len = u32::from_le_bytes(raw[raw.len() - 4..].try_into().unwrap());
        let mut out = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut out).unwrap();
        assert_eq!(trailer_len as usize, out.len());
        assert_eq!(out, bincode::serialize(&table()).unwrap());
    }

    #[test]
    fn plain_cache_matches_bincode() {
        let path = scratch("plain.bin");
        write_generic(&path, &table(), CompressionMode::None).unwrap();
        assert_eq!(fs::read(&path).unwrap(), bincode::serialize(&table()).unwrap());
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let path = scratch("missing-dir").join("nested").join("x.bin");
        assert!(write_generic(&path, &table(), CompressionMode::preferred()).is_err());
    }
}
