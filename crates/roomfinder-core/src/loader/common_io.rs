// crates/roomfinder-core/src/loader/common_io.rs
use crate::error::{Result, RoomError};
use std::path::{Path, PathBuf};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read a file fully, inflating it first if it is gzip data.
pub fn read_payload(path: &Path) -> Result<Vec<u8>> {
    let raw = std::fs::read(path).map_err(|e| {
        RoomError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    inflate(raw)
}

/// Pass plain bytes through; decompress gzip bytes.
pub fn inflate(raw: Vec<u8>) -> Result<Vec<u8>> {
    if !raw.starts_with(&GZIP_MAGIC) {
        return Ok(raw);
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        use std::io::Read;

        let mut out = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut out)?;
        Ok(out)
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(RoomError::InvalidData(
            "gzip input but 'compact' disabled".into(),
        ))
    }
}

/// `classrooms.json` -> `classrooms.json.<suffix>`, next to the source.
pub fn get_cache_path(json_path: &Path, suffix: &str) -> PathBuf {
    let filename = json_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{filename}.{suffix}"))
}

/// Binary caches end in `.bin`; everything else is treated as JSON.
pub fn is_binary(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}
