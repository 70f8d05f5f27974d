//! Save payload encoding
//!
//! MessagePack with field names, LZ4 compressed (size prepended), with a
//! trailing SHA-256 checksum over the compressed payload. Field names
//! keep the format tolerant of added fields; the version number guards
//! against loading saves from a newer format.

use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};

use super::error::StoreError;
use crate::session::SessionData;

pub const SAVE_VERSION: u32 = 1;

const CHECKSUM_LEN: usize = 32;

/// Everything the engine persists for one player
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DifficultySave {
    /// Save format version for migration
    pub version: u32,

    /// Save timestamp (unix milliseconds)
    pub timestamp: i64,

    /// Current difficulty, `None` until the first update persists one
    pub difficulty: Option<f32>,

    /// Session/behavior record
    pub session: SessionData,
}

impl Default for DifficultySave {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultySave {
    pub fn new() -> Self {
        Self {
            version: SAVE_VERSION,
            timestamp: current_timestamp(),
            difficulty: None,
            session: SessionData::default(),
        }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }
}

/// Serialize and compress a save payload
pub fn serialize_and_compress(save: &DifficultySave) -> Result<Vec<u8>, StoreError> {
    let msgpack = to_vec_named(save).map_err(StoreError::Serialization)?;

    let compressed = compress_prepend_size(&msgpack);

    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize a save payload
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<DifficultySave, StoreError> {
    // Minimum: 4-byte size prefix + checksum
    if bytes.len() < 4 + CHECKSUM_LEN {
        return Err(StoreError::Corrupted);
    }

    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - CHECKSUM_LEN);

    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated = hasher.finalize();

    if &calculated[..] != checksum_bytes {
        return Err(StoreError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| StoreError::Decompression)?;

    let save: DifficultySave = from_slice(&msgpack).map_err(StoreError::Deserialization)?;

    if save.version > SAVE_VERSION {
        return Err(StoreError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    Ok(save)
}

pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let mut save = DifficultySave::new();
        save.difficulty = Some(6.5);
        save.session.record_win();
        save.session.record_win();

        let bytes = serialize_and_compress(&save).unwrap();
        let loaded = decompress_and_deserialize(&bytes).unwrap();

        assert_eq!(loaded, save);
    }

    #[test]
    fn test_checksum_validation() {
        let save = DifficultySave::new();
        let mut bytes = serialize_and_compress(&save).unwrap();

        if let Some(last) = bytes.last_mut() {
            *last = last.wrapping_add(1);
        }

        assert!(matches!(
            decompress_and_deserialize(&bytes),
            Err(StoreError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_truncated_data_rejected() {
        assert!(matches!(
            decompress_and_deserialize(&[0u8; 10]),
            Err(StoreError::Corrupted)
        ));
    }

    #[test]
    fn test_newer_version_rejected() {
        let mut save = DifficultySave::new();
        save.version = SAVE_VERSION + 1;
        let bytes = serialize_and_compress(&save).unwrap();

        assert!(matches!(
            decompress_and_deserialize(&bytes),
            Err(StoreError::VersionMismatch { .. })
        ));
    }
}
