//! Snapshot codec
//!
//! Framing around a bincode payload: magic, version, length and CRC32.

use crate::error::{RegistrarError, Result};

use super::Snapshot;

/// File magic
pub const MAGIC: &[u8; 4] = b"RGSN";

/// Current format version
pub const VERSION: u16 = 1;

/// Header size: magic (4) + version (2) + payload_len (4) + crc (4)
pub const HEADER_SIZE: usize = 14;

/// Encode a snapshot to framed bytes
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>> {
    let payload = bincode::serialize(snapshot)?;

    let payload_len = u32::try_from(payload.len()).map_err(|_| {
        RegistrarError::Serialization(format!("Snapshot too large: {} bytes", payload.len()))
    })?;
    let crc = crc32fast::hash(&payload);

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&VERSION.to_le_bytes());
    bytes.extend_from_slice(&payload_len.to_le_bytes());
    bytes.extend_from_slice(&crc.to_le_bytes());
    bytes.extend_from_slice(&payload);

    Ok(bytes)
}

/// Decode framed bytes, validating magic, version, length and CRC
pub fn decode_snapshot(bytes: &[u8]) -> Result<Snapshot> {
    if bytes.len() < HEADER_SIZE {
        return Err(RegistrarError::SnapshotCorruption(format!(
            "Incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    if &bytes[0..4] != MAGIC {
        return Err(RegistrarError::SnapshotCorruption(format!(
            "Invalid magic: expected RGSN, got {:?}",
            &bytes[0..4]
        )));
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != VERSION {
        return Err(RegistrarError::SnapshotCorruption(format!(
            "Unsupported snapshot version: {}",
            version
        )));
    }

    let payload_len = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]) as usize;
    let stored_crc = u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]);

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != payload_len {
        return Err(RegistrarError::SnapshotCorruption(format!(
            "Payload length mismatch: header says {}, found {}",
            payload_len,
            payload.len()
        )));
    }

    let computed_crc = crc32fast::hash(payload);
    if computed_crc != stored_crc {
        return Err(RegistrarError::SnapshotCorruption(format!(
            "CRC mismatch: stored {:#010x}, computed {:#010x}",
            stored_crc, computed_crc
        )));
    }

    Ok(bincode::deserialize(payload)?)
}
