use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use evt_types::{ScalarRecord, Table};
use tracing::debug;

use crate::entry::ObjectKind;
use crate::error::{ContainerError, ContainerResult};

/// Container file magic.
pub(crate) const MAGIC: &[u8; 4] = b"EVTC";
/// Current container format version.
pub(crate) const VERSION: u32 = 1;
/// Trailer size: u64 directory offset + 32-byte BLAKE3 checksum.
pub(crate) const TRAILER_LEN: usize = 8 + 32;
/// zstd compression level for entry payloads.
const COMPRESSION_LEVEL: i32 = 3;

/// Result of writing a container file.
#[derive(Clone, Debug)]
pub struct ContainerSummary {
    pub path: PathBuf,
    pub object_count: usize,
    pub bytes_written: u64,
    pub checksum: [u8; 32],
}

/// Directory entry recorded while writing.
struct DirEntry {
    name: String,
    kind: ObjectKind,
    offset: u64,
}

/// Streams named objects into a container file.
///
/// `create` writes the header immediately; each `put_*` appends one framed,
/// compressed entry; `finish` writes the directory and trailer, then flushes
/// and syncs. A writer abandoned before `finish` leaves a truncated file.
pub struct ContainerWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    hasher: blake3::Hasher,
    offset: u64,
    entries: Vec<DirEntry>,
    names: HashSet<String>,
}

impl ContainerWriter {
    /// Create (or overwrite) a container file and write its header.
    pub fn create(path: &Path) -> ContainerResult<Self> {
        let file = File::create(path)?;
        let mut writer = Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            hasher: blake3::Hasher::new(),
            offset: 0,
            entries: Vec::new(),
            names: HashSet::new(),
        };
        writer.write_bytes(MAGIC)?;
        writer.write_bytes(&VERSION.to_be_bytes())?;
        Ok(writer)
    }

    /// Append a table under the given name.
    pub fn put_table(&mut self, name: &str, table: &Table) -> ContainerResult<()> {
        let payload = bincode::serialize(table)
            .map_err(|e| ContainerError::Serialization(e.to_string()))?;
        self.put_object(name, ObjectKind::Table, &payload)
    }

    /// Append a scalar record under the given name.
    ///
    /// The payload is the record's raw bytes; nothing is re-encoded, so the
    /// bytes read back are identical to the bytes written.
    pub fn put_scalar(&mut self, name: &str, record: &ScalarRecord) -> ContainerResult<()> {
        self.put_object(name, ObjectKind::Scalar, record.as_bytes())
    }

    /// Number of objects appended so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no objects have been appended.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the directory and trailer, flush, and sync.
    pub fn finish(mut self) -> ContainerResult<ContainerSummary> {
        let dir_offset = self.offset;

        // Directory: count, then (kind, name, offset) per object.
        let mut dir = Vec::new();
        dir.extend_from_slice(&(self.entries.len() as u32).to_be_bytes());
        for entry in &self.entries {
            dir.push(entry.kind.type_byte());
            encode_varint(&mut dir, entry.name.len() as u64);
            dir.extend_from_slice(entry.name.as_bytes());
            dir.extend_from_slice(&entry.offset.to_be_bytes());
        }
        self.write_bytes(&dir)?;

        // Trailer: directory offset, then checksum of everything before it.
        self.write_bytes(&dir_offset.to_be_bytes())?;
        let checksum = *self.hasher.finalize().as_bytes();
        self.writer.write_all(&checksum)?;
        self.offset += checksum.len() as u64;

        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;

        debug!(
            objects = self.entries.len(),
            bytes = self.offset,
            "container finished"
        );
        Ok(ContainerSummary {
            path: self.path,
            object_count: self.entries.len(),
            bytes_written: self.offset,
            checksum,
        })
    }

    fn put_object(&mut self, name: &str, kind: ObjectKind, payload: &[u8]) -> ContainerResult<()> {
        if !self.names.insert(name.to_string()) {
            return Err(ContainerError::DuplicateObject(name.to_string()));
        }
        let offset = self.offset;

        let compressed = zstd::encode_all(payload, COMPRESSION_LEVEL)
            .map_err(|e| ContainerError::CompressionFailed(e.to_string()))?;
        let crc = crc32fast::hash(&compressed);

        let mut buf = Vec::with_capacity(compressed.len() + name.len() + 32);
        buf.push(kind.type_byte());
        encode_varint(&mut buf, name.len() as u64);
        buf.extend_from_slice(name.as_bytes());
        encode_varint(&mut buf, payload.len() as u64);
        encode_varint(&mut buf, compressed.len() as u64);
        buf.extend_from_slice(&crc.to_be_bytes());
        buf.extend_from_slice(&compressed);
        self.write_bytes(&buf)?;

        debug!(
            name = %name,
            kind = %kind,
            raw = payload.len(),
            compressed = compressed.len(),
            "container append"
        );
        self.entries.push(DirEntry {
            name: name.to_string(),
            kind,
            offset,
        });
        Ok(())
    }

    /// Write bytes, updating the running checksum and offset.
    fn write_bytes(&mut self, bytes: &[u8]) -> ContainerResult<()> {
        self.writer.write_all(bytes)?;
        self.hasher.update(bytes);
        self.offset += bytes.len() as u64;
        Ok(())
    }
}

/// Encode a u64 as a variable-length integer.
pub(crate) fn encode_varint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value > 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Decode a variable-length integer. Returns (value, bytes_consumed).
pub(crate) fn decode_varint(data: &[u8]) -> ContainerResult<(u64, usize)> {
    let mut value: u64 = 0;
    let mut shift = 0;
    for (i, &byte) in data.iter().enumerate() {
        value |= ((byte & 0x7F) as u64) << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
        if shift >= 64 {
            return Err(ContainerError::CorruptEntry {
                offset: 0,
                reason: "varint overflow".into(),
            });
        }
    }
    Err(ContainerError::CorruptEntry {
        offset: 0,
        reason: "truncated varint".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varint_roundtrip_small() {
        let mut buf = Vec::new();
        encode_varint(&mut buf, 42);
        let (val, consumed) = decode_varint(&buf).unwrap();
        assert_eq!(val, 42);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn varint_roundtrip_large() {
        let mut buf = Vec::new();
        encode_varint(&mut buf, 300_000);
        let (val, consumed) = decode_varint(&buf).unwrap();
        assert_eq!(val, 300_000);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn varint_zero() {
        let mut buf = Vec::new();
        encode_varint(&mut buf, 0);
        let (val, consumed) = decode_varint(&buf).unwrap();
        assert_eq!(val, 0);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn varint_max_u64() {
        let mut buf = Vec::new();
        encode_varint(&mut buf, u64::MAX);
        assert_eq!(buf.len(), 10);
        let (val, _) = decode_varint(&buf).unwrap();
        assert_eq!(val, u64::MAX);
    }

    #[test]
    fn decode_varint_truncated() {
        let err = decode_varint(&[0x80]).unwrap_err();
        assert!(matches!(err, ContainerError::CorruptEntry { .. }));
    }
}
