use std::collections::HashMap;
use std::path::Path;

use evt_types::{ScalarRecord, Table};
use tracing::debug;

use crate::entry::{EntryInfo, ObjectKind};
use crate::error::{ContainerError, ContainerResult};
use crate::writer::{decode_varint, MAGIC, TRAILER_LEN, VERSION};

/// Reads named objects from a container file.
///
/// The whole file is read into memory on open. Magic, version, and the
/// BLAKE3 trailer are validated before the directory is parsed; per-entry
/// CRC32 checks run when an object is read.
#[derive(Debug)]
pub struct ContainerReader {
    data: Vec<u8>,
    entries: Vec<EntryInfo>,
    offsets: HashMap<String, u64>,
    dir_offset: u64,
}

impl ContainerReader {
    /// Open a container file from disk.
    pub fn open(path: &Path) -> ContainerResult<Self> {
        let data = std::fs::read(path)?;
        let reader = Self::from_bytes(data)?;
        debug!(
            path = %path.display(),
            objects = reader.entries.len(),
            "container opened"
        );
        Ok(reader)
    }

    /// Open from raw bytes.
    pub fn from_bytes(data: Vec<u8>) -> ContainerResult<Self> {
        // Header, empty directory, and trailer make the smallest valid file.
        if data.len() < 8 + 4 + TRAILER_LEN {
            return Err(ContainerError::CorruptEntry {
                offset: 0,
                reason: "container too short".into(),
            });
        }
        if &data[0..4] != MAGIC {
            return Err(ContainerError::InvalidMagic {
                expected: String::from_utf8_lossy(MAGIC).into(),
                actual: String::from_utf8_lossy(&data[0..4]).into(),
            });
        }
        let version = u32::from_be_bytes(data[4..8].try_into().unwrap());
        if version != VERSION {
            return Err(ContainerError::UnsupportedVersion(version));
        }

        let checksum_start = data.len() - 32;
        let actual = blake3::hash(&data[..checksum_start]);
        if actual.as_bytes()[..] != data[checksum_start..] {
            return Err(ContainerError::ChecksumMismatch);
        }

        let trailer_start = data.len() - TRAILER_LEN;
        let dir_offset =
            u64::from_be_bytes(data[trailer_start..trailer_start + 8].try_into().unwrap());
        if dir_offset < 8 || dir_offset as usize >= trailer_start {
            return Err(ContainerError::CorruptEntry {
                offset: dir_offset,
                reason: "directory offset out of range".into(),
            });
        }

        let mut cursor = Cursor::new(&data[..trailer_start], dir_offset as usize);
        let count = cursor.read_u32()? as usize;
        // Smallest directory entry: kind byte, one-byte name length, u64 offset.
        let dir_bytes = trailer_start - dir_offset as usize - 4;
        if count > dir_bytes / 10 {
            return Err(ContainerError::CorruptEntry {
                offset: dir_offset,
                reason: format!("directory count {count} exceeds directory size"),
            });
        }
        let mut entries = Vec::with_capacity(count);
        let mut offsets = HashMap::with_capacity(count);
        for _ in 0..count {
            let kind_byte = cursor.read_u8()?;
            let kind = ObjectKind::from_type_byte(kind_byte).ok_or_else(|| {
                ContainerError::CorruptEntry {
                    offset: dir_offset,
                    reason: format!("unknown kind byte: {kind_byte}"),
                }
            })?;
            let name = cursor.read_name()?;
            let offset = cursor.read_u64()?;
            offsets.insert(name.clone(), offset);
            entries.push(EntryInfo { name, kind });
        }

        Ok(Self {
            data,
            entries,
            offsets,
            dir_offset,
        })
    }

    /// Named objects in write order.
    pub fn entries(&self) -> &[EntryInfo] {
        &self.entries
    }

    /// Object names in write order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Check containment.
    pub fn contains(&self, name: &str) -> bool {
        self.offsets.contains_key(name)
    }

    /// Object count.
    pub fn object_count(&self) -> usize {
        self.entries.len()
    }

    /// Read a table by name. Returns `Ok(None)` if no such object exists.
    pub fn read_table(&self, name: &str) -> ContainerResult<Option<Table>> {
        let (kind, payload) = match self.read_raw(name)? {
            Some(v) => v,
            None => return Ok(None),
        };
        if kind != ObjectKind::Table {
            return Err(ContainerError::KindMismatch {
                name: name.to_string(),
                expected: ObjectKind::Table,
                actual: kind,
            });
        }
        let table = bincode::deserialize(&payload)
            .map_err(|e| ContainerError::Serialization(e.to_string()))?;
        Ok(Some(table))
    }

    /// Read a scalar record by name. Returns `Ok(None)` if no such object
    /// exists. The returned payload is byte-identical to what was written.
    pub fn read_scalar(&self, name: &str) -> ContainerResult<Option<ScalarRecord>> {
        let (kind, payload) = match self.read_raw(name)? {
            Some(v) => v,
            None => return Ok(None),
        };
        if kind != ObjectKind::Scalar {
            return Err(ContainerError::KindMismatch {
                name: name.to_string(),
                expected: ObjectKind::Scalar,
                actual: kind,
            });
        }
        Ok(Some(ScalarRecord::new(payload)))
    }

    fn read_raw(&self, name: &str) -> ContainerResult<Option<(ObjectKind, Vec<u8>)>> {
        let offset = match self.offsets.get(name) {
            Some(o) => *o,
            None => return Ok(None),
        };
        let body = &self.data[..self.dir_offset as usize];
        if offset as usize >= body.len() {
            return Err(ContainerError::CorruptEntry {
                offset,
                reason: "entry offset beyond directory".into(),
            });
        }
        let mut cursor = Cursor::new(body, offset as usize);

        let kind_byte = cursor.read_u8()?;
        let kind = ObjectKind::from_type_byte(kind_byte).ok_or_else(|| {
            ContainerError::CorruptEntry {
                offset,
                reason: format!("unknown kind byte: {kind_byte}"),
            }
        })?;
        let entry_name = cursor.read_name()?;
        if entry_name != name {
            return Err(ContainerError::CorruptEntry {
                offset,
                reason: format!("directory names {name}, entry names {entry_name}"),
            });
        }
        let uncompressed_len = cursor.read_varint()?;
        let compressed_len = cursor.read_varint()? as usize;
        let expected_crc = cursor.read_u32()?;
        let compressed = cursor.read_bytes(compressed_len)?;

        let actual_crc = crc32fast::hash(compressed);
        if actual_crc != expected_crc {
            return Err(ContainerError::CrcMismatch {
                name: name.to_string(),
            });
        }

        let payload = zstd::decode_all(compressed)
            .map_err(|e| ContainerError::DecompressionFailed(e.to_string()))?;
        if payload.len() as u64 != uncompressed_len {
            return Err(ContainerError::CorruptEntry {
                offset,
                reason: format!(
                    "size mismatch: expected {uncompressed_len}, got {}",
                    payload.len()
                ),
            });
        }
        Ok(Some((kind, payload)))
    }
}

/// Bounds-checked cursor over container bytes.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    fn read_bytes(&mut self, n: usize) -> ContainerResult<&'a [u8]> {
        if n > self.data.len().saturating_sub(self.pos) {
            return Err(ContainerError::CorruptEntry {
                offset: self.pos as u64,
                reason: "unexpected end of data".into(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u8(&mut self) -> ContainerResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    fn read_u32(&mut self) -> ContainerResult<u32> {
        Ok(u32::from_be_bytes(self.read_bytes(4)?.try_into().unwrap()))
    }

    fn read_u64(&mut self) -> ContainerResult<u64> {
        Ok(u64::from_be_bytes(self.read_bytes(8)?.try_into().unwrap()))
    }

    fn read_varint(&mut self) -> ContainerResult<u64> {
        let (value, consumed) = decode_varint(&self.data[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    fn read_name(&mut self) -> ContainerResult<String> {
        let len = self.read_varint()? as usize;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ContainerError::CorruptEntry {
            offset: self.pos as u64,
            reason: "object name is not valid UTF-8".into(),
        })
    }
}
