//! Single-file binary container of named objects.
//!
//! A container holds zero or more named objects — record-oriented tables and
//! opaque scalar records — in one archive. Payloads are zstd-compressed and
//! CRC-checked per entry; the whole file is sealed with a BLAKE3 checksum.
//!
//! # On-disk format
//!
//! ```text
//! "EVTC" | u32 version
//! entry*:
//!     u8 kind (1 = table, 2 = scalar)
//!     varint name length | name bytes (UTF-8)
//!     varint uncompressed length
//!     varint compressed length
//!     u32 CRC32 of compressed payload
//!     compressed payload (zstd)
//! directory:
//!     u32 entry count
//!     per entry: u8 kind | varint name length | name bytes | u64 offset
//! trailer:
//!     u64 directory offset
//!     32-byte BLAKE3 checksum of all preceding bytes
//! ```
//!
//! All multi-byte integers are big-endian.
//!
//! - **ContainerWriter**: streams entries to disk, then seals the file
//! - **ContainerReader**: validates the seal up front, random access by name

pub mod entry;
pub mod error;
pub mod reader;
pub mod writer;

pub use entry::{EntryInfo, ObjectKind};
pub use error::{ContainerError, ContainerResult};
pub use reader::ContainerReader;
pub use writer::{ContainerSummary, ContainerWriter};
