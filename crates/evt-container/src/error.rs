use thiserror::Error;

use crate::entry::ObjectKind;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("invalid container magic: expected {expected}, got {actual}")]
    InvalidMagic { expected: String, actual: String },

    #[error("unsupported container version: {0}")]
    UnsupportedVersion(u32),

    #[error("container checksum mismatch")]
    ChecksumMismatch,

    #[error("CRC32 mismatch for object {name}")]
    CrcMismatch { name: String },

    #[error("corrupt container entry at offset {offset}: {reason}")]
    CorruptEntry { offset: u64, reason: String },

    #[error("object {name} is a {actual}, expected a {expected}")]
    KindMismatch {
        name: String,
        expected: ObjectKind,
        actual: ObjectKind,
    },

    #[error("duplicate object name: {0}")]
    DuplicateObject(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("compression failed: {0}")]
    CompressionFailed(String),

    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ContainerResult<T> = Result<T, ContainerError>;
