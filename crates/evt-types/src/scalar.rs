use serde::{Deserialize, Serialize};

/// A single scalar metadata object stored alongside a table.
///
/// The payload is opaque: it is carried and copied byte-for-byte, never
/// interpreted by this toolkit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarRecord {
    /// Raw payload bytes.
    pub data: Vec<u8>,
}

impl ScalarRecord {
    /// Create a scalar record from raw bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// The raw payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
