use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of object stored in a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// A record-oriented table with named fields.
    Table,
    /// An opaque scalar metadata record.
    Scalar,
}

impl ObjectKind {
    /// Serialize to a type byte for the container format.
    pub fn type_byte(&self) -> u8 {
        match self {
            Self::Table => 1,
            Self::Scalar => 2,
        }
    }

    /// Parse from a type byte.
    pub fn from_type_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::Table),
            2 => Some(Self::Scalar),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Scalar => write!(f, "scalar"),
        }
    }
}

/// Public info about one named object in a container directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryInfo {
    /// Object name.
    pub name: String,
    /// Object kind.
    pub kind: ObjectKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_byte_roundtrip_table() {
        let kind = ObjectKind::Table;
        assert_eq!(kind.type_byte(), 1);
        assert_eq!(ObjectKind::from_type_byte(1), Some(kind));
    }

    #[test]
    fn type_byte_roundtrip_scalar() {
        let kind = ObjectKind::Scalar;
        assert_eq!(kind.type_byte(), 2);
        assert_eq!(ObjectKind::from_type_byte(2), Some(kind));
    }

    #[test]
    fn from_type_byte_unknown() {
        assert!(ObjectKind::from_type_byte(0).is_none());
        assert!(ObjectKind::from_type_byte(3).is_none());
        assert!(ObjectKind::from_type_byte(255).is_none());
    }

    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", ObjectKind::Table), "table");
        assert_eq!(format!("{}", ObjectKind::Scalar), "scalar");
    }
}
