use std::fmt;

use serde::{Deserialize, Serialize};

/// The element type of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// 64-bit signed integers.
    Int,
    /// 64-bit floating point values.
    Float,
    /// UTF-8 strings.
    Str,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Str => write!(f, "str"),
        }
    }
}

/// Column storage for a field: one value per record, all of one type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldData {
    /// Integer column.
    Int(Vec<i64>),
    /// Float column.
    Float(Vec<f64>),
    /// String column.
    Str(Vec<String>),
}

impl FieldData {
    /// Number of records in the column.
    pub fn len(&self) -> usize {
        match self {
            Self::Int(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Str(v) => v.len(),
        }
    }

    /// Returns `true` if the column holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element type of this column.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Int(_) => FieldType::Int,
            Self::Float(_) => FieldType::Float,
            Self::Str(_) => FieldType::Str,
        }
    }
}

/// One named column of a table (a branch), holding one value per record.
///
/// The name is the field's identity; names are unique within a table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Typed per-record values.
    pub data: FieldData,
}

impl Field {
    /// Create a field from a name and typed column data.
    pub fn new(name: impl Into<String>, data: FieldData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Create an integer field.
    pub fn int(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self::new(name, FieldData::Int(values))
    }

    /// Create a float field.
    pub fn float(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, FieldData::Float(values))
    }

    /// Create a string field.
    pub fn str(name: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(name, FieldData::Str(values))
    }

    /// Number of records in the field.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the field holds no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The element type of this field.
    pub fn field_type(&self) -> FieldType {
        self.data.field_type()
    }
}
