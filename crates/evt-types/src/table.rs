use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::field::Field;

/// A record-oriented dataset with named fields.
///
/// Fields are ordered. Every field holds exactly one value per record, so all
/// fields have the same length, and field names are unique. The record count
/// is held explicitly so that a table keeps it even with no fields left.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    fields: Vec<Field>,
    n_records: u64,
}

/// Unvalidated mirror of [`Table`]. Deserialization lands here first and is
/// funneled through [`Table::with_record_count`], so decoded tables satisfy
/// the same invariants as constructed ones.
#[derive(Deserialize)]
struct RawTable {
    fields: Vec<Field>,
    n_records: u64,
}

impl TryFrom<RawTable> for Table {
    type Error = TypeError;

    fn try_from(raw: RawTable) -> Result<Self, TypeError> {
        Self::with_record_count(raw.n_records, raw.fields)
    }
}

impl Table {
    /// Build a table from fields, taking the record count from the first field.
    pub fn new(fields: Vec<Field>) -> Result<Self, TypeError> {
        let n_records = fields.first().map_or(0, |f| f.len() as u64);
        Self::with_record_count(n_records, fields)
    }

    /// Build a table with an explicit record count.
    ///
    /// Every field must hold exactly `n_records` values.
    pub fn with_record_count(n_records: u64, fields: Vec<Field>) -> Result<Self, TypeError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(TypeError::DuplicateField(field.name.clone()));
            }
            if field.len() as u64 != n_records {
                return Err(TypeError::FieldLengthMismatch {
                    field: field.name.clone(),
                    expected: n_records,
                    actual: field.len() as u64,
                });
            }
        }
        Ok(Self { fields, n_records })
    }

    /// A table with a record count and no fields.
    pub fn empty(n_records: u64) -> Self {
        Self {
            fields: Vec::new(),
            n_records,
        }
    }

    /// Number of records.
    pub fn n_records(&self) -> u64 {
        self.n_records
    }

    /// Number of fields.
    pub fn n_fields(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the table has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The ordered fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Ordered field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether a field with this name exists.
    pub fn contains_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Clone the table without the named fields.
    ///
    /// Field order, record order, record values, and the record count are
    /// preserved. Names not present in the table are ignored.
    pub fn drop_fields(&self, names: &HashSet<String>) -> Table {
        let fields = self
            .fields
            .iter()
            .filter(|f| !names.contains(&f.name))
            .cloned()
            .collect();
        Self {
            fields,
            n_records: self.n_records,
        }
    }
}
