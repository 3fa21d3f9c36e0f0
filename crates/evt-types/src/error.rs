use thiserror::Error;

/// Errors produced by table construction and validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("field {field} holds {actual} values, expected {expected}")]
    FieldLengthMismatch {
        field: String,
        expected: u64,
        actual: u64,
    },

    #[error("duplicate field name: {0}")]
    DuplicateField(String),
}
