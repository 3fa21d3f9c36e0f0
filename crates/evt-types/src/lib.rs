//! Foundation types for the event-file toolkit.
//!
//! This crate provides the record-oriented data model shared by the container
//! format and the slimming pipeline. Every other crate in the workspace
//! depends on `evt-types`.
//!
//! # Key Types
//!
//! - [`Table`] — an ordered collection of named, typed fields, one value per
//!   record
//! - [`Field`] — one named column of a table
//! - [`FieldData`] — typed column storage (`Int`, `Float`, `Str`)
//! - [`ScalarRecord`] — a single opaque metadata payload stored alongside a
//!   table

pub mod error;
pub mod field;
pub mod scalar;
pub mod table;

pub use error::TypeError;
pub use field::{Field, FieldData, FieldType};
pub use scalar::ScalarRecord;
pub use table::Table;
