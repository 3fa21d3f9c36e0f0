//! Slimming pipeline for simulation event files.
//!
//! Copies an event container to a new file, dropping a fixed set of per-step
//! fields from the event table and carrying the event-count record across
//! unchanged. Record order and count are preserved; only field membership
//! changes.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use evt_slim::{default_mask, slim_file};
//!
//! let report = slim_file(Path::new("run.evtc"), Path::new("run_slim.evtc"), &default_mask())
//!     .unwrap();
//! println!("kept {} of {} fields", report.fields_out, report.fields_in);
//! ```

pub mod error;
pub mod exclusions;
pub mod mask;
pub mod pipeline;

pub use error::{SlimError, SlimResult};
pub use exclusions::{default_mask, DEFAULT_EXCLUDED_FIELDS};
pub use mask::FieldMask;
pub use pipeline::{slim_file, SlimReport, EVENT_COUNT_OBJECT, TREE_OBJECT};
