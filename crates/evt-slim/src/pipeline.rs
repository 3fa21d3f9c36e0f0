use std::path::Path;

use evt_container::{ContainerReader, ContainerWriter};
use tracing::{debug, info};

use crate::error::{SlimError, SlimResult};
use crate::mask::FieldMask;

/// Name of the event table inside a container.
pub const TREE_OBJECT: &str = "fTree";

/// Name of the event-count record inside a container.
pub const EVENT_COUNT_OBJECT: &str = "NumberOfEvents";

/// Outcome of one slimming run.
#[derive(Clone, Debug)]
pub struct SlimReport {
    /// Records in the table, identical before and after slimming.
    pub n_records: u64,
    /// Fields in the input table.
    pub fields_in: usize,
    /// Fields kept in the output table.
    pub fields_out: usize,
    /// Names of the fields removed, in input table order.
    pub dropped: Vec<String>,
    /// Size of the finished output container in bytes.
    pub bytes_written: u64,
}

/// Copy the event file at `input` to `output` without the masked fields.
///
/// The event-count record is required and is carried across byte-for-byte;
/// the event table is required and keeps every record, in order, for each
/// field the mask does not exclude. Both objects are loaded and validated
/// before the output file is created, so a failed run leaves no output
/// behind, and the input is released before the first output write.
pub fn slim_file(input: &Path, output: &Path, mask: &FieldMask) -> SlimResult<SlimReport> {
    let reader = ContainerReader::open(input)?;
    let event_count = reader
        .read_scalar(EVENT_COUNT_OBJECT)?
        .ok_or_else(|| SlimError::MissingEventCount(EVENT_COUNT_OBJECT.to_string()))?;
    let table = reader
        .read_table(TREE_OBJECT)?
        .ok_or_else(|| SlimError::MissingTable(TREE_OBJECT.to_string()))?;
    debug!(
        input = %input.display(),
        records = table.n_records(),
        fields = table.n_fields(),
        "input loaded"
    );

    let dropped: Vec<String> = table
        .fields()
        .iter()
        .filter(|f| mask.is_excluded(&f.name))
        .map(|f| f.name.clone())
        .collect();
    let slimmed = mask.apply(&table);
    drop(reader);

    let mut writer = ContainerWriter::create(output)?;
    writer.put_table(TREE_OBJECT, &slimmed)?;
    writer.put_scalar(EVENT_COUNT_OBJECT, &event_count)?;
    let summary = writer.finish()?;

    info!(
        output = %output.display(),
        records = slimmed.n_records(),
        kept = slimmed.n_fields(),
        dropped = dropped.len(),
        bytes = summary.bytes_written,
        "slimmed event file written"
    );
    Ok(SlimReport {
        n_records: slimmed.n_records(),
        fields_in: table.n_fields(),
        fields_out: slimmed.n_fields(),
        dropped,
        bytes_written: summary.bytes_written,
    })
}
