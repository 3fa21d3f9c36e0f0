use crate::mask::FieldMask;

/// Per-step bookkeeping fields stripped from slimmed event files.
///
/// Volume and process names, total track lengths, and momentum components
/// under both the `eventPrimaries` and `eventSteps` namespaces. These account
/// for most of the on-disk size of a raw simulation file and are not used by
/// downstream analysis.
pub const DEFAULT_EXCLUDED_FIELDS: [&str; 12] = [
    "eventPrimaries.fSteps.fPhysVolName",
    "eventPrimaries.fSteps.fProcessName",
    "eventPrimaries.fSteps.fTotalTrackLength",
    "eventPrimaries.fSteps.fPx",
    "eventPrimaries.fSteps.fPy",
    "eventPrimaries.fSteps.fPz",
    "eventSteps.fSteps.fPhysVolName",
    "eventSteps.fSteps.fProcessName",
    "eventSteps.fSteps.fTotalTrackLength",
    "eventSteps.fSteps.fPx",
    "eventSteps.fSteps.fPy",
    "eventSteps.fSteps.fPz",
];

/// The default mask, excluding every name in [`DEFAULT_EXCLUDED_FIELDS`].
pub fn default_mask() -> FieldMask {
    FieldMask::from_names(DEFAULT_EXCLUDED_FIELDS)
}
