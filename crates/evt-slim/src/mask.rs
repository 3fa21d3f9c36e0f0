use std::collections::HashSet;

use evt_types::Table;

/// An immutable set of field names to leave out when cloning a table.
///
/// A mask is built once, from a name list such as
/// [`DEFAULT_EXCLUDED_FIELDS`](crate::DEFAULT_EXCLUDED_FIELDS), and passed by
/// reference into the filter step. Names the table does not contain are
/// ignored, and the order in which names were added does not matter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMask {
    excluded: HashSet<String>,
}

impl FieldMask {
    /// A mask that excludes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a mask from an iterator of field names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Add one field name to the exclusion set.
    pub fn deactivate(&mut self, name: impl Into<String>) {
        self.excluded.insert(name.into());
    }

    /// Whether `name` is excluded by this mask.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    /// Number of excluded names.
    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    /// Returns `true` if the mask excludes nothing.
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    /// Clone `table` without the excluded fields.
    ///
    /// Kept fields stay in their original order with their values untouched,
    /// and the record count carries over even when every field is dropped.
    pub fn apply(&self, table: &Table) -> Table {
        table.drop_fields(&self.excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evt_types::Field;

    fn sample() -> Table {
        Table::new(vec![
            Field::int("a", vec![1, 2]),
            Field::float("b", vec![0.5, 1.5]),
            Field::str("c", vec!["x".into(), "y".into()]),
        ])
        .unwrap()
    }

    #[test]
    fn from_names_and_membership() {
        let mask = FieldMask::from_names(["a", "c"]);
        assert_eq!(mask.len(), 2);
        assert!(mask.is_excluded("a"));
        assert!(mask.is_excluded("c"));
        assert!(!mask.is_excluded("b"));
    }

    #[test]
    fn deactivate_adds_names() {
        let mut mask = FieldMask::none();
        assert!(mask.is_empty());
        mask.deactivate("b");
        mask.deactivate("b");
        assert_eq!(mask.len(), 1);
        assert!(mask.is_excluded("b"));
    }

    #[test]
    fn apply_drops_only_masked_fields() {
        let mask = FieldMask::from_names(["b"]);
        let out = mask.apply(&sample());
        assert_eq!(out.field_names(), vec!["a", "c"]);
        assert_eq!(out.n_records(), 2);
    }

    #[test]
    fn apply_ignores_unknown_names() {
        let mask = FieldMask::from_names(["nope", "b"]);
        let out = mask.apply(&sample());
        assert_eq!(out.field_names(), vec!["a", "c"]);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let forward = FieldMask::from_names(["a", "b"]);
        let reverse = FieldMask::from_names(["b", "a"]);
        assert_eq!(forward, reverse);
        assert_eq!(
            forward.apply(&sample()).field_names(),
            reverse.apply(&sample()).field_names()
        );
    }

    #[test]
    fn empty_mask_is_identity() {
        let out = FieldMask::none().apply(&sample());
        assert_eq!(out, sample());
    }

    #[test]
    fn record_count_survives_dropping_every_field() {
        let mask = FieldMask::from_names(["a", "b", "c"]);
        let out = mask.apply(&sample());
        assert_eq!(out.n_fields(), 0);
        assert_eq!(out.n_records(), 2);
    }
}
