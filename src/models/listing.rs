//! Playlist library listing.
//!
//! The server pushes the whole library as three aligned columns: playlist
//! ids, display names and flags. [`ListingModel`] keeps the latest push as an
//! immutable [`ListingSnapshot`] and swaps it in one step, so a reader holding
//! a snapshot always sees rows from a single push.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::codec::{Column, DecodedColumns, FormatEntry, FormatVector, ShapeError, TypeTag};
use crate::traits::StructuredData;

/// The playlist may be edited by the client.
pub const FLAG_EDITABLE: i32 = 0x0001;

static LISTING_ENTRIES: [FormatEntry; 2] = [
    FormatEntry::new(TypeTag::StringVector, 2),
    FormatEntry::new(TypeTag::IntVector, 1),
];

/// Two string columns (id, name) followed by one int column (flags).
pub static LISTING_FORMAT: FormatVector = FormatVector::from_static(&LISTING_ENTRIES);

/// One row of the listing, borrowed from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEntry<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub flags: i32,
}

impl ListingEntry<'_> {
    pub fn is_editable(&self) -> bool {
        self.flags & FLAG_EDITABLE != 0
    }
}

/// Immutable listing contents from one push.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSnapshot {
    ids: Vec<String>,
    names: Vec<String>,
    flags: Vec<i32>,
    received_at: Option<DateTime<Utc>>,
}

impl ListingSnapshot {
    /// Builds a snapshot from columns shaped by [`LISTING_FORMAT`].
    pub fn from_columns(columns: DecodedColumns) -> Result<Self, ShapeError> {
        columns.conforms_to(&LISTING_FORMAT)?;

        let actual = columns.column_count();
        match <[Column; 3]>::try_from(columns.into_columns()) {
            Ok([Column::Strings(ids), Column::Strings(names), Column::Ints(flags)]) => Ok(Self {
                ids,
                names,
                flags,
                received_at: Some(Utc::now()),
            }),
            // Kinds were checked above; only the count can differ here.
            _ => Err(ShapeError::ColumnCount {
                expected: LISTING_FORMAT.column_count(),
                actual,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn entry(&self, i: usize) -> Option<ListingEntry<'_>> {
        Some(ListingEntry {
            id: self.ids.get(i)?,
            name: self.names.get(i)?,
            flags: *self.flags.get(i)?,
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = ListingEntry<'_>> {
        (0..self.len()).filter_map(|i| self.entry(i))
    }

    pub fn entry_id(&self, i: usize) -> Option<&str> {
        self.ids.get(i).map(String::as_str)
    }

    pub fn entry_name(&self, i: usize) -> Option<&str> {
        self.names.get(i).map(String::as_str)
    }

    pub fn entry_flags(&self, i: usize) -> Option<i32> {
        self.flags.get(i).copied()
    }

    /// When this snapshot was built; `None` for the initial empty listing.
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        self.received_at
    }

    pub fn to_columns(&self) -> DecodedColumns {
        let columns = vec![
            Column::Strings(self.ids.clone()),
            Column::Strings(self.names.clone()),
            Column::Ints(self.flags.clone()),
        ];
        DecodedColumns::new(columns).unwrap_or_else(|_| DecodedColumns::empty_for(&LISTING_FORMAT))
    }
}

impl fmt::Display for ListingSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Playlists:")?;
        for entry in self.entries() {
            write!(f, " {} - {} - {},", entry.id, entry.name, entry.flags)?;
        }
        Ok(())
    }
}

/// Owner of the current listing.
///
/// Shared as `Arc<ListingModel>` between the push handler (writer) and the UI
/// (readers). Per-row accessors each take their own snapshot; use
/// [`snapshot`](Self::snapshot) when several reads must agree.
#[derive(Debug, Default)]
pub struct ListingModel {
    current: RwLock<Arc<ListingSnapshot>>,
}

impl ListingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current listing. Later updates do not affect the returned value.
    pub fn snapshot(&self) -> Arc<ListingSnapshot> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn publish(&self, next: ListingSnapshot) {
        let next = Arc::new(next);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Replaces every row with `columns`.
    ///
    /// The new snapshot is built before the swap; on error nothing changes.
    pub fn apply_snapshot(&self, columns: DecodedColumns) -> Result<(), ShapeError> {
        let next = ListingSnapshot::from_columns(columns)?;
        info!(rows = next.len(), "Listing snapshot applied");
        self.publish(next);
        Ok(())
    }

    /// Drops every row, e.g. when the server invalidates the listing.
    pub fn reset(&self) {
        debug!("Listing reset");
        self.publish(ListingSnapshot::default());
    }

    pub fn length(&self) -> usize {
        self.snapshot().len()
    }

    pub fn entry_id(&self, i: usize) -> Option<String> {
        self.snapshot().entry_id(i).map(str::to_owned)
    }

    pub fn entry_name(&self, i: usize) -> Option<String> {
        self.snapshot().entry_name(i).map(str::to_owned)
    }

    pub fn entry_flags(&self, i: usize) -> Option<i32> {
        self.snapshot().entry_flags(i)
    }
}

impl StructuredData for ListingModel {
    fn format_vector(&self) -> &FormatVector {
        &LISTING_FORMAT
    }

    fn apply_columns(&self, columns: DecodedColumns) -> Result<(), ShapeError> {
        self.apply_snapshot(columns)
    }

    fn to_columns(&self) -> DecodedColumns {
        self.snapshot().to_columns()
    }
}

impl fmt::Display for ListingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.snapshot(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};

    fn columns(rows: &[(&str, &str, i32)]) -> DecodedColumns {
        DecodedColumns::new(vec![
            Column::Strings(rows.iter().map(|r| r.0.to_string()).collect()),
            Column::Strings(rows.iter().map(|r| r.1.to_string()).collect()),
            Column::Ints(rows.iter().map(|r| r.2).collect()),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_model_is_empty() {
        let model = ListingModel::new();
        assert_eq!(model.length(), 0);
        assert_eq!(model.entry_id(0), None);
        assert!(model.snapshot().received_at().is_none());
    }

    #[test]
    fn test_apply_snapshot_and_accessors() {
        let model = ListingModel::new();
        model
            .apply_snapshot(columns(&[("p1", "Rock", 0), ("p2", "Jazz", FLAG_EDITABLE)]))
            .unwrap();

        assert_eq!(model.length(), 2);
        assert_eq!(model.entry_id(0).as_deref(), Some("p1"));
        assert_eq!(model.entry_name(1).as_deref(), Some("Jazz"));
        assert_eq!(model.entry_flags(1), Some(FLAG_EDITABLE));
        assert_eq!(model.entry_flags(2), None);
        assert!(model.snapshot().received_at().is_some());
    }

    #[test]
    fn test_apply_snapshot_replaces_wholesale() {
        let model = ListingModel::new();
        model
            .apply_snapshot(columns(&[("p1", "Rock", 0), ("p2", "Jazz", 1)]))
            .unwrap();
        model.apply_snapshot(columns(&[("p3", "Pop", 0)])).unwrap();

        assert_eq!(model.length(), 1);
        assert_eq!(model.entry_id(0).as_deref(), Some("p3"));
        assert_eq!(model.entry_name(1), None);
    }

    #[test]
    fn test_bad_shape_keeps_previous_rows() {
        let model = ListingModel::new();
        model.apply_snapshot(columns(&[("p1", "Rock", 0)])).unwrap();

        let wrong = DecodedColumns::new(vec![Column::Ints(vec![1])]).unwrap();
        assert!(model.apply_snapshot(wrong).is_err());
        assert_eq!(model.entry_id(0).as_deref(), Some("p1"));
    }

    #[test]
    fn test_from_columns_reports_shape() {
        let too_few = DecodedColumns::new(vec![Column::Strings(vec!["p1".into()])]).unwrap();
        assert_eq!(
            ListingSnapshot::from_columns(too_few),
            Err(ShapeError::ColumnCount {
                expected: 3,
                actual: 1
            })
        );

        let swapped = DecodedColumns::new(vec![
            Column::Strings(vec!["p1".into()]),
            Column::Ints(vec![0]),
            Column::Strings(vec!["Rock".into()]),
        ])
        .unwrap();
        assert_eq!(
            ListingSnapshot::from_columns(swapped),
            Err(ShapeError::ColumnKind {
                column: 1,
                expected: TypeTag::StringVector,
                actual: TypeTag::IntVector
            })
        );
    }

    #[test]
    fn test_held_snapshot_is_unaffected_by_updates() {
        let model = ListingModel::new();
        model.apply_snapshot(columns(&[("p1", "Rock", 0)])).unwrap();
        let held = model.snapshot();

        model.reset();
        assert_eq!(model.length(), 0);
        assert_eq!(held.entry_name(0), Some("Rock"));
    }

    #[test]
    fn test_entry_view() {
        let snapshot =
            ListingSnapshot::from_columns(columns(&[("a", "A", 0), ("b", "B", FLAG_EDITABLE)]))
                .unwrap();
        let entries: Vec<_> = snapshot.entries().collect();
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].is_editable());
        assert!(entries[1].is_editable());
        assert_eq!(entries[1].id, "b");
    }

    #[test]
    fn test_display() {
        let model = ListingModel::new();
        model
            .apply_snapshot(columns(&[("p1", "Rock", 0), ("p2", "Jazz", 1)]))
            .unwrap();
        assert_eq!(model.to_string(), "Playlists: p1 - Rock - 0, p2 - Jazz - 1,");
    }

    #[test]
    fn test_structured_roundtrip() {
        let model = ListingModel::new();
        model.apply_snapshot(columns(&[("p1", "Rock", 0)])).unwrap();

        let encoded = model.encode_current().unwrap();
        let decoded = decode(&LISTING_FORMAT, &encoded).unwrap();
        assert_eq!(decoded, model.to_columns());

        let other = ListingModel::new();
        other.apply_encoded(&encoded).unwrap();
        assert_eq!(other.entry_name(0).as_deref(), Some("Rock"));
        assert_eq!(encode(&LISTING_FORMAT, &other.to_columns()).unwrap(), encoded);
    }

    #[test]
    fn test_apply_encoded_failure_leaves_model_untouched() {
        let model = ListingModel::new();
        model.apply_snapshot(columns(&[("p1", "Rock", 0)])).unwrap();
        assert!(model.apply_encoded(&[0x01, 0x00]).is_err());
        assert_eq!(model.length(), 1);
    }
}
