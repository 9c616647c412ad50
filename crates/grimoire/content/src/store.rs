//! In-memory row store.
use std::collections::BTreeMap;

use grimoire_core::{Row, RowId, RowStore};

/// Sheets held entirely in memory, keyed by sheet name then row id.
///
/// Deserializes from the `rows.ron` shape:
///
/// ```ron
/// (
///     sheets: {
///         "AozAction": {
///             1: { "name": Str("Water Cannon"), "icon": Int(3260) },
///         },
///     },
/// )
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryRowStore {
    sheets: BTreeMap<String, BTreeMap<RowId, Row>>,
}

impl MemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces one row.
    pub fn insert(&mut self, sheet: impl Into<String>, id: RowId, row: Row) {
        self.sheets.entry(sheet.into()).or_default().insert(id, row);
    }

    /// Adds a row (builder pattern).
    #[must_use]
    pub fn with(mut self, sheet: impl Into<String>, id: RowId, row: Row) -> Self {
        self.insert(sheet, id, row);
        self
    }

    /// Removes one row, returning it if present.
    pub fn remove(&mut self, sheet: &str, id: RowId) -> Option<Row> {
        self.sheets.get_mut(sheet)?.remove(&id)
    }

    pub fn sheet_len(&self, sheet: &str) -> usize {
        self.sheets.get(sheet).map_or(0, BTreeMap::len)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }
}

impl RowStore for MemoryRowStore {
    fn row(&self, sheet: &str, id: RowId) -> Option<&Row> {
        self.sheets.get(sheet)?.get(&id)
    }

    fn primary_ids(&self, sheet: &str) -> Vec<RowId> {
        self.sheets
            .get(sheet)
            .map(|rows| rows.keys().copied().collect())
            .unwrap_or_default()
    }
}
