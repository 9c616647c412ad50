//! The published spell catalog.
//!
//! Records are ordered by `(display_number, action_id)` and never reordered.
//! The only mutation allowed after construction is the unlock flag.
use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::error::{DexError, ErrorSeverity};
use crate::record::{ActionId, ActionRecord};

/// Errors raised while publishing or updating the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two records share the same action id.
    #[error("action {0} appears more than once in the catalog")]
    DuplicateAction(ActionId),

    /// A record was assembled with the reserved zero id.
    #[error("action id 0 is reserved")]
    ZeroActionId,

    /// An unlock update referenced an action outside the catalog.
    #[error("action {0} is not in the catalog")]
    UnknownAction(ActionId),
}

impl DexError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::DuplicateAction(_) | CatalogError::ZeroActionId => ErrorSeverity::Fatal,
            CatalogError::UnknownAction(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateAction(_) => "CATALOG_DUPLICATE_ACTION",
            CatalogError::ZeroActionId => "CATALOG_ZERO_ACTION_ID",
            CatalogError::UnknownAction(_) => "CATALOG_UNKNOWN_ACTION",
        }
    }
}

/// Immutable, display-ordered collection of [`ActionRecord`]s.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<ActionRecord>,
    index: HashMap<ActionId, usize>,
}

impl Catalog {
    /// Sorts and indexes a complete set of records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ZeroActionId`] or
    /// [`CatalogError::DuplicateAction`] if the id invariants do not hold.
    pub fn from_records(mut records: Vec<ActionRecord>) -> Result<Self, CatalogError> {
        records.sort_by_key(|record| (record.display_number, record.action_id));

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.action_id.0 == 0 {
                return Err(CatalogError::ZeroActionId);
            }
            if index.insert(record.action_id, position).is_some() {
                return Err(CatalogError::DuplicateAction(record.action_id));
            }
        }

        Ok(Self { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in display order.
    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionRecord> {
        self.records.iter()
    }

    pub fn get(&self, action_id: ActionId) -> Option<&ActionRecord> {
        self.index
            .get(&action_id)
            .map(|&position| &self.records[position])
    }

    /// Updates the unlock flag of one record.
    ///
    /// Returns true if the stored value changed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownAction`] if the id is not in the catalog.
    pub fn set_unlocked(
        &mut self,
        action_id: ActionId,
        unlocked: bool,
    ) -> Result<bool, CatalogError> {
        let position = *self
            .index
            .get(&action_id)
            .ok_or(CatalogError::UnknownAction(action_id))?;
        let record = &mut self.records[position];
        let changed = record.is_unlocked != unlocked;
        record.is_unlocked = unlocked;
        Ok(changed)
    }

    /// SHA-256 over the ordered `(display_number, action_id)` pairs.
    ///
    /// Two ingestions of the same rows yield the same fingerprint.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for record in &self.records {
            hasher.update(record.display_number.to_le_bytes());
            hasher.update(record.action_id.0.to_le_bytes());
        }
        hasher.finalize().into()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ActionRecord;
    type IntoIter = std::slice::Iter<'a, ActionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::record;

    #[test]
    fn records_are_sorted_by_display_number() {
        let catalog =
            Catalog::from_records(vec![record(30, 3), record(10, 1), record(20, 2)]).unwrap();

        let numbers: Vec<_> = catalog.iter().map(|r| r.display_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(catalog.get(ActionId(20)).unwrap().display_number, 2);
    }

    #[test]
    fn input_order_does_not_change_output_order() {
        let forward =
            Catalog::from_records(vec![record(1, 5), record(2, 9), record(3, 7)]).unwrap();
        let backward =
            Catalog::from_records(vec![record(3, 7), record(2, 9), record(1, 5)]).unwrap();

        assert_eq!(forward.records(), backward.records());
        assert_eq!(forward.fingerprint(), backward.fingerprint());
    }

    #[test]
    fn fingerprint_tracks_order() {
        let a = Catalog::from_records(vec![record(1, 1), record(2, 2)]).unwrap();
        let b = Catalog::from_records(vec![record(1, 2), record(2, 1)]).unwrap();
        assert_ne!(hex::encode(a.fingerprint()), hex::encode(b.fingerprint()));
    }

    #[test]
    fn rejects_duplicate_and_zero_ids() {
        let err = Catalog::from_records(vec![record(4, 1), record(4, 2)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateAction(ActionId(4)));

        let err = Catalog::from_records(vec![record(0, 1)]).unwrap_err();
        assert_eq!(err, CatalogError::ZeroActionId);
    }

    #[test]
    fn set_unlocked_only_touches_the_flag() {
        let mut catalog = Catalog::from_records(vec![record(1, 1), record(2, 2)]).unwrap();
        let before = catalog.get(ActionId(2)).unwrap().clone();

        assert_eq!(catalog.set_unlocked(ActionId(2), true), Ok(true));
        assert_eq!(catalog.set_unlocked(ActionId(2), true), Ok(false));

        let after = catalog.get(ActionId(2)).unwrap();
        assert!(after.is_unlocked);
        assert_eq!(after.name, before.name);
        assert_eq!(
            catalog.set_unlocked(ActionId(9), true),
            Err(CatalogError::UnknownAction(ActionId(9)))
        );
    }
}
