use strum::IntoEnumIterator;

use super::{FilterKey, FilterState};
use crate::catalog::Catalog;
use crate::category::{Category, Shortcut};
use crate::record::ActionRecord;

/// Returns true if `record` passes every active category of `state`.
pub fn matches(state: &FilterState, record: &ActionRecord) -> bool {
    Category::iter().all(|category| {
        let mut enabled = state.enabled_in(category).peekable();
        if enabled.peek().is_none() {
            return true;
        }
        enabled.any(|key| record.has(key))
    })
}

/// Filter state plus the visible subset it produces.
///
/// The visible subset is recomputed wholesale after every mutation. The
/// catalog is passed in rather than held so unlock updates can borrow it
/// mutably between queries.
#[derive(Clone, Debug)]
pub struct FilterEngine {
    state: FilterState,
    visible: Vec<usize>,
    hide_locked: bool,
}

impl FilterEngine {
    /// Creates an engine with nothing switched on; every record is visible
    /// unless `hide_locked` removes locked ones.
    pub fn new(catalog: &Catalog, hide_locked: bool) -> Self {
        let mut engine = Self {
            state: FilterState::new(),
            visible: Vec::with_capacity(catalog.len()),
            hide_locked,
        };
        engine.recompute(catalog);
        engine
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn hide_locked(&self) -> bool {
        self.hide_locked
    }

    pub fn toggle(&mut self, key: FilterKey, catalog: &Catalog) {
        if self.state.toggle(key).is_none() {
            tracing::debug!(?key, "ignoring toggle of unknown filter key");
        }
        self.recompute(catalog);
    }

    pub fn clear_all(&mut self, catalog: &Catalog) {
        self.state.clear_all();
        self.recompute(catalog);
    }

    pub fn apply_shortcut(&mut self, shortcut: Shortcut, catalog: &Catalog) {
        self.state.apply_shortcut(shortcut);
        self.recompute(catalog);
    }

    pub fn set_hide_locked(&mut self, hide_locked: bool, catalog: &Catalog) {
        self.hide_locked = hide_locked;
        self.recompute(catalog);
    }

    /// Rebuilds the visible subset from scratch.
    pub fn recompute(&mut self, catalog: &Catalog) {
        let state = &self.state;
        let hide_locked = self.hide_locked;
        self.visible.clear();
        self.visible.extend(
            catalog
                .iter()
                .enumerate()
                .filter(|(_, record)| !hide_locked || record.is_unlocked)
                .filter(|(_, record)| matches(state, record))
                .map(|(position, _)| position),
        );
        tracing::trace!(
            visible = self.visible.len(),
            total = catalog.len(),
            "recomputed visible spells"
        );
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Visible records in display order.
    ///
    /// `catalog` must be the catalog the engine was last recomputed against.
    pub fn visible<'c>(&'c self, catalog: &'c Catalog) -> impl Iterator<Item = &'c ActionRecord> {
        let records = catalog.records();
        self.visible
            .iter()
            .filter_map(move |&position| records.get(position))
    }
}
