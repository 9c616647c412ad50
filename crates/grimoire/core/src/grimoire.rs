//! The catalog paired with its filter engine.
use crate::catalog::{Catalog, CatalogError};
use crate::category::Shortcut;
use crate::config::CatalogConfig;
use crate::env::UnlockOracle;
use crate::filter::{FilterEngine, FilterKey, FilterState};
use crate::record::{ActionId, ActionRecord};

/// Owns the published catalog and the filter state applied to it.
///
/// Every mutation recomputes the visible subset before returning, so readers
/// never observe a stale view.
#[derive(Clone, Debug)]
pub struct Grimoire {
    catalog: Catalog,
    filter: FilterEngine,
}

impl Grimoire {
    pub fn new(catalog: Catalog, config: &CatalogConfig) -> Self {
        let filter = FilterEngine::new(&catalog, config.hide_locked);
        Self { catalog, filter }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter_state(&self) -> &FilterState {
        self.filter.state()
    }

    pub fn toggle(&mut self, key: FilterKey) {
        self.filter.toggle(key, &self.catalog);
    }

    pub fn clear_all(&mut self) {
        self.filter.clear_all(&self.catalog);
    }

    pub fn apply_shortcut(&mut self, shortcut: Shortcut) {
        self.filter.apply_shortcut(shortcut, &self.catalog);
    }

    pub fn set_hide_locked(&mut self, hide_locked: bool) {
        self.filter.set_hide_locked(hide_locked, &self.catalog);
    }

    /// Visible records in display order.
    pub fn visible(&self) -> impl Iterator<Item = &ActionRecord> {
        self.filter.visible(&self.catalog)
    }

    pub fn visible_len(&self) -> usize {
        self.filter.visible_len()
    }

    /// Records the host's answer for one spell.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownAction`] if the id is not in the catalog.
    pub fn set_unlocked(
        &mut self,
        action_id: ActionId,
        unlocked: bool,
    ) -> Result<(), CatalogError> {
        let changed = self.catalog.set_unlocked(action_id, unlocked)?;
        if changed && self.filter.hide_locked() {
            self.filter.recompute(&self.catalog);
        }
        Ok(())
    }

    /// Re-resolves every record against `oracle`.
    ///
    /// Returns the number of records whose unlock flag changed.
    pub fn refresh_unlocks(&mut self, oracle: &dyn UnlockOracle) -> usize {
        let updates: Vec<(ActionId, bool)> = self
            .catalog
            .iter()
            .map(|record| (record.action_id, oracle.is_unlocked(record.unlock_key)))
            .collect();

        let mut changed = 0;
        for (action_id, unlocked) in updates {
            match self.catalog.set_unlocked(action_id, unlocked) {
                Ok(true) => changed += 1,
                Ok(false) => {}
                Err(error) => tracing::warn!(%action_id, %error, "unlock refresh skipped a spell"),
            }
        }

        if changed > 0 && self.filter.hide_locked() {
            self.filter.recompute(&self.catalog);
        }
        tracing::debug!(changed, total = self.catalog.len(), "refreshed unlock state");
        changed
    }
}
