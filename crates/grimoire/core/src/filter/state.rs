use std::collections::BTreeMap;

use super::{FilterKey, LookupError};
use crate::category::{Category, Shortcut};

/// Enabled/disabled switch for every filterable category value.
///
/// The key set is fixed at construction; only the booleans change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    enabled: BTreeMap<FilterKey, bool>,
}

impl FilterState {
    /// Creates a state with every filterable value switched off.
    pub fn new() -> Self {
        Self {
            enabled: FilterKey::all()
                .filter(|key| key.info().filterable)
                .map(|key| (key, false))
                .collect(),
        }
    }

    /// Returns whether `key` is switched on.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the key was never populated.
    pub fn is_enabled(&self, key: FilterKey) -> Result<bool, LookupError> {
        self.enabled.get(&key).copied().ok_or(LookupError(key))
    }

    /// Flips one switch. Unknown keys are ignored.
    ///
    /// Returns the new value, or `None` if the key is not part of the state.
    pub fn toggle(&mut self, key: FilterKey) -> Option<bool> {
        let enabled = self.enabled.get_mut(&key)?;
        *enabled = !*enabled;
        Some(*enabled)
    }

    /// Sets one switch. Unknown keys are ignored.
    pub fn set(&mut self, key: FilterKey, value: bool) -> Option<bool> {
        let enabled = self.enabled.get_mut(&key)?;
        Some(core::mem::replace(enabled, value))
    }

    /// Switches every value off.
    pub fn clear_all(&mut self) {
        self.enabled.values_mut().for_each(|enabled| *enabled = false);
    }

    /// Switches a shortcut's values as a group.
    ///
    /// If every expanded value is already on they are all switched off;
    /// otherwise they are all switched on.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) {
        let keys = shortcut.expands_to();
        let all_on = keys
            .iter()
            .all(|&key| self.is_enabled(key).unwrap_or(false));
        for &key in keys {
            self.set(key, !all_on);
        }
    }

    /// Whether every value a shortcut expands to is on.
    pub fn shortcut_enabled(&self, shortcut: Shortcut) -> bool {
        shortcut
            .expands_to()
            .iter()
            .all(|&key| self.is_enabled(key).unwrap_or(false))
    }

    /// Switched-on values of one category.
    pub fn enabled_in(&self, category: Category) -> impl Iterator<Item = FilterKey> + '_ {
        self.enabled
            .iter()
            .filter(move |(key, enabled)| **enabled && key.category() == category)
            .map(|(key, _)| *key)
    }

    /// Whether any value of `category` is switched on.
    pub fn is_active(&self, category: Category) -> bool {
        self.enabled_in(category).next().is_some()
    }

    /// Whether any value at all is switched on.
    pub fn any_active(&self) -> bool {
        self.enabled.values().any(|enabled| *enabled)
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, bool)> + '_ {
        self.enabled.iter().map(|(key, enabled)| (*key, *enabled))
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Aspect, SpellRank, SpellType, Target};

    #[test]
    fn starts_fully_populated_and_off() {
        let state = FilterState::new();
        assert_eq!(state.len(), FilterKey::all().count());
        assert!(!state.any_active());
        for key in FilterKey::all() {
            assert_eq!(state.is_enabled(key), Ok(false));
        }
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut state = FilterState::new();
        let key = FilterKey::Type(SpellType::Magic);

        assert_eq!(state.toggle(key), Some(true));
        assert!(state.is_active(Category::Type));
        assert!(!state.is_active(Category::Rank));
        assert_eq!(state.toggle(key), Some(false));
        assert!(!state.is_active(Category::Type));
    }

    #[test]
    fn clear_all_matches_fresh_state() {
        let mut state = FilterState::new();
        state.toggle(FilterKey::Rank(SpellRank::Two));
        state.toggle(FilterKey::Aspect(Aspect::Ice));
        state.toggle(FilterKey::Target(Target::Enemy));

        state.clear_all();
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn shortcut_enables_then_disables_group() {
        let mut state = FilterState::new();
        state.toggle(FilterKey::Aspect(Aspect::Fire));

        state.apply_shortcut(Shortcut::PiercingFire);
        assert!(state.shortcut_enabled(Shortcut::PiercingFire));
        assert_eq!(
            state.is_enabled(FilterKey::Aspect(Aspect::Piercing)),
            Ok(true)
        );

        state.apply_shortcut(Shortcut::PiercingFire);
        assert!(!state.is_active(Category::Aspect));
    }

    #[test]
    fn enabled_in_lists_only_that_category() {
        let mut state = FilterState::new();
        state.toggle(FilterKey::Aspect(Aspect::Ice));
        state.toggle(FilterKey::Aspect(Aspect::Wind));
        state.toggle(FilterKey::Type(SpellType::Physical));

        let aspects: Vec<_> = state.enabled_in(Category::Aspect).collect();
        assert_eq!(
            aspects,
            vec![FilterKey::Aspect(Aspect::Ice), FilterKey::Aspect(Aspect::Wind)]
        );
    }
}
