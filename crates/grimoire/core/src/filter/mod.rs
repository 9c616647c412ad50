//! Category filters over the catalog.
//!
//! A [`FilterState`] holds one switch per filterable category value. The
//! [`FilterEngine`] evaluates it against the catalog: values are OR-ed within a
//! category and categories are AND-ed together. A category with nothing
//! switched on does not constrain anything.
mod engine;
mod layout;
mod state;

pub use engine::{FilterEngine, matches};
pub use layout::{FilterButton, FilterRow, filter_panel};
pub use state::FilterState;

use strum::IntoEnumIterator;

use crate::category::{
    Aspect, CastTime, Category, CategoryValue, RecastTime, SpellEffect, SpellRank, SpellType,
    Target, ValueInfo,
};
use crate::error::{DexError, ErrorSeverity};

/// One filterable category value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    Rank(SpellRank),
    Type(SpellType),
    Target(Target),
    Aspect(Aspect),
    Effect(SpellEffect),
    Cast(CastTime),
    Recast(RecastTime),
}

impl FilterKey {
    pub const fn category(self) -> Category {
        match self {
            FilterKey::Rank(_) => Category::Rank,
            FilterKey::Type(_) => Category::Type,
            FilterKey::Target(_) => Category::Target,
            FilterKey::Aspect(_) => Category::Aspect,
            FilterKey::Effect(_) => Category::Effect,
            FilterKey::Cast(_) => Category::Cast,
            FilterKey::Recast(_) => Category::Recast,
        }
    }

    pub fn info(self) -> ValueInfo {
        match self {
            FilterKey::Rank(value) => value.info(),
            FilterKey::Type(value) => value.info(),
            FilterKey::Target(value) => value.info(),
            FilterKey::Aspect(value) => value.info(),
            FilterKey::Effect(value) => value.info(),
            FilterKey::Cast(value) => value.info(),
            FilterKey::Recast(value) => value.info(),
        }
    }

    /// Identifier of the value within its category (`"Fire"`, `"S1_5"`).
    pub fn name(self) -> String {
        match self {
            FilterKey::Rank(value) => value.to_string(),
            FilterKey::Type(value) => value.to_string(),
            FilterKey::Target(value) => value.to_string(),
            FilterKey::Aspect(value) => value.to_string(),
            FilterKey::Effect(value) => value.to_string(),
            FilterKey::Cast(value) => value.to_string(),
            FilterKey::Recast(value) => value.to_string(),
        }
    }

    /// Every filterable key, grouped by category.
    pub fn all() -> impl Iterator<Item = FilterKey> {
        Category::iter().flat_map(Category::keys)
    }
}

/// A lookup referenced a key that is not part of the filter state.
///
/// The state is populated with every filterable key at construction, so this
/// indicates a programming error rather than bad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("filter key {0:?} is not part of the filter state")]
pub struct LookupError(pub FilterKey);

impl DexError for LookupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "FILTER_UNKNOWN_KEY"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keys_cover_every_category_value() {
        let expected = SpellRank::iter().count()
            + SpellType::iter().count()
            + Target::iter().count()
            + Aspect::iter().count()
            + SpellEffect::iter().count()
            + CastTime::iter().count()
            + RecastTime::iter().count();
        assert_eq!(FilterKey::all().count(), expected);
    }

    #[test]
    fn names_come_from_the_value() {
        assert_eq!(FilterKey::Aspect(Aspect::Fire).name(), "Fire");
        assert_eq!(FilterKey::Type(SpellType::Magic).name(), "Magical");
        assert_eq!(FilterKey::Cast(CastTime::S1_5).name(), "S1_5");
    }
}
