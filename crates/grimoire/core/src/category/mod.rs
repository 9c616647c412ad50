//! Closed category catalog.
//!
//! Every spell is described along seven closed categories (rank, type,
//! target, aspect, effect, cast time, recast time). Each member of a category
//! carries static display metadata ([`ValueInfo`]) looked up through a
//! descriptor table rather than stored on the value itself.
//!
//! Aspect and target are bit flags on a record ([`Aspects`], [`Targets`]); the
//! single-value enums ([`Aspect`], [`Target`]) name one bit each and are what
//! the filter engine keys on. Synthetic combinations ([`Shortcut`]) exist only
//! as filter-panel conveniences and are never stored on a record.
mod flags;
mod kinds;
mod shortcut;
mod timing;

use strum::IntoEnumIterator;

pub use flags::{Aspect, Aspects, Target, Targets};
pub use kinds::{SpellEffect, SpellRank, SpellType};
pub use shortcut::Shortcut;
pub use timing::{CastTime, RecastTime, UnknownTiming};

use crate::filter::FilterKey;

/// Icon shown when a texture for an icon id cannot be resolved.
pub const MISSING_ICON: IconId = IconId(60861);

/// Icon of the "clear all filters" button.
pub const CLEAR_FILTER_ICON: IconId = IconId(16005);

/// Identifier of an icon in the game icon table.
///
/// `0` means "no icon". Negative ids are synthetic glyphs shipped with the
/// display layer and must never be resolved against the game icon table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconId(pub i32);

impl IconId {
    pub const NONE: IconId = IconId(0);

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    pub const fn is_synthetic(self) -> bool {
        self.0 < 0
    }

    /// Returns the id to use for a game icon table lookup, if any.
    pub fn game_icon(self) -> Option<u32> {
        u32::try_from(self.0).ok().filter(|&id| id != 0)
    }
}

/// Static display metadata attached to a category value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueInfo {
    pub icon: IconId,
    pub label: &'static str,
    /// Whether the value gets its own entry in the filter state.
    pub filterable: bool,
}

impl ValueInfo {
    pub(crate) const fn new(icon: i32, label: &'static str) -> Self {
        Self {
            icon: IconId(icon),
            label,
            filterable: true,
        }
    }

    pub(crate) const fn text(label: &'static str) -> Self {
        Self::new(0, label)
    }

    pub(crate) const fn synthetic(icon: i32, label: &'static str) -> Self {
        Self {
            icon: IconId(icon),
            label,
            filterable: false,
        }
    }
}

/// The seven filterable categories.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum Category {
    Rank,
    Type,
    Target,
    Aspect,
    Effect,
    Cast,
    Recast,
}

impl Category {
    /// Every filter key belonging to this category, in declaration order.
    pub fn keys(self) -> Vec<FilterKey> {
        match self {
            Category::Rank => keys_of::<SpellRank>(),
            Category::Type => keys_of::<SpellType>(),
            Category::Target => keys_of::<Target>(),
            Category::Aspect => keys_of::<Aspect>(),
            Category::Effect => keys_of::<SpellEffect>(),
            Category::Cast => keys_of::<CastTime>(),
            Category::Recast => keys_of::<RecastTime>(),
        }
    }

    /// Finds a key of this category by label or value name, ignoring ASCII
    /// case.
    pub fn find(self, text: &str) -> Option<FilterKey> {
        self.keys().into_iter().find(|key| {
            key.info().label.eq_ignore_ascii_case(text) || key.name().eq_ignore_ascii_case(text)
        })
    }

    /// Shortcut buttons drawn alongside this category's own values.
    pub fn shortcuts(self) -> impl Iterator<Item = Shortcut> {
        Shortcut::iter().filter(move |shortcut| shortcut.category() == self)
    }

    /// Tooltip format used by text-only filter buttons.
    ///
    /// Icon buttons use the value label directly.
    pub fn tooltip(self, info: &ValueInfo) -> String {
        match self {
            Category::Cast => format!("{} cast", info.label),
            Category::Recast => format!("{} cooldown", info.label),
            _ => info.label.to_owned(),
        }
    }

    /// Whether the category is drawn as text buttons instead of icons.
    pub const fn is_text(self) -> bool {
        matches!(self, Category::Cast | Category::Recast)
    }
}

/// A member of one of the closed categories.
pub trait CategoryValue: Copy + Eq + Into<FilterKey> + IntoEnumIterator + 'static {
    const CATEGORY: Category;

    /// Descriptor table lookup.
    fn info(self) -> ValueInfo;
}

fn keys_of<V: CategoryValue>() -> Vec<FilterKey> {
    V::iter()
        .filter(|value| value.info().filterable)
        .map(Into::into)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_id_classification() {
        assert!(IconId::NONE.is_none());
        assert_eq!(IconId::NONE.game_icon(), None);
        assert!(IconId(-1).is_synthetic());
        assert_eq!(IconId(-1).game_icon(), None);
        assert_eq!(IconId(15050).game_icon(), Some(15050));
    }

    #[test]
    fn every_category_has_keys() {
        for category in Category::iter() {
            let keys = category.keys();
            assert!(!keys.is_empty(), "{category} has no keys");
            assert!(keys.iter().all(|key| key.category() == category));
        }
    }

    #[test]
    fn real_values_never_use_synthetic_icons() {
        for category in Category::iter() {
            for key in category.keys() {
                assert!(!key.info().icon.is_synthetic(), "{key:?}");
            }
        }
        for shortcut in Shortcut::iter() {
            assert!(shortcut.info().icon.is_synthetic());
            assert!(!shortcut.info().filterable);
        }
    }

    #[test]
    fn text_button_tooltips() {
        let info = CastTime::S1_5.info();
        assert_eq!(Category::Cast.tooltip(&info), "1.5s cast");
        let info = RecastTime::S120.info();
        assert_eq!(Category::Recast.tooltip(&info), "120s cooldown");
        assert_eq!(Category::Type.tooltip(&SpellType::Magic.info()), "Magical");
    }

    #[test]
    fn find_accepts_labels_and_names() {
        assert_eq!(
            Category::Aspect.find("fire"),
            Some(FilterKey::Aspect(Aspect::Fire))
        );
        assert_eq!(
            Category::Rank.find("★★"),
            Some(FilterKey::Rank(SpellRank::Two))
        );
        assert_eq!(
            Category::Rank.find("three"),
            Some(FilterKey::Rank(SpellRank::Three))
        );
        assert_eq!(
            Category::Cast.find("1.5s"),
            Some(FilterKey::Cast(CastTime::S1_5))
        );
        assert_eq!(Category::Type.find("Fire"), None);
    }
}
