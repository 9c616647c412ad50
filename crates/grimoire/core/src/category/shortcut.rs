//! Synthetic combination values.
//!
//! These only exist as filter-panel buttons that switch several real values
//! at once. They have no entry in the filter state and are never assigned to
//! a record.
use super::{Aspect, Category, Target, ValueInfo};
use crate::filter::FilterKey;

static SELF_ALLY_OR_ENEMY: [FilterKey; 2] = [
    FilterKey::Target(Target::SelfOrAlly),
    FilterKey::Target(Target::Enemy),
];
static PIERCING_FIRE: [FilterKey; 2] = [
    FilterKey::Aspect(Aspect::Piercing),
    FilterKey::Aspect(Aspect::Fire),
];
static BLUNT_EARTH: [FilterKey; 2] = [
    FilterKey::Aspect(Aspect::Blunt),
    FilterKey::Aspect(Aspect::Earth),
];

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum Shortcut {
    SelfAllyOrEnemy,
    PiercingFire,
    BluntEarth,
}

impl Shortcut {
    pub const fn category(self) -> Category {
        match self {
            Shortcut::SelfAllyOrEnemy => Category::Target,
            Shortcut::PiercingFire | Shortcut::BluntEarth => Category::Aspect,
        }
    }

    pub const fn info(self) -> ValueInfo {
        match self {
            Shortcut::SelfAllyOrEnemy => ValueInfo::synthetic(-1, "Targets Self, Ally, or Enemy"),
            Shortcut::PiercingFire => ValueInfo::synthetic(-2, "Piercing/Fire"),
            Shortcut::BluntEarth => ValueInfo::synthetic(-3, "Blunt/Earth"),
        }
    }

    /// Real filter keys this shortcut switches.
    pub fn expands_to(self) -> &'static [FilterKey] {
        match self {
            Shortcut::SelfAllyOrEnemy => &SELF_ALLY_OR_ENEMY,
            Shortcut::PiercingFire => &PIERCING_FIRE,
            Shortcut::BluntEarth => &BLUNT_EARTH,
        }
    }

    /// Whether the target shortcut is drawn on the panel.
    ///
    /// The self/ally/enemy glyph is used to display records that target
    /// both sides; its filter button is hidden.
    pub const fn has_button(self) -> bool {
        !matches!(self, Shortcut::SelfAllyOrEnemy)
    }
}
