//! Scalar categories: spell type, rank and status effects.
use super::{Category, CategoryValue, ValueInfo};
use crate::filter::FilterKey;

/// Damage type of a spell.
///
/// Parsed from the first token of the stats text (`"Physical"`, `"Magical"`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum SpellType {
    #[strum(serialize = "Physical")]
    Physical,
    #[strum(serialize = "Magical")]
    Magic,
}

impl CategoryValue for SpellType {
    const CATEGORY: Category = Category::Type;

    fn info(self) -> ValueInfo {
        match self {
            SpellType::Physical => ValueInfo::new(15050, "Physical"),
            SpellType::Magic => ValueInfo::new(15054, "Magical"),
        }
    }
}

impl From<SpellType> for FilterKey {
    fn from(value: SpellType) -> Self {
        FilterKey::Type(value)
    }
}

/// Rarity rank of a spell, written as one to five stars in the stats text.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum SpellRank {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl SpellRank {
    pub const COUNT: usize = 5;

    /// Resolves a zero-based rank ordinal (`One == 0`).
    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(SpellRank::One),
            1 => Some(SpellRank::Two),
            2 => Some(SpellRank::Three),
            3 => Some(SpellRank::Four),
            4 => Some(SpellRank::Five),
            _ => None,
        }
    }

    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl CategoryValue for SpellRank {
    const CATEGORY: Category = Category::Rank;

    fn info(self) -> ValueInfo {
        match self {
            SpellRank::One => ValueInfo::new(19381, "★"),
            SpellRank::Two => ValueInfo::new(19382, "★★"),
            SpellRank::Three => ValueInfo::new(19383, "★★★"),
            SpellRank::Four => ValueInfo::new(19384, "★★★★"),
            SpellRank::Five => ValueInfo::new(19385, "★★★★★"),
        }
    }
}

impl From<SpellRank> for FilterKey {
    fn from(value: SpellRank) -> Self {
        FilterKey::Rank(value)
    }
}

/// Status effect a spell may inflict.
///
/// Declaration order is the positional order of the effect columns in the
/// transient sheet.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum SpellEffect {
    Slow,
    PetrificationAndFreeze,
    Paralysis,
    Interruption,
    Blind,
    Stun,
    Sleep,
    Bind,
    Heavy,
    FlatDamageAndDeath,
}

impl SpellEffect {
    pub const COUNT: usize = 10;
}

impl CategoryValue for SpellEffect {
    const CATEGORY: Category = Category::Effect;

    fn info(self) -> ValueInfo {
        match self {
            SpellEffect::Slow => ValueInfo::new(72461, "Slow"),
            SpellEffect::PetrificationAndFreeze => ValueInfo::new(72462, "Petrification/Freeze"),
            SpellEffect::Paralysis => ValueInfo::new(72463, "Paralysis"),
            SpellEffect::Interruption => ValueInfo::new(72464, "Interruption"),
            SpellEffect::Blind => ValueInfo::new(72465, "Blind"),
            SpellEffect::Stun => ValueInfo::new(72466, "Stun"),
            SpellEffect::Sleep => ValueInfo::new(72467, "Sleep"),
            SpellEffect::Bind => ValueInfo::new(72468, "Bind"),
            SpellEffect::Heavy => ValueInfo::new(72469, "Heavy"),
            SpellEffect::FlatDamageAndDeath => ValueInfo::new(72470, "Flat Damage/Death"),
        }
    }
}

impl From<SpellEffect> for FilterKey {
    fn from(value: SpellEffect) -> Self {
        FilterKey::Effect(value)
    }
}
