//! Flag categories: aspect and target.
//!
//! A record stores these as bitmasks; the filter engine keys on the single
//! named bits.
use bitflags::bitflags;
use strum::IntoEnumIterator;

use super::{Category, CategoryValue, ValueInfo};
use crate::filter::FilterKey;

bitflags! {
    /// Elemental/physical aspects a spell deals damage with.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Aspects: u16 {
        const UNASPECTED = 1 << 0;
        const BLUNT      = 1 << 1;
        const PIERCING   = 1 << 2;
        const SLASHING   = 1 << 3;
        const FIRE       = 1 << 4;
        const ICE        = 1 << 5;
        const WIND       = 1 << 6;
        const EARTH      = 1 << 7;
        const LIGHTNING  = 1 << 8;
        const WATER      = 1 << 9;
    }
}

bitflags! {
    /// Who a spell can be cast on.
    ///
    /// A stored value is never empty: spells without a target carry
    /// [`Targets::UNTARGETABLE`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Targets: u8 {
        const UNTARGETABLE = 1 << 0;
        const SELF_OR_ALLY = 1 << 1;
        const ENEMY        = 1 << 2;
    }
}

/// A single aspect bit.
///
/// The string form is the stats-text vocabulary.
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
pub enum Aspect {
    Unaspected,
    Blunt,
    Piercing,
    Slashing,
    Fire,
    Ice,
    Wind,
    Earth,
    Lightning,
    Water,
}

impl Aspect {
    pub const fn flag(self) -> Aspects {
        match self {
            Aspect::Unaspected => Aspects::UNASPECTED,
            Aspect::Blunt => Aspects::BLUNT,
            Aspect::Piercing => Aspects::PIERCING,
            Aspect::Slashing => Aspects::SLASHING,
            Aspect::Fire => Aspects::FIRE,
            Aspect::Ice => Aspects::ICE,
            Aspect::Wind => Aspects::WIND,
            Aspect::Earth => Aspects::EARTH,
            Aspect::Lightning => Aspects::LIGHTNING,
            Aspect::Water => Aspects::WATER,
        }
    }
}

impl From<Aspect> for Aspects {
    fn from(aspect: Aspect) -> Self {
        aspect.flag()
    }
}

impl FromIterator<Aspect> for Aspects {
    fn from_iter<I: IntoIterator<Item = Aspect>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Aspects::empty(), |mask, aspect| mask | aspect.flag())
    }
}

impl Aspects {
    /// Named aspects set in this mask, in declaration order.
    pub fn values(self) -> impl Iterator<Item = Aspect> {
        Aspect::iter().filter(move |aspect| self.contains(aspect.flag()))
    }
}

impl CategoryValue for Aspect {
    const CATEGORY: Category = Category::Aspect;

    fn info(self) -> ValueInfo {
        match self {
            Aspect::Unaspected => ValueInfo::new(16018, "Unaspected"),
            Aspect::Blunt => ValueInfo::new(15535, "Blunt"),
            Aspect::Piercing => ValueInfo::new(15536, "Piercing"),
            Aspect::Slashing => ValueInfo::new(15537, "Slashing"),
            Aspect::Fire => ValueInfo::new(15100, "Fire"),
            Aspect::Ice => ValueInfo::new(15101, "Ice"),
            Aspect::Wind => ValueInfo::new(15102, "Wind"),
            Aspect::Earth => ValueInfo::new(15103, "Earth"),
            Aspect::Lightning => ValueInfo::new(15104, "Lightning"),
            Aspect::Water => ValueInfo::new(15105, "Water"),
        }
    }
}

impl From<Aspect> for FilterKey {
    fn from(value: Aspect) -> Self {
        FilterKey::Aspect(value)
    }
}

/// A single target bit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum Target {
    Untargetable,
    SelfOrAlly,
    Enemy,
}

impl Target {
    pub const fn flag(self) -> Targets {
        match self {
            Target::Untargetable => Targets::UNTARGETABLE,
            Target::SelfOrAlly => Targets::SELF_OR_ALLY,
            Target::Enemy => Targets::ENEMY,
        }
    }
}

impl From<Target> for Targets {
    fn from(target: Target) -> Self {
        target.flag()
    }
}

impl Targets {
    /// Named targets set in this mask, in declaration order.
    pub fn values(self) -> impl Iterator<Item = Target> {
        Target::iter().filter(move |target| self.contains(target.flag()))
    }
}

impl CategoryValue for Target {
    const CATEGORY: Category = Category::Target;

    fn info(self) -> ValueInfo {
        match self {
            Target::Untargetable => ValueInfo::new(15336, "Untargetable"),
            Target::SelfOrAlly => ValueInfo::new(15338, "Targets Self or Ally"),
            Target::Enemy => ValueInfo::new(15339, "Targets Enemy"),
        }
    }
}

impl From<Target> for FilterKey {
    fn from(value: Target) -> Self {
        FilterKey::Target(value)
    }
}
