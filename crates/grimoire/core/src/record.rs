//! Assembled spell records.
use arrayvec::ArrayVec;

use crate::category::{
    Aspects, CastTime, IconId, RecastTime, SpellEffect, SpellRank, SpellType, Targets,
};
use crate::filter::FilterKey;

/// Unique, non-zero identifier of an action in the game action table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub u32);

impl core::fmt::Display for ActionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status effects inflicted by a spell, in column order.
pub type EffectSet = ArrayVec<SpellEffect, { SpellEffect::COUNT }>;

/// One fully normalized spell.
///
/// Every field except `is_unlocked` is fixed once the catalog is published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRecord {
    pub action_id: ActionId,

    /// Position in the in-game spell log; drives display order.
    pub display_number: u32,

    pub icon: IconId,
    pub name: String,
    pub description: String,
    pub flavor_text: String,
    pub rank: SpellRank,
    pub spell_type: SpellType,
    pub target: Targets,
    pub aspects: Aspects,
    pub effects: EffectSet,
    pub cast_time: CastTime,
    pub recast_time: RecastTime,

    /// Key the host uses to resolve unlock state.
    pub unlock_key: u32,
    pub is_unlocked: bool,
}

impl ActionRecord {
    /// Returns true if the record carries the given category value.
    ///
    /// Flag fields match when the bit is set; scalar fields match by equality.
    pub fn has(&self, key: FilterKey) -> bool {
        match key {
            FilterKey::Rank(rank) => self.rank == rank,
            FilterKey::Type(spell_type) => self.spell_type == spell_type,
            FilterKey::Target(target) => self.target.contains(target.flag()),
            FilterKey::Aspect(aspect) => self.aspects.contains(aspect.flag()),
            FilterKey::Effect(effect) => self.effects.contains(&effect),
            FilterKey::Cast(cast) => self.cast_time == cast,
            FilterKey::Recast(recast) => self.recast_time == recast,
        }
    }
}
