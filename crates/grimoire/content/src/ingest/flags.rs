//! Positional boolean columns composed into flag sets.
use grimoire_core::{EffectSet, SpellEffect, Targets};
use strum::IntoEnumIterator;

/// Combines the two targeting columns.
///
/// A spell with neither bit set is [`Targets::UNTARGETABLE`]; the empty mask
/// is never produced.
pub fn compose_targets(targets_enemy: bool, targets_self_or_ally: bool) -> Targets {
    let mut targets = Targets::empty();
    targets.set(Targets::ENEMY, targets_enemy);
    targets.set(Targets::SELF_OR_ALLY, targets_self_or_ally);
    if targets.is_empty() {
        Targets::UNTARGETABLE
    } else {
        targets
    }
}

/// Maps the ten effect columns, in [`SpellEffect`] declaration order, onto
/// the set of inflicted effects.
pub fn compose_effects(columns: [bool; SpellEffect::COUNT]) -> EffectSet {
    SpellEffect::iter()
        .zip(columns)
        .filter_map(|(effect, set)| set.then_some(effect))
        .collect()
}
