/// Oracle answering whether the player has learned a spell.
///
/// Implemented by the host; the catalog only stores the answer.
pub trait UnlockOracle {
    fn is_unlocked(&self, unlock_key: u32) -> bool;
}
