//! Host side of unlock resolution.
//!
//! The host learns which spells are unlocked from a snapshot file and pushes
//! the answers into the catalog whenever a lifecycle event may have changed
//! them.
use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use grimoire_core::{Grimoire, UnlockOracle};

/// Host lifecycle events after which unlock state may have changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LifecycleEvent {
    /// The catalog has just been published.
    #[default]
    Ready,
    Login,
    ZoneChanged,
}

/// Unlock keys read from a RON list, e.g. `[12385, 12398]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotUnlocks {
    keys: BTreeSet<u32>,
}

impl SnapshotUnlocks {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read unlock snapshot {}: {}", path.display(), e)
        })?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse unlock snapshot {}: {}", path.display(), e)
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        let keys: Vec<u32> = ron::from_str(content)?;
        Ok(Self {
            keys: keys.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<u32> for SnapshotUnlocks {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl UnlockOracle for SnapshotUnlocks {
    fn is_unlocked(&self, unlock_key: u32) -> bool {
        self.keys.contains(&unlock_key)
    }
}

/// Re-resolves every spell on each lifecycle event.
pub struct UnlockResolver<O> {
    oracle: O,
}

impl<O: UnlockOracle> UnlockResolver<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Returns the number of spells whose unlock state changed.
    pub fn handle(&self, event: LifecycleEvent, grimoire: &mut Grimoire) -> usize {
        let changed = grimoire.refresh_unlocks(&self.oracle);
        tracing::info!(?event, changed, "resolved unlock state");
        changed
    }
}
