//! Spell catalog client binary.
//!
//! Composition root: loads configuration, ingests the catalog from the data
//! directory, resolves unlock state and runs one command against it.
//!
//! # Examples
//!
//! ```bash
//! # Magical fire spells
//! grimoire list --type magical --aspect fire
//!
//! # Filter panel with the current state
//! grimoire filters
//!
//! # One spell in detail, with unlock state from a snapshot
//! GRIMOIRE_UNLOCKS=unlocks.ron grimoire show 11385
//! ```

mod cli;
mod config;
mod logging;
mod presentation;
mod unlock;

use anyhow::Result;
use clap::Parser;
use grimoire_content::ContentFactory;
use grimoire_core::Grimoire;

use cli::Cli;
use config::ClientConfig;
use unlock::{SnapshotUnlocks, UnlockResolver};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(data_dir) = cli.data_dir.clone() {
        config.data_dir = data_dir;
    }
    if let Some(unlocks) = cli.unlocks.clone() {
        config.unlocks = Some(unlocks);
    }
    if cli.hide_locked {
        config.hide_locked = Some(true);
    }

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    tracing::debug!("Data directory: {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);
    let mut catalog_config = factory.load_config()?;
    if let Some(hide_locked) = config.hide_locked {
        catalog_config.hide_locked = hide_locked;
    }
    let catalog = factory.load_catalog(&catalog_config)?;
    let mut grimoire = Grimoire::new(catalog, &catalog_config);

    if let Some(path) = &config.unlocks {
        let unlocks = SnapshotUnlocks::load(path)?;
        tracing::debug!(keys = unlocks.len(), "Loaded unlock snapshot {}", path.display());
        UnlockResolver::new(unlocks).handle(cli.event, &mut grimoire);
    }

    cli.command.execute(&mut grimoire)
}
