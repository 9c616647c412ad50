//! Catalog configuration loader.

use std::path::Path;

use grimoire_core::CatalogConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for catalog configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Omitted keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<CatalogConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the default
    /// configuration.
    pub fn load_or_default(path: &Path) -> LoadResult<CatalogConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no catalog config, using defaults");
            return Ok(CatalogConfig::default());
        }
        Self::load(path)
    }

    pub fn parse(content: &str) -> LoadResult<CatalogConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
