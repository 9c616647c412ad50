//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use grimoire_core::{Catalog, CatalogConfig, DexError};

use crate::ingest::build_catalog;
use crate::loaders::{ConfigLoader, LoadResult, RowStoreLoader};
use crate::store::MemoryRowStore;
use crate::text::SeTextDecoder;

/// Content factory that loads all catalog content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// └── rows.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load catalog configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<CatalogConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load_or_default(&path)
    }

    /// Load raw sheet rows from `rows.ron`.
    pub fn load_rows(&self) -> LoadResult<MemoryRowStore> {
        let path = self.data_dir.join("rows.ron");
        RowStoreLoader::load(&path)
    }

    /// Load rows and ingest them into a published catalog.
    pub fn load_catalog(&self, config: &CatalogConfig) -> LoadResult<Catalog> {
        let rows = self.load_rows()?;
        let catalog = build_catalog(&rows, &SeTextDecoder::new(), config).map_err(|e| {
            let severity = e.severity().as_str();
            tracing::error!(code = e.error_code(), severity, "catalog ingestion failed: {e}");
            anyhow::anyhow!(
                "Failed to ingest {} [{}, {}]: {}",
                self.data_dir.join("rows.ron").display(),
                e.error_code(),
                severity,
                e
            )
        })?;
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
