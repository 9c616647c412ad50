//! Row store loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::store::MemoryRowStore;

/// Loader for raw sheet rows from RON files.
pub struct RowStoreLoader;

impl RowStoreLoader {
    /// Load every sheet of a `rows.ron` file.
    pub fn load(path: &Path) -> LoadResult<MemoryRowStore> {
        let content = read_file(path)?;
        let store = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rows RON at {}: {}", path.display(), e))?;

        for sheet in store.sheet_names() {
            tracing::debug!(sheet, rows = store.sheet_len(sheet), "loaded sheet");
        }
        Ok(store)
    }

    pub fn parse(content: &str) -> LoadResult<MemoryRowStore> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}
