//! Raw rows to published catalog.
//!
//! Ingestion is all-or-nothing: the first join, column or parse failure
//! aborts the build and no partial catalog is produced.
pub mod assemble;
pub mod flags;
pub mod join;
pub mod stats;

pub use assemble::assemble;
pub use flags::{compose_effects, compose_targets};
pub use join::{JoinError, JoinedRows, RowJoiner};
pub use stats::{ParseError, StatLine};

use grimoire_core::{
    Catalog, CatalogConfig, CatalogError, DexError, ErrorSeverity, RichTextDecoder, RowError,
    RowId, RowStore,
};

/// Errors raised while building the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Join(#[from] JoinError),

    #[error("spell {primary}: {source}")]
    Parse { primary: RowId, source: ParseError },

    #[error("sheet '{sheet}' row {id}: {source}")]
    Row {
        sheet: String,
        id: RowId,
        source: RowError,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl DexError for IngestError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            IngestError::Join(error) => error.severity(),
            IngestError::Parse { source, .. } => source.severity(),
            IngestError::Row { source, .. } => source.severity(),
            IngestError::Catalog(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            IngestError::Join(error) => error.error_code(),
            IngestError::Parse { source, .. } => source.error_code(),
            IngestError::Row { source, .. } => source.error_code(),
            IngestError::Catalog(error) => error.error_code(),
        }
    }
}

/// Joins, parses and assembles every spell of `store`, then publishes the
/// display-ordered catalog.
pub fn build_catalog<S: RowStore + ?Sized>(
    store: &S,
    decoder: &dyn RichTextDecoder,
    config: &CatalogConfig,
) -> Result<Catalog, IngestError> {
    let joiner = RowJoiner::new(store, &config.sheets);
    let primary_ids = joiner.primary_ids();

    let records = primary_ids
        .iter()
        .map(|&primary| assemble(&joiner.join(primary)?, decoder, config))
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = Catalog::from_records(records)?;
    tracing::info!(
        spells = catalog.len(),
        fingerprint = %hex::encode(catalog.fingerprint()),
        "published spell catalog"
    );
    Ok(catalog)
}
