//! Catalog ingestion and data loaders.
//!
//! This crate turns raw game data sheets into the published spell catalog:
//! - Row store (in-memory sheets, data-driven via RON)
//! - Rich text decoding for markup-laden cells
//! - The ingestion pipeline (join, parse, compose, assemble)
//! - Catalog configuration (data-driven via TOML)
//!
//! Ingestion works against any [`grimoire_core::RowStore`]; the loaders only
//! supply the file-backed one.

pub mod ingest;
pub mod store;
pub mod text;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use ingest::{
    IngestError, JoinError, JoinedRows, ParseError, RowJoiner, StatLine, assemble, build_catalog,
    compose_effects, compose_targets,
};
pub use store::MemoryRowStore;
pub use text::SeTextDecoder;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RowStoreLoader};
